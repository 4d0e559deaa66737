use crate::error::TimetableError;
use crate::records::{RoomRecord, ScheduleRecord};
use std::collections::{BTreeMap, BTreeSet};

/// Malus breakdown for a feasible schedule. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub free_slots: u64,
    pub overlap: u64,
    pub room: u64,
    pub evening: u64,
}

impl Score {
    pub fn total(&self) -> u64 {
        self.free_slots + self.overlap + self.room + self.evening
    }
}

/// Key of one scheduled session: a group of students attending the
/// same activity in the same room at the same moment.
type SessionKey<'a> = (&'a str, &'a str, &'a str, i64, &'a str);

fn sessions(records: &[ScheduleRecord]) -> BTreeMap<SessionKey<'_>, usize> {
    let mut groups = BTreeMap::new();
    for r in records {
        let key = (
            r.course.as_str(),
            r.activity.as_str(),
            r.room.as_str(),
            r.time,
            r.day.as_str(),
        );
        *groups.entry(key).or_insert(0) += 1;
    }
    groups
}

/// Malus for gaps in a student's day, from the span between the first
/// and last distinct slot of that day. A span too large for the slot
/// count makes the schedule infeasible.
pub fn free_slot_malus(records: &[ScheduleRecord]) -> Result<u64, TimetableError> {
    let mut per_student_day: BTreeMap<(&str, &str), BTreeSet<i64>> = BTreeMap::new();
    for r in records {
        per_student_day
            .entry((r.student.as_str(), r.day.as_str()))
            .or_default()
            .insert(r.time);
    }

    let mut malus = 0u64;
    let mut infeasible_students = 0usize;
    for slots in per_student_day.values() {
        let (Some(first), Some(last)) = (slots.first(), slots.last()) else {
            continue;
        };
        let span = last - first;
        match slots.len() {
            0 | 1 => {}
            2 => match span {
                4 => malus += 1,
                6 => malus += 3,
                s if s > 6 => infeasible_students += 1,
                _ => {}
            },
            3 => match span {
                6 => malus += 1,
                8 => malus += 3,
                _ => {}
            },
            4 => {
                if span == 10 {
                    malus += 1;
                }
            }
            _ => {}
        }
    }

    if infeasible_students > 0 {
        return Err(TimetableError::TooManyFreeSlots {
            students: infeasible_students,
        });
    }
    Ok(malus)
}

/// 1 malus point per duplicate (student, day, time) record beyond the
/// first, regardless of which courses overlap.
pub fn overlap_malus(records: &[ScheduleRecord]) -> u64 {
    let mut seen = BTreeSet::new();
    let mut malus = 0u64;
    for r in records {
        if !seen.insert((r.student.as_str(), r.day.as_str(), r.time)) {
            malus += 1;
        }
    }
    malus
}

/// For each session, the number of attendees beyond the room's
/// capacity. Rooms missing from the capacity table contribute
/// nothing.
pub fn room_malus(records: &[ScheduleRecord], rooms: &[RoomRecord]) -> u64 {
    let capacities: BTreeMap<&str, i64> = rooms
        .iter()
        .map(|r| (r.name.as_str(), r.capacity))
        .collect();

    let mut malus = 0u64;
    for ((_, _, room, _, _), attendees) in sessions(records) {
        if let Some(&capacity) = capacities.get(room) {
            let overage = attendees as i64 - capacity;
            if overage > 0 {
                malus += overage as u64;
            }
        }
    }
    malus
}

/// 5 malus points per session scheduled in the evening slot.
pub fn evening_malus(records: &[ScheduleRecord], evening_slot: i64) -> u64 {
    sessions(records)
        .keys()
        .filter(|&&(_, _, _, time, _)| time == evening_slot)
        .count() as u64
        * 5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(student: &str, course: &str, day: &str, time: i64, room: &str) -> ScheduleRecord {
        ScheduleRecord {
            student: student.to_string(),
            course: course.to_string(),
            activity: "h1".to_string(),
            day: day.to_string(),
            time,
            room: room.to_string(),
        }
    }

    fn room(name: &str, capacity: i64) -> RoomRecord {
        RoomRecord {
            name: name.to_string(),
            capacity,
        }
    }

    #[test]
    fn overlap_is_one_per_extra_row_regardless_of_course() {
        let records = vec![
            record("a", "Calculus", "mo", 9, "A1"),
            record("a", "Physics", "mo", 9, "A2"),
            record("a", "Biology", "mo", 9, "A3"),
            record("b", "Calculus", "mo", 9, "A1"),
        ];
        assert_eq!(overlap_malus(&records), 2);
    }

    #[test]
    fn no_overlap_no_malus() {
        let records = vec![
            record("a", "Calculus", "mo", 9, "A1"),
            record("a", "Calculus", "tu", 9, "A1"),
            record("a", "Calculus", "mo", 11, "A1"),
        ];
        assert_eq!(overlap_malus(&records), 0);
    }

    #[test]
    fn two_slots_span_four_costs_one() {
        let records = vec![
            record("a", "Calculus", "mo", 9, "A1"),
            record("a", "Physics", "mo", 13, "A1"),
        ];
        assert_eq!(free_slot_malus(&records).unwrap(), 1);
    }

    #[test]
    fn two_slots_span_six_costs_three() {
        let records = vec![
            record("a", "Calculus", "mo", 9, "A1"),
            record("a", "Physics", "mo", 15, "A1"),
        ];
        assert_eq!(free_slot_malus(&records).unwrap(), 3);
    }

    #[test]
    fn two_slots_span_beyond_six_is_infeasible() {
        let records = vec![
            record("a", "Calculus", "mo", 9, "A1"),
            record("a", "Physics", "mo", 17, "A1"),
        ];
        assert!(matches!(
            free_slot_malus(&records),
            Err(TimetableError::TooManyFreeSlots { students: 1 })
        ));
    }

    #[test]
    fn three_slots_span_six_costs_one() {
        let records = vec![
            record("a", "Calculus", "mo", 9, "A1"),
            record("a", "Physics", "mo", 11, "A1"),
            record("a", "Biology", "mo", 15, "A1"),
        ];
        assert_eq!(free_slot_malus(&records).unwrap(), 1);
    }

    #[test]
    fn three_slots_span_eight_costs_three() {
        let records = vec![
            record("a", "Calculus", "mo", 9, "A1"),
            record("a", "Physics", "mo", 11, "A1"),
            record("a", "Biology", "mo", 17, "A1"),
        ];
        assert_eq!(free_slot_malus(&records).unwrap(), 3);
    }

    #[test]
    fn four_slots_span_ten_costs_one() {
        let records = vec![
            record("a", "Calculus", "mo", 9, "A1"),
            record("a", "Physics", "mo", 11, "A1"),
            record("a", "Biology", "mo", 13, "A1"),
            record("a", "Chemistry", "mo", 19, "A1"),
        ];
        assert_eq!(free_slot_malus(&records).unwrap(), 1);
    }

    #[test]
    fn adjacent_slots_cost_nothing() {
        let records = vec![
            record("a", "Calculus", "mo", 9, "A1"),
            record("a", "Physics", "mo", 11, "A1"),
        ];
        assert_eq!(free_slot_malus(&records).unwrap(), 0);
    }

    #[test]
    fn duplicate_times_collapse_to_one_slot() {
        let records = vec![
            record("a", "Calculus", "mo", 9, "A1"),
            record("a", "Physics", "mo", 9, "A2"),
        ];
        assert_eq!(free_slot_malus(&records).unwrap(), 0);
    }

    #[test]
    fn room_overage_is_charged_per_student() {
        let records = vec![
            record("a", "Calculus", "mo", 9, "A1"),
            record("b", "Calculus", "mo", 9, "A1"),
            record("c", "Calculus", "mo", 9, "A1"),
        ];
        let rooms = vec![room("A1", 2)];
        assert_eq!(room_malus(&records, &rooms), 1);
    }

    #[test]
    fn room_within_capacity_costs_nothing() {
        let records = vec![
            record("a", "Calculus", "mo", 9, "A1"),
            record("b", "Calculus", "mo", 9, "A1"),
        ];
        let rooms = vec![room("A1", 10)];
        assert_eq!(room_malus(&records, &rooms), 0);
    }

    #[test]
    fn unknown_room_contributes_nothing() {
        let records = vec![record("a", "Calculus", "mo", 9, "B9")];
        let rooms = vec![room("A1", 0)];
        assert_eq!(room_malus(&records, &rooms), 0);
    }

    #[test]
    fn evening_sessions_cost_five_each() {
        let records = vec![
            record("a", "Calculus", "mo", 17, "A1"),
            record("b", "Calculus", "mo", 17, "A1"),
            record("a", "Physics", "tu", 17, "A1"),
            record("a", "Biology", "mo", 9, "A1"),
        ];
        // Calculus mo and Physics tu are two distinct sessions.
        assert_eq!(evening_malus(&records, 17), 10);
    }

    #[test]
    fn score_totals_all_components() {
        let score = Score {
            free_slots: 1,
            overlap: 2,
            room: 3,
            evening: 5,
        };
        assert_eq!(score.total(), 11);
    }
}
