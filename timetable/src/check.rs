use crate::error::TimetableError;
use crate::records::{self, CourseRecord, RoomRecord, ScheduleRecord};
use crate::score::{self, Score};
use judge_common::record::Table;
use std::collections::BTreeSet;
use std::path::Path;

/// Runs the full scheduling check chain: hard feasibility rules
/// first, then the malus computation. Returns the score breakdown.
pub fn run(
    schedule_file: &Path,
    courses_file: &Path,
    rooms_file: &Path,
    evening_slot: i64,
) -> Result<Score, TimetableError> {
    let schedule = records::load_schedule(&Table::from_path(schedule_file)?)?;
    let courses = records::load_courses(&Table::from_path(courses_file)?)?;
    let rooms = records::load_rooms(&Table::from_path(rooms_file)?)?;
    log::info!(
        "Checking {} schedule records against {} courses and {} rooms",
        schedule.len(),
        courses.len(),
        rooms.len()
    );

    check_no_duplicates(&schedule)?;
    check_evening_rooms(&schedule, &rooms, evening_slot)?;
    check_completeness(&schedule, &courses)?;

    let free_slots = score::free_slot_malus(&schedule)?;
    let overlap = score::overlap_malus(&schedule);
    let room = score::room_malus(&schedule, &rooms);
    let evening = score::evening_malus(&schedule, evening_slot);

    Ok(Score {
        free_slots,
        overlap,
        room,
        evening,
    })
}

/// No student may be scheduled twice for the same activity.
pub fn check_no_duplicates(records: &[ScheduleRecord]) -> Result<(), TimetableError> {
    let mut seen = BTreeSet::new();
    let mut duplicates = Vec::new();
    for r in records {
        let triple = (r.student.as_str(), r.course.as_str(), r.activity.as_str());
        if !seen.insert(triple) {
            duplicates.push((r.student.clone(), r.course.clone(), r.activity.clone()));
        }
    }
    if !duplicates.is_empty() {
        return Err(TimetableError::DuplicateActivity { triples: duplicates });
    }
    Ok(())
}

/// If the evening slot is used at all, every record in it must use
/// the single largest-capacity room.
pub fn check_evening_rooms(
    records: &[ScheduleRecord],
    rooms: &[RoomRecord],
    evening_slot: i64,
) -> Result<(), TimetableError> {
    let evening: Vec<_> = records.iter().filter(|r| r.time == evening_slot).collect();
    if evening.is_empty() {
        return Ok(());
    }

    let largest = rooms
        .iter()
        .max_by_key(|r| r.capacity)
        .ok_or(TimetableError::NoRooms)?;

    for r in evening {
        if r.room != largest.name {
            return Err(TimetableError::EveningRoomMisuse {
                room: r.room.clone(),
                largest: largest.name.clone(),
            });
        }
    }
    Ok(())
}

/// Every course must have all its declared sessions scheduled:
/// lectures `h1..hN`, tutorials `w1..wM` and practicals `p1..pK`.
/// The scheduled (course, activity) pairs must form a superset of the
/// required set.
pub fn check_completeness(
    records: &[ScheduleRecord],
    courses: &[CourseRecord],
) -> Result<(), TimetableError> {
    let scheduled: BTreeSet<(&str, &str)> = records
        .iter()
        .map(|r| (r.course.as_str(), r.activity.as_str()))
        .collect();

    let mut missing = Vec::new();
    for course in courses {
        let sessions = [
            ("h", course.lectures),
            ("w", course.tutorials),
            ("p", course.practicals),
        ];
        for (prefix, count) in sessions {
            for i in 1..=count.max(0) {
                let code = format!("{}{}", prefix, i);
                if !scheduled.contains(&(course.name.as_str(), code.as_str())) {
                    missing.push((course.name.clone(), code));
                }
            }
        }
    }

    if !missing.is_empty() {
        return Err(TimetableError::MissingActivities { pairs: missing });
    }
    Ok(())
}
