use crate::error::TimetableError;
use judge_common::record::Table;

/// One scheduled (student, activity) assignment.
#[derive(Debug, Clone)]
pub struct ScheduleRecord {
    pub student: String,
    pub course: String,
    pub activity: String,
    pub day: String,
    pub time: i64,
    pub room: String,
}

/// A course with its declared session counts. The Dutch column names
/// of the source files are kept for compatibility.
#[derive(Debug, Clone)]
pub struct CourseRecord {
    pub name: String,
    pub lectures: i64,
    pub tutorials: i64,
    pub practicals: i64,
}

#[derive(Debug, Clone)]
pub struct RoomRecord {
    pub name: String,
    pub capacity: i64,
}

pub fn load_schedule(table: &Table) -> Result<Vec<ScheduleRecord>, TimetableError> {
    table.expect_headers(&["student", "course", "activity", "day", "time", "room"])?;
    let mut records = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        records.push(ScheduleRecord {
            student: row.values[0].clone(),
            course: row.values[1].clone(),
            activity: row.values[2].clone(),
            day: row.values[3].clone(),
            time: row.int(4)?,
            room: row.values[5].clone(),
        });
    }
    Ok(records)
}

pub fn load_courses(table: &Table) -> Result<Vec<CourseRecord>, TimetableError> {
    // "Zaalnummber" below and these headers are verbatim from the
    // reference data files, misspellings included.
    table.expect_headers(&["Vak", "#Hoorcolleges", "#Werkcolleges", "#Practica"])?;
    let mut records = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        records.push(CourseRecord {
            name: row.values[0].clone(),
            lectures: row.int(1)?,
            tutorials: row.int(2)?,
            practicals: row.int(3)?,
        });
    }
    Ok(records)
}

pub fn load_rooms(table: &Table) -> Result<Vec<RoomRecord>, TimetableError> {
    table.expect_headers(&["Zaalnummber", "Max. capaciteit"])?;
    let mut records = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        records.push(RoomRecord {
            name: row.values[0].clone(),
            capacity: row.int(1)?,
        });
    }
    Ok(records)
}
