pub mod check;
pub mod error;
pub mod records;
pub mod score;

pub use error::TimetableError;
pub use records::{CourseRecord, RoomRecord, ScheduleRecord};
