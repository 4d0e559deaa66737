use judge_common::record::RecordError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimetableError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("schedule is infeasible due to double scheduled activities: {triples:?}")]
    DuplicateActivity { triples: Vec<(String, String, String)> },
    #[error(
        "schedule is infeasible due to wrong usage of the evening slot: room '{room}' used instead of '{largest}'"
    )]
    EveningRoomMisuse { room: String, largest: String },
    #[error("no rooms are defined, cannot validate the evening slot")]
    NoRooms,
    #[error("schedule is infeasible since not all activities are scheduled per course, missing: {pairs:?}")]
    MissingActivities { pairs: Vec<(String, String)> },
    #[error("schedule is infeasible due to too many free slots for {students} students")]
    TooManyFreeSlots { students: usize },
}
