use judge_common::record::RecordError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("expected orientation 'H' or 'V', found '{value}' on row {row}")]
    BadOrientation { value: String, row: usize },
    #[error("invalid characters used for a car, expected only letters but found '{value}' on row {row}")]
    NonAlphabeticCar { value: String, row: usize },
    #[error("car '{value}' on row {row} is not on the board")]
    UnknownCar { value: String, row: usize },
    #[error("no vehicle named '{name}' on this board")]
    NoSuchVehicle { name: String },
    #[error("invalid value used for a move, expected an integer but found '{value}' on row {row}")]
    BadMove { value: String, row: usize },

    #[error("vehicle {vehicle} hit the wall at {col},{row}")]
    WallHit {
        vehicle: String,
        col: i64,
        row: i64,
    },
    #[error("collision at {col},{row} between {moving} and {occupant}")]
    Collision {
        moving: String,
        occupant: String,
        col: i64,
        row: i64,
    },

    #[error("moving {car} with {steps} failed: {cause}\nthis is the state in which it happened:\n{board}")]
    MoveFailed {
        car: String,
        steps: i64,
        board: String,
        cause: Box<BoardError>,
    },
    #[error("the board is not solved after resolving all moves, this is the final state:\n{board}")]
    NotSolved { board: String },
}
