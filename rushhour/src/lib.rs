pub mod board;
pub mod check;
pub mod error;
pub mod vehicle;

pub use board::Board;
pub use error::BoardError;
pub use vehicle::{Orientation, Vehicle};
