pub mod check;
pub mod error;
pub mod grid;
pub mod net;
pub mod parse;

pub use error::CircuitError;
pub use grid::{Gate, Grid};
pub use net::Net;
