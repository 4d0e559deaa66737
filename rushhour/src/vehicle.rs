use crate::error::BoardError;

/// Name of the vehicle that must reach the goal cell.
pub const RED_CAR: &str = "X";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn parse(value: &str, row: usize) -> Result<Self, BoardError> {
        match value {
            "H" => Ok(Orientation::Horizontal),
            "V" => Ok(Orientation::Vertical),
            _ => Err(BoardError::BadOrientation {
                value: value.to_string(),
                row,
            }),
        }
    }
}

/// A rigid, axis-aligned occupant of the board. Two vehicles are the
/// same vehicle iff their names match.
#[derive(Debug, Clone, Eq)]
pub struct Vehicle {
    pub name: String,
    pub orientation: Orientation,
    pub length: usize,
}

impl Vehicle {
    pub fn is_red_car(&self) -> bool {
        self.name == RED_CAR
    }
}

impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
