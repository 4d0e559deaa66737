use crate::error::BoardError;
use crate::vehicle::{Orientation, Vehicle};
use judge_common::record::Table;

const EMPTY_TILE: &str = "_";

/// An immutable snapshot of the sliding-block board. Moves never
/// mutate: each unit step produces a fresh board, so the pre-move
/// state stays available for diagnostics.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    vehicles: Vec<Vehicle>,
    anchors: Vec<(usize, usize)>,
    cells: Vec<Option<usize>>,
}

impl Board {
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            vehicles: Vec::new(),
            anchors: Vec::new(),
            cells: vec![None; size * size],
        }
    }

    /// Builds the starting board from a layout table
    /// (`car,orientation,length,col,row`, 1-indexed positions).
    pub fn load(table: &Table, size: usize) -> Result<Board, BoardError> {
        table.expect_headers(&["car", "orientation", "length", "col", "row"])?;

        let mut board = Board::empty(size);
        for entry in &table.rows {
            let vehicle = Vehicle {
                name: entry.values[0].clone(),
                orientation: Orientation::parse(&entry.values[1], entry.line)?,
                length: entry.int(2)?.max(0) as usize,
            };
            let col = entry.int(3)? - 1;
            let row = entry.int(4)? - 1;
            board.place(vehicle, col, row)?;
        }
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, name: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.name == name)
    }

    pub fn location_of(&self, name: &str) -> Option<(usize, usize)> {
        self.vehicles
            .iter()
            .position(|v| v.name == name)
            .map(|i| self.anchors[i])
    }

    fn index(&self, col: usize, row: usize) -> usize {
        row * self.size + col
    }

    /// Places a vehicle with its anchor (leftmost/topmost cell) at
    /// (col,row), validating bounds and occupancy cell by cell.
    pub fn place(&mut self, vehicle: Vehicle, col: i64, row: i64) -> Result<(), BoardError> {
        let footprint: Vec<(i64, i64)> = match vehicle.orientation {
            Orientation::Vertical => (0..vehicle.length as i64)
                .map(|i| (col, row + i))
                .collect(),
            Orientation::Horizontal => (0..vehicle.length as i64)
                .map(|i| (col + i, row))
                .collect(),
        };

        let range = 0..self.size as i64;
        for &(c, r) in &footprint {
            if !range.contains(&c) || !range.contains(&r) {
                return Err(BoardError::WallHit {
                    vehicle: vehicle.name.clone(),
                    col: c + 1,
                    row: r + 1,
                });
            }
            let idx = self.index(c as usize, r as usize);
            if let Some(occupant) = self.cells[idx] {
                return Err(BoardError::Collision {
                    moving: vehicle.name.clone(),
                    occupant: self.vehicles[occupant].name.clone(),
                    col: c + 1,
                    row: r + 1,
                });
            }
        }

        let vehicle_id = self.vehicles.len();
        for &(c, r) in &footprint {
            let idx = self.index(c as usize, r as usize);
            self.cells[idx] = Some(vehicle_id);
        }
        self.vehicles.push(vehicle);
        self.anchors.push((col as usize, row as usize));
        Ok(())
    }

    /// Moves a vehicle by `steps` cells along its orientation axis,
    /// one cell at a time. Every unit step re-places all vehicles on
    /// a fresh board, so a transient collision halfway through a long
    /// move is still caught. Returns the board after the final step.
    pub fn move_vehicle(&self, name: &str, steps: i64) -> Result<Board, BoardError> {
        if self.vehicle(name).is_none() {
            return Err(BoardError::NoSuchVehicle {
                name: name.to_string(),
            });
        }

        let unit = if steps >= 0 { 1 } else { -1 };
        let mut cursor = self.clone();

        for _ in 0..steps.abs() {
            let mut next = Board::empty(cursor.size);

            for (i, other) in cursor.vehicles.iter().enumerate() {
                if other.name == name {
                    continue;
                }
                let (col, row) = cursor.anchors[i];
                next.place(other.clone(), col as i64, row as i64)?;
            }

            let idx = cursor
                .vehicles
                .iter()
                .position(|v| v.name == name)
                .ok_or_else(|| BoardError::NoSuchVehicle {
                    name: name.to_string(),
                })?;
            let (mut col, mut row) = (cursor.anchors[idx].0 as i64, cursor.anchors[idx].1 as i64);
            match cursor.vehicles[idx].orientation {
                Orientation::Vertical => row += unit,
                Orientation::Horizontal => col += unit,
            }
            next.place(cursor.vehicles[idx].clone(), col, row)?;

            cursor = next;
        }

        Ok(cursor)
    }

    /// The board is solved when the red car sits on the goal cell at
    /// the middle of the right edge.
    pub fn is_solved(&self) -> bool {
        let goal_col = self.size - 1;
        let goal_row = (self.size - 1) / 2;
        match self.cells[self.index(goal_col, goal_row)] {
            Some(i) => self.vehicles[i].is_red_car(),
            None => false,
        }
    }

    /// Occupancy-wise equality, ignoring vehicle insertion order.
    pub fn same_occupancy(&self, other: &Board) -> bool {
        if self.size != other.size {
            return false;
        }
        for row in 0..self.size {
            for col in 0..self.size {
                let a = self.cells[self.index(col, row)].map(|i| &self.vehicles[i].name);
                let b = other.cells[other.index(col, row)].map(|i| &other.vehicles[i].name);
                if a != b {
                    return false;
                }
            }
        }
        true
    }

    /// Row-major textual rendering, names right-aligned to the widest
    /// name, `_` for empty cells.
    pub fn render(&self) -> String {
        let name_width = self
            .vehicles
            .iter()
            .map(|v| v.name.len())
            .max()
            .unwrap_or(1);

        let mut out = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let tile = match self.cells[self.index(col, row)] {
                    Some(i) => self.vehicles[i].name.as_str(),
                    None => EMPTY_TILE,
                };
                out.push_str(&format!("{:>name_width$} ", tile));
            }
            out.push('\n');
        }
        out
    }
}
