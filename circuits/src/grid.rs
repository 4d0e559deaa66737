use crate::error::CircuitError;
use crate::net::Net;
use judge_common::geom::coord::GridCoord;
use judge_common::record::Table;

pub const NUMBER_OF_LAYERS: i64 = 8;

/// Penalty applied per extra wire sharing a cell, on top of the base
/// cost of 1 per wire segment.
pub const OVERLAP_PENALTY: u64 = 300;

/// A fixed terminal on the routing grid. Gates only exist on layer 0.
#[derive(Debug, Clone)]
pub struct Gate {
    pub id: String,
    pub x: i64,
    pub y: i64,
}

impl Gate {
    pub fn coord(&self) -> GridCoord {
        GridCoord::new(self.x, self.y, 0)
    }

    pub fn label(&self) -> String {
        format!("G({})", self.id)
    }
}

/// One grid intersection. A gate cell never hosts wires; a wire cell
/// may host several nets (overlap is priced, not rejected).
#[derive(Debug, Clone, Default)]
struct Cell {
    gate: Option<usize>,
    occupants: Vec<usize>,
}

impl Cell {
    fn is_gate(&self) -> bool {
        self.gate.is_some()
    }
}

/// Multi-layer occupancy grid sized to fit all gates plus a one-cell
/// margin. Cells are stored flat, indexed [layer][y][x].
#[derive(Debug)]
pub struct Grid {
    width: i64,
    height: i64,
    gates: Vec<Gate>,
    nets: Vec<Net>,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from a print layout table (`chip,x,y`) and places
    /// every gate onto layer 0.
    pub fn load(table: &Table) -> Result<Grid, CircuitError> {
        table.expect_headers(&["chip", "x", "y"])?;

        let mut gates = Vec::with_capacity(table.rows.len());
        for row in &table.rows {
            let gate = Gate {
                id: row.values[0].clone(),
                x: row.int(1)?,
                y: row.int(2)?,
            };
            if gate.x < 0 || gate.y < 0 {
                return Err(CircuitError::BadGateCoord {
                    id: gate.id,
                    x: gate.x,
                    y: gate.y,
                    row: row.line,
                });
            }
            gates.push(gate);
        }

        let width = gates.iter().map(|g| g.x).max().unwrap_or(0) + 2;
        let height = gates.iter().map(|g| g.y).max().unwrap_or(0) + 2;

        let size = (width * height * NUMBER_OF_LAYERS) as usize;
        let mut grid = Grid {
            width,
            height,
            gates,
            nets: Vec::new(),
            cells: vec![Cell::default(); size],
        };

        for i in 0..grid.gates.len() {
            let coord = grid.gates[i].coord();
            let idx = grid.index(coord);
            let cell = &mut grid.cells[idx];
            if let Some(existing) = cell.gate {
                return Err(CircuitError::DuplicateGatePlacement {
                    a: grid.gates[existing].id.clone(),
                    b: grid.gates[i].id.clone(),
                });
            }
            cell.gate = Some(i);
        }

        Ok(grid)
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    fn index(&self, coord: GridCoord) -> usize {
        (coord.z * self.width * self.height + coord.y * self.width + coord.x) as usize
    }

    fn in_bounds(&self, coord: GridCoord) -> bool {
        (0..self.width).contains(&coord.x)
            && (0..self.height).contains(&coord.y)
            && (0..NUMBER_OF_LAYERS).contains(&coord.z)
    }

    pub fn gate(&self, id: &str) -> Option<&Gate> {
        self.gates.iter().find(|g| g.id == id)
    }

    /// Occupies every interior waypoint of the net's path. The first
    /// and last waypoints coincide with the endpoint gates and are
    /// skipped. Fails if a waypoint lands on a gate cell.
    pub fn place_net(&mut self, net: Net) -> Result<(), CircuitError> {
        let net_id = self.nets.len();

        let interior = if net.wires.len() > 2 {
            &net.wires[1..net.wires.len() - 1]
        } else {
            &[][..]
        };
        for &wire in interior {
            if !self.in_bounds(wire) {
                return Err(CircuitError::WireOutOfBounds {
                    net: net.label(),
                    coord: wire.to_string(),
                });
            }
            let idx = self.index(wire);
            let cell = &mut self.cells[idx];
            if let Some(gate) = cell.gate {
                return Err(CircuitError::OccupiedByGate {
                    net: net.label(),
                    gate: self.gates[gate].label(),
                });
            }
            cell.occupants.push(net_id);
        }

        self.nets.push(net);
        Ok(())
    }

    /// Total wire cost: 1 per wire segment per cell, plus 300 per
    /// extra occupant where wires share a cell. The stored paths count
    /// intersections, one more than physical segments, so one is
    /// added back per net to convert to wire length.
    pub fn cost(&self) -> u64 {
        let mut cost = 0u64;
        for cell in &self.cells {
            if cell.is_gate() {
                continue;
            }
            let occupants = cell.occupants.len() as u64;
            cost += occupants;
            if occupants > 1 {
                cost += OVERLAP_PENALTY * (occupants - 1);
            }
        }
        cost + self.nets.len() as u64
    }

    /// Textual rendering of every layer, for debug logging. Rows are
    /// printed with y descending and 1-based axis labels, matching
    /// the coordinate convention of the input files.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for z in 0..NUMBER_OF_LAYERS {
            out.push_str(&self.render_layer(z));
            out.push('\n');
        }
        out
    }

    fn cell_text(&self, coord: GridCoord) -> String {
        let cell = &self.cells[self.index(coord)];
        if let Some(gate) = cell.gate {
            return self.gates[gate].label();
        }
        if cell.occupants.is_empty() {
            return ".".to_string();
        }
        cell.occupants
            .iter()
            .map(|&n| self.nets[n].label())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn render_layer(&self, z: i64) -> String {
        let mut cell_width = 1;
        for y in 0..self.height {
            for x in 0..self.width {
                cell_width = cell_width.max(self.cell_text(GridCoord::new(x, y, z)).len());
            }
        }

        let mut out = String::new();
        out.push_str(&" ".repeat(cell_width));
        for x in 0..self.width {
            out.push(' ');
            out.push_str(&format!("{:>cell_width$}", x + 1));
        }
        out.push('\n');

        for y in (0..self.height).rev() {
            out.push_str(&format!("{:>cell_width$}", y + 1));
            for x in 0..self.width {
                out.push(' ');
                out.push_str(&format!(
                    "{:>cell_width$}",
                    self.cell_text(GridCoord::new(x, y, z))
                ));
            }
            out.push('\n');
        }
        out
    }
}
