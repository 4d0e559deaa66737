use crate::error::CircuitError;
use crate::grid::Gate;
use judge_common::geom::coord::GridCoord;

/// A routed connection between two gates. The wire path is stored as
/// the ordered grid intersections the wire passes through, first and
/// last coinciding with the two gate cells.
#[derive(Debug, Clone)]
pub struct Net {
    pub gate_a: Gate,
    pub gate_b: Gate,
    pub wires: Vec<GridCoord>,
}

impl Net {
    /// Validates connectivity and continuity eagerly, so a net handed
    /// to the grid only needs the gate-collision check.
    pub fn new(gate_a: Gate, gate_b: Gate, wires: Vec<GridCoord>) -> Result<Net, CircuitError> {
        let net = Net {
            gate_a,
            gate_b,
            wires,
        };
        net.check_connected()?;
        net.check_continuous()?;
        Ok(net)
    }

    pub fn label(&self) -> String {
        format!("N({},{})", self.gate_a.id, self.gate_b.id)
    }

    /// The first wire must sit on one endpoint gate and the last wire
    /// on the other, in either orientation.
    fn check_connected(&self) -> Result<(), CircuitError> {
        if let (Some(first), Some(last)) = (self.wires.first(), self.wires.last()) {
            let a = self.gate_a.coord();
            let b = self.gate_b.coord();

            if first.manhattan_distance(&a) == 0 && last.manhattan_distance(&b) == 0 {
                return Ok(());
            }
            if first.manhattan_distance(&b) == 0 && last.manhattan_distance(&a) == 0 {
                return Ok(());
            }
        }

        Err(CircuitError::UnconnectedNet {
            net: self.label(),
            gate_a: self.gate_a.label(),
            gate_b: self.gate_b.label(),
        })
    }

    /// Consecutive wires must be exactly one Manhattan step apart.
    fn check_continuous(&self) -> Result<(), CircuitError> {
        for pair in self.wires.windows(2) {
            if pair[0].manhattan_distance(&pair[1]) != 1 {
                return Err(CircuitError::InterruptedNet {
                    net: self.label(),
                    a: pair[0].to_string(),
                    b: pair[1].to_string(),
                });
            }
        }
        Ok(())
    }
}
