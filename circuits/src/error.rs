use judge_common::record::RecordError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CircuitError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("expected last row to be 'chip_<int>_net_<int>,<int>', found '{value}'")]
    BadFooter { value: String },
    #[error("expected chip number to be 0, 1 or 2, but found chip_{found} on row {row}")]
    BadChipNumber { found: String, row: usize },
    #[error("expected netlist number to be 1 till 9, but found net_{found} on row {row}")]
    BadNetNumber { found: String, row: usize },
    #[error(
        "invalid coordinates for a net, expected '(<int>,<int>)' but found '{value}' on row {row}"
    )]
    BadNetCoord { value: String, row: usize },
    #[error(
        "invalid coordinates for a wire, expected '(<int>,<int>[,<int>])' but found '{value}' on row {row}"
    )]
    BadWireCoord { value: String, row: usize },

    #[error("duplicate nets in the output: {pairs:?}")]
    DuplicateNets { pairs: Vec<(i64, i64)> },
    #[error("missing the following nets in the output: {pairs:?}")]
    MissingNets { pairs: Vec<(i64, i64)> },
    #[error("found nets in the output that are not in the netlist: {pairs:?}")]
    ExtraNets { pairs: Vec<(i64, i64)> },
    #[error("no gate with id '{id}' exists in the print layout (row {row})")]
    UnknownGate { id: String, row: usize },

    #[error("gate {id} on row {row} has a negative coordinate ({x},{y})")]
    BadGateCoord {
        id: String,
        x: i64,
        y: i64,
        row: usize,
    },
    #[error("gates {a} and {b} are placed on the same cell")]
    DuplicateGatePlacement { a: String, b: String },
    #[error("net {net} is not connected to gate {gate_a} and gate {gate_b}")]
    UnconnectedNet {
        net: String,
        gate_a: String,
        gate_b: String,
    },
    #[error("net {net} is interrupted, wires {a} and {b} do not connect to each other")]
    InterruptedNet { net: String, a: String, b: String },
    #[error("net {net} crosses the gate {gate}")]
    OccupiedByGate { net: String, gate: String },
    #[error("net {net} leaves the grid at {coord}")]
    WireOutOfBounds { net: String, coord: String },

    #[error("the cost in the output ({claimed}) is incorrect, the actual cost is {actual}")]
    CostMismatch { claimed: u64, actual: u64 },
}
