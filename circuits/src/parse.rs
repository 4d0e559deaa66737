use crate::error::CircuitError;
use judge_common::geom::coord::GridCoord;
use judge_common::record::Table;

/// One data row of the submission: a gate pair plus its wire path.
#[derive(Debug, Clone)]
pub struct NetEntry {
    pub gate_a: i64,
    pub gate_b: i64,
    pub wires: Vec<GridCoord>,
    pub line: usize,
}

/// The sentinel footer naming the instance and the claimed cost.
#[derive(Debug, Clone, Copy)]
pub struct Footer {
    pub chip_id: u8,
    pub net_id: u8,
    pub claimed_cost: u64,
}

#[derive(Debug)]
pub struct Submission {
    pub entries: Vec<NetEntry>,
    pub footer: Footer,
}

/// Parses and structurally validates a routing submission: header
/// exactly `net,wires`, a final `chip_<id>_net_<id>,<cost>` row, and
/// well-formed coordinate tuples on every data row.
pub fn parse_submission(table: &Table) -> Result<Submission, CircuitError> {
    table.expect_headers(&["net", "wires"])?;

    let Some(footer_row) = table.rows.last() else {
        return Err(CircuitError::BadFooter {
            value: String::new(),
        });
    };
    let footer = parse_footer(&footer_row.values[0], &footer_row.values[1], footer_row.line)?;

    let mut entries = Vec::with_capacity(table.rows.len() - 1);
    for row in &table.rows[..table.rows.len() - 1] {
        let (gate_a, gate_b) = parse_net_pair(&row.values[0], row.line)?;
        let wires = parse_wire_path(&row.values[1], row.line)?;
        entries.push(NetEntry {
            gate_a,
            gate_b,
            wires,
            line: row.line,
        });
    }

    Ok(Submission { entries, footer })
}

fn parse_footer(name: &str, cost: &str, line: usize) -> Result<Footer, CircuitError> {
    let bad_footer = || CircuitError::BadFooter {
        value: format!("{},{}", name, cost),
    };

    let rest = name.strip_prefix("chip_").ok_or_else(bad_footer)?;
    let (chip, net) = rest.split_once("_net_").ok_or_else(bad_footer)?;

    let chip_id: u8 = chip.parse().map_err(|_| bad_footer())?;
    if chip_id > 2 {
        return Err(CircuitError::BadChipNumber {
            found: chip.to_string(),
            row: line,
        });
    }

    let net_id: u8 = net.parse().map_err(|_| bad_footer())?;
    if !(1..=9).contains(&net_id) {
        return Err(CircuitError::BadNetNumber {
            found: net.to_string(),
            row: line,
        });
    }

    let claimed_cost: u64 = cost.parse().map_err(|_| bad_footer())?;

    Ok(Footer {
        chip_id,
        net_id,
        claimed_cost,
    })
}

/// `(<int>,<int>)`, nothing more.
fn parse_net_pair(value: &str, line: usize) -> Result<(i64, i64), CircuitError> {
    let bad = || CircuitError::BadNetCoord {
        value: value.to_string(),
        row: line,
    };

    let inner = value
        .strip_prefix('(')
        .and_then(|v| v.strip_suffix(')'))
        .ok_or_else(bad)?;
    let (a, b) = inner.split_once(',').ok_or_else(bad)?;
    let gate_a = parse_unsigned(a).ok_or_else(bad)?;
    let gate_b = parse_unsigned(b).ok_or_else(bad)?;
    Ok((gate_a, gate_b))
}

/// A concatenation of `(<int>,<int>[,<int>])` tuples; a missing third
/// field means layer 0. An empty string yields an empty path, which
/// net construction rejects as unconnected.
fn parse_wire_path(value: &str, line: usize) -> Result<Vec<GridCoord>, CircuitError> {
    let bad = |tuple: &str| CircuitError::BadWireCoord {
        value: format!("({})", tuple),
        row: line,
    };

    let mut wires = Vec::new();
    let mut rest = value;
    while !rest.is_empty() {
        let inner = rest.strip_prefix('(').ok_or_else(|| bad(rest))?;
        let (tuple, tail) = inner.split_once(')').ok_or_else(|| bad(inner))?;

        let fields: Vec<&str> = tuple.split(',').collect();
        if fields.len() != 2 && fields.len() != 3 {
            return Err(bad(tuple));
        }
        let x = parse_unsigned(fields[0]).ok_or_else(|| bad(tuple))?;
        let y = parse_unsigned(fields[1]).ok_or_else(|| bad(tuple))?;
        let z = match fields.get(2) {
            Some(f) => parse_unsigned(f).ok_or_else(|| bad(tuple))?,
            None => 0,
        };
        wires.push(GridCoord::new(x, y, z));
        rest = tail;
    }
    Ok(wires)
}

/// Digits only: rejects signs, whitespace and empty fields.
fn parse_unsigned(field: &str) -> Option<i64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(content: &str) -> Result<Submission, CircuitError> {
        let table = Table::parse(content.as_bytes(), "output.csv").unwrap();
        parse_submission(&table)
    }

    #[test]
    fn parses_entries_and_footer() {
        let sub = submission(
            "net,wires\n\"(1,2)\",\"(1,1)(1,2,0)(1,3,1)\"\nchip_0_net_1,42\n",
        )
        .unwrap();
        assert_eq!(sub.entries.len(), 1);
        assert_eq!(sub.entries[0].gate_a, 1);
        assert_eq!(sub.entries[0].gate_b, 2);
        assert_eq!(
            sub.entries[0].wires,
            vec![
                GridCoord::new(1, 1, 0),
                GridCoord::new(1, 2, 0),
                GridCoord::new(1, 3, 1),
            ]
        );
        assert_eq!(sub.footer.chip_id, 0);
        assert_eq!(sub.footer.net_id, 1);
        assert_eq!(sub.footer.claimed_cost, 42);
    }

    #[test]
    fn footer_only_submission_is_valid_structure() {
        let sub = submission("net,wires\nchip_2_net_9,0\n").unwrap();
        assert!(sub.entries.is_empty());
    }

    #[test]
    fn wrong_header_is_rejected() {
        let err = submission("nets,wires\nchip_0_net_1,0\n").unwrap_err();
        assert!(matches!(err, CircuitError::Record(_)));
    }

    #[test]
    fn missing_footer_is_rejected() {
        let err = submission("net,wires\n\"(1,2)\",\"(1,1)\"\n").unwrap_err();
        assert!(matches!(err, CircuitError::BadFooter { .. }));
    }

    #[test]
    fn chip_number_out_of_range() {
        let err = submission("net,wires\nchip_3_net_1,0\n").unwrap_err();
        assert!(matches!(err, CircuitError::BadChipNumber { .. }));
    }

    #[test]
    fn net_number_out_of_range() {
        let err = submission("net,wires\nchip_1_net_0,0\n").unwrap_err();
        assert!(matches!(err, CircuitError::BadNetNumber { .. }));
    }

    #[test]
    fn non_integer_cost_is_rejected() {
        let err = submission("net,wires\nchip_1_net_1,cheap\n").unwrap_err();
        assert!(matches!(err, CircuitError::BadFooter { .. }));
    }

    #[test]
    fn malformed_net_tuple_is_rejected() {
        let err = submission("net,wires\n\"(1,-2)\",\"(1,1)\"\nchip_0_net_1,0\n").unwrap_err();
        match err {
            CircuitError::BadNetCoord { value, row } => {
                assert_eq!(value, "(1,-2)");
                assert_eq!(row, 2);
            }
            other => panic!("expected BadNetCoord, got {:?}", other),
        }
    }

    #[test]
    fn malformed_wire_tuple_is_rejected() {
        let err =
            submission("net,wires\n\"(1,2)\",\"(1,1)(1,a)\"\nchip_0_net_1,0\n").unwrap_err();
        assert!(matches!(err, CircuitError::BadWireCoord { row: 2, .. }));
    }

    #[test]
    fn four_field_wire_tuple_is_rejected() {
        let err =
            submission("net,wires\n\"(1,2)\",\"(1,1,0,0)\"\nchip_0_net_1,0\n").unwrap_err();
        assert!(matches!(err, CircuitError::BadWireCoord { .. }));
    }

    #[test]
    fn empty_output_is_rejected() {
        use judge_common::record::RecordError;

        let err = Table::parse("".as_bytes(), "output.csv").unwrap_err();
        assert!(matches!(err, RecordError::Empty { .. }));
    }
}
