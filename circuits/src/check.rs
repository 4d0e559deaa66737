use crate::error::CircuitError;
use crate::grid::Grid;
use crate::net::Net;
use crate::parse::{self, NetEntry};
use judge_common::record::Table;
use std::collections::BTreeSet;
use std::path::Path;

/// Runs the full chip-and-wire check chain against a submission file.
/// The footer of the submission names the instance, which is loaded
/// from `<data_dir>/chip_<c>/print_<c>.csv` and `netlist_<n>.csv`.
/// Returns the recomputed cost on success.
pub fn run(data_dir: &Path, output_file: &Path) -> Result<u64, CircuitError> {
    let table = Table::from_path(output_file)?;
    let submission = parse::parse_submission(&table)?;
    let footer = submission.footer;

    log::info!(
        "Checking routing for chip {} against netlist {}",
        footer.chip_id,
        footer.net_id
    );

    let chip_dir = data_dir.join(format!("chip_{}", footer.chip_id));
    let netlist_table = Table::from_path(chip_dir.join(format!("netlist_{}.csv", footer.net_id)))?;
    let netlist = load_netlist(&netlist_table)?;
    check_netlist_complete(&netlist, &submission.entries)?;

    let print_table = Table::from_path(chip_dir.join(format!("print_{}.csv", footer.chip_id)))?;
    let grid = build_grid(&print_table, &submission.entries)?;
    log::debug!("{}", grid.render());

    let actual = grid.cost();
    if actual != footer.claimed_cost {
        return Err(CircuitError::CostMismatch {
            claimed: footer.claimed_cost,
            actual,
        });
    }

    Ok(actual)
}

/// Reads the reference netlist (`chip_a,chip_b`).
pub fn load_netlist(table: &Table) -> Result<Vec<(i64, i64)>, CircuitError> {
    table.expect_headers(&["chip_a", "chip_b"])?;
    let mut pairs = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        pairs.push((row.int(0)?, row.int(1)?));
    }
    Ok(pairs)
}

/// The submission must route all netlist connections, each exactly
/// once, and nothing else. The submission dictates the orientation of
/// each pair; differences are reported both ways, missing first.
pub fn check_netlist_complete(
    netlist: &[(i64, i64)],
    entries: &[NetEntry],
) -> Result<(), CircuitError> {
    let mut required: BTreeSet<(i64, i64)> = netlist.iter().copied().collect();

    for entry in entries {
        let pair = (entry.gate_a, entry.gate_b);
        let reversed = (entry.gate_b, entry.gate_a);
        if !required.contains(&pair) && required.contains(&reversed) {
            required.remove(&reversed);
            required.insert(pair);
        }
    }

    let mut seen = BTreeSet::new();
    let mut duplicates = Vec::new();
    for entry in entries {
        let pair = (entry.gate_a, entry.gate_b);
        if !seen.insert(pair) {
            duplicates.push(pair);
        }
    }
    if !duplicates.is_empty() {
        return Err(CircuitError::DuplicateNets { pairs: duplicates });
    }

    if required != seen {
        let missing: Vec<_> = required.difference(&seen).copied().collect();
        if !missing.is_empty() {
            return Err(CircuitError::MissingNets { pairs: missing });
        }
        let extra: Vec<_> = seen.difference(&required).copied().collect();
        return Err(CircuitError::ExtraNets { pairs: extra });
    }

    Ok(())
}

/// Replays the submission against the print layout: builds each net
/// (validating its path) and places it on the grid.
pub fn build_grid(print_table: &Table, entries: &[NetEntry]) -> Result<Grid, CircuitError> {
    let mut grid = Grid::load(print_table)?;

    for entry in entries {
        let lookup = |id: i64| {
            grid.gate(&id.to_string())
                .cloned()
                .ok_or_else(|| CircuitError::UnknownGate {
                    id: id.to_string(),
                    row: entry.line,
                })
        };
        let gate_a = lookup(entry.gate_a)?;
        let gate_b = lookup(entry.gate_b)?;

        let net = Net::new(gate_a, gate_b, entry.wires.clone())?;
        grid.place_net(net)?;
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(a: i64, b: i64, wires: &[(i64, i64, i64)], line: usize) -> NetEntry {
        NetEntry {
            gate_a: a,
            gate_b: b,
            wires: wires
                .iter()
                .map(|&(x, y, z)| judge_common::geom::coord::GridCoord::new(x, y, z))
                .collect(),
            line,
        }
    }

    #[test]
    fn complete_netlist_passes() {
        let netlist = vec![(1, 2), (2, 3)];
        let entries = vec![entry(1, 2, &[], 2), entry(2, 3, &[], 3)];
        assert!(check_netlist_complete(&netlist, &entries).is_ok());
    }

    #[test]
    fn reversed_pairs_count_as_routed() {
        let netlist = vec![(1, 2)];
        let entries = vec![entry(2, 1, &[], 2)];
        assert!(check_netlist_complete(&netlist, &entries).is_ok());
    }

    #[test]
    fn duplicate_pairs_are_rejected() {
        let netlist = vec![(1, 2)];
        let entries = vec![entry(1, 2, &[], 2), entry(1, 2, &[], 3)];
        let err = check_netlist_complete(&netlist, &entries).unwrap_err();
        assert!(matches!(err, CircuitError::DuplicateNets { .. }));
    }

    #[test]
    fn missing_pairs_are_reported_before_extras() {
        let netlist = vec![(1, 2), (3, 4)];
        let entries = vec![entry(1, 2, &[], 2), entry(5, 6, &[], 3)];
        let err = check_netlist_complete(&netlist, &entries).unwrap_err();
        match err {
            CircuitError::MissingNets { pairs } => assert_eq!(pairs, vec![(3, 4)]),
            other => panic!("expected MissingNets, got {:?}", other),
        }
    }

    #[test]
    fn extra_pairs_are_rejected() {
        let netlist = vec![(1, 2)];
        let entries = vec![entry(1, 2, &[], 2), entry(3, 4, &[], 3)];
        let err = check_netlist_complete(&netlist, &entries).unwrap_err();
        match err {
            CircuitError::ExtraNets { pairs } => assert_eq!(pairs, vec![(3, 4)]),
            other => panic!("expected ExtraNets, got {:?}", other),
        }
    }

    #[test]
    fn unknown_gate_reference_is_rejected() {
        let print = Table::parse("chip,x,y\n1,0,0\n2,0,2\n".as_bytes(), "print.csv").unwrap();
        let entries = vec![entry(1, 9, &[(0, 0, 0), (0, 1, 0), (0, 2, 0)], 2)];
        let err = build_grid(&print, &entries).unwrap_err();
        match err {
            CircuitError::UnknownGate { id, row } => {
                assert_eq!(id, "9");
                assert_eq!(row, 2);
            }
            other => panic!("expected UnknownGate, got {:?}", other),
        }
    }

    #[test]
    fn replay_computes_cost() {
        let print = Table::parse("chip,x,y\n1,0,0\n2,0,2\n".as_bytes(), "print.csv").unwrap();
        let entries = vec![entry(1, 2, &[(0, 0, 0), (0, 1, 0), (0, 2, 0)], 2)];
        let grid = build_grid(&print, &entries).unwrap();
        assert_eq!(grid.cost(), 2);
    }

    #[test]
    fn replay_rejects_a_broken_path() {
        let print = Table::parse("chip,x,y\n1,0,0\n2,0,2\n".as_bytes(), "print.csv").unwrap();
        let entries = vec![entry(1, 2, &[(0, 0, 0), (0, 2, 0)], 2)];
        let err = build_grid(&print, &entries).unwrap_err();
        assert!(matches!(err, CircuitError::InterruptedNet { .. }));
    }
}
