use crate::board::Board;
use crate::error::BoardError;
use judge_common::record::Table;
use std::path::Path;

/// One parsed move of the submission.
#[derive(Debug, Clone)]
pub struct Move {
    pub car: String,
    pub steps: i64,
    pub line: usize,
}

/// Runs the full sliding-puzzle check chain: load the board, validate
/// the move list structurally, replay every move, and require the red
/// car on the goal cell at the end. Returns the number of moves.
pub fn run(board_file: &Path, output_file: &Path, board_size: usize) -> Result<usize, BoardError> {
    let board_table = Table::from_path(board_file)?;
    let board = Board::load(&board_table, board_size)?;
    log::debug!("Starting board:\n{}", board.render());

    let output_table = Table::from_path(output_file)?;
    let moves = validate_moves(&output_table, &board)?;
    log::info!("Replaying {} moves", moves.len());

    let final_board = replay(board, &moves)?;

    if !final_board.is_solved() {
        return Err(BoardError::NotSolved {
            board: final_board.render(),
        });
    }

    Ok(moves.len())
}

/// Structural validation of the submission: header exactly
/// `car,move`, alphabetic car names that exist on the board, integer
/// step counts. The whole file is validated before any move runs.
pub fn validate_moves(table: &Table, board: &Board) -> Result<Vec<Move>, BoardError> {
    table.expect_headers(&["car", "move"])?;

    let mut moves = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let car = row.values[0].clone();
        if car.is_empty() || !car.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(BoardError::NonAlphabeticCar {
                value: car,
                row: row.line,
            });
        }
        if board.vehicle(&car).is_none() {
            return Err(BoardError::UnknownCar {
                value: car,
                row: row.line,
            });
        }
        let steps = row.values[1]
            .trim()
            .parse()
            .map_err(|_| BoardError::BadMove {
                value: row.values[1].clone(),
                row: row.line,
            })?;
        moves.push(Move {
            car,
            steps,
            line: row.line,
        });
    }
    Ok(moves)
}

/// Applies the moves in order. A failing move is wrapped with the
/// offending row and a rendering of the board as it was before that
/// move.
pub fn replay(board: Board, moves: &[Move]) -> Result<Board, BoardError> {
    let mut board = board;
    for mv in moves {
        board = match board.move_vehicle(&mv.car, mv.steps) {
            Ok(next) => next,
            Err(cause) => {
                return Err(BoardError::MoveFailed {
                    car: mv.car.clone(),
                    steps: mv.steps,
                    board: board.render(),
                    cause: Box::new(cause),
                });
            }
        };
    }
    Ok(board)
}
