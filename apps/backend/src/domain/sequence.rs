//! Sequence detection: find and lock new 5-in-a-row runs after a play.

use tracing::info;

use super::board::{Board, Position};
use super::rules::SEQUENCE_LENGTH;

/// The four axes: horizontal, vertical, and both diagonals.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Scan outward from the affected coordinate along each axis and count runs
/// of at least [`SEQUENCE_LENGTH`] cells that are friendly to `player_id`
/// (their own chips, or unlocked free corners). Each qualifying new run is
/// locked (corners excepted, they stay reusable) and counted.
///
/// A run is new only if it contains at least one unlocked non-corner cell or
/// the affected coordinate itself; that stops a run of already-locked cells
/// from an earlier sequence being counted twice. A single placement can
/// complete more than one sequence at once, one per axis.
pub fn detect_new_sequences(board: &mut Board, player_id: &str, origin: Position) -> u32 {
    let mut found = 0;

    for (dx, dy) in DIRECTIONS {
        let mut run = vec![origin];

        for sign in [1, -1] {
            for step in 1..SEQUENCE_LENGTH as i32 {
                let pos = Position::new(origin.x + dx * step * sign, origin.y + dy * step * sign);
                if !Board::in_bounds(pos) {
                    break;
                }
                let space = board.at(pos.x as usize, pos.y as usize);
                let friendly = space.occupant.is_chip_of(player_id)
                    || (space.is_corner() && !space.is_locked);
                if !friendly {
                    break;
                }
                run.push(pos);
            }
        }

        if run.len() < SEQUENCE_LENGTH {
            continue;
        }

        let is_new = run.iter().any(|pos| {
            let space = board.at(pos.x as usize, pos.y as usize);
            (!space.is_locked && !space.is_corner()) || *pos == origin
        });
        if !is_new {
            continue;
        }

        found += 1;
        info!(
            player_id,
            x = origin.x,
            y = origin.y,
            dx,
            dy,
            length = run.len(),
            "sequence completed"
        );
        for pos in &run {
            let space = board.at_mut(pos.x as usize, pos.y as usize);
            if !space.is_corner() {
                space.is_locked = true;
            }
        }
    }

    found
}
