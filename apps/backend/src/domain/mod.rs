//! Domain layer: pure game logic types and helpers.

pub mod board;
pub mod cards;
pub mod cards_parsing;
pub mod deck;
pub mod game;
pub mod rules;
pub mod sequence;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod test_game_helpers;
#[cfg(test)]
mod tests_play;

// Re-exports for ergonomics
pub use board::{Board, BoardSpace, Occupant, Position};
pub use cards::{Card, Rank, Suit};
pub use game::{PlayKind, PlayOutcome};
pub use snapshot::{private_hand, snapshot, GameSnapshot, PrivateHand};
pub use state::{Game, GameId, Phase, Player, PlayerId};
