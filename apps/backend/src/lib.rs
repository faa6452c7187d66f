#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod services;


// Re-exports for public API
pub use config::GameConfig;
pub use domain::board::{Board, Position};
pub use domain::cards::{Card, Rank, Suit};
pub use domain::game::{PlayKind, PlayOutcome};
pub use domain::snapshot::{GameSnapshot, PrivateHand};
pub use domain::state::{Game, GameId, Phase, Player, PlayerId};
pub use errors::{ErrorCode, GameError};
pub use services::GameRegistry;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
