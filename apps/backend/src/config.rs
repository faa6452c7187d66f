//! Per-game rule configuration supplied at creation time.

use tracing::warn;

use crate::domain::rules::{DEFAULT_MAX_PLAYERS, DEFAULT_SEQUENCES_TO_WIN, MAX_SUPPORTED_PLAYERS};

/// Validated game parameters. Out-of-range requests are clamped to defaults
/// rather than rejected, so a sloppy client still gets a playable game.
///
/// Fields are private; [`GameConfig::clamped`] and [`GameConfig::default`]
/// are the only constructors, so every config holds at least one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_players: usize,
    sequences_to_win: u32,
}

impl GameConfig {
    /// Build a config from raw client-supplied values.
    ///
    /// `sequences_to_win == 0` falls back to the default of 2;
    /// `max_players` of 0 or above the supported maximum falls back to 4.
    pub fn clamped(max_players: usize, sequences_to_win: u32) -> Self {
        let sequences_to_win = if sequences_to_win == 0 {
            warn!(requested = sequences_to_win, "invalid sequences_to_win, using default");
            DEFAULT_SEQUENCES_TO_WIN
        } else {
            sequences_to_win
        };
        let max_players = if max_players == 0 || max_players > MAX_SUPPORTED_PLAYERS {
            warn!(requested = max_players, "invalid max_players, using default");
            DEFAULT_MAX_PLAYERS
        } else {
            max_players
        };
        Self {
            max_players,
            sequences_to_win,
        }
    }

    pub const fn max_players(&self) -> usize {
        self.max_players
    }

    pub const fn sequences_to_win(&self) -> u32 {
        self.sequences_to_win
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_players: DEFAULT_MAX_PLAYERS,
            sequences_to_win: DEFAULT_SEQUENCES_TO_WIN,
        }
    }
}
