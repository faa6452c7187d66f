//! Error codes surfaced to the transport layer.
//!
//! This module defines all error codes the engine can hand back to its
//! transport collaborator. Add new codes here; never pass ad-hoc strings
//! as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in rejection payloads.

use core::fmt;

/// Centralized error codes for rejected game operations.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string. A rejected
/// operation never alters game state and is only reported to the acting
/// player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Capacity
    /// Game already has the maximum number of players
    GameFull,
    /// Fewer than two players present at start
    TooFewPlayers,

    // Authorization
    /// Only the host may start the game
    NotHost,
    /// Action submitted by a player out of turn
    NotYourTurn,

    // Phase
    /// Game has left the lobby and cannot accept new players
    GameNotJoinable,
    /// Game is not in progress
    GameNotActive,
    /// Game is not in the lobby phase
    NotInLobby,

    // Resource absence
    /// Named card is not in the player's hand
    CardNotInHand,
    /// Draw pile has run out
    DrawPileEmpty,
    /// One-eyed jack aimed at an empty or corner space
    TargetNotOccupied,
    /// Game id not present in the registry
    GameNotFound,
    /// Player id not registered in the game
    PlayerNotFound,

    // Rule violations
    /// Target space already holds a chip
    TargetOccupied,
    /// Played card does not match the card printed on the target space
    CardDoesNotMatchCell,
    /// One-eyed jack aimed at the player's own chip
    CannotRemoveOwnChip,
    /// Target chip belongs to a completed, locked sequence
    TargetLocked,
    /// Declared card still has an open spot on the board
    CardNotDead,
    /// Jacks can never be declared dead
    JackNotDeclarable,

    // Malformed input
    /// Board coordinate outside the 10x10 grid
    OutOfBounds,
    /// Layout token is structurally invalid
    MalformedCardToken,
    /// Unrecognized rank symbol
    UnknownRank,
    /// Unrecognized suit symbol
    UnknownSuit,

    // Internal consistency (layout defects, not player mistakes)
    /// Declared card has no printed occurrence on the board
    CardNotOnBoard,
    /// Non-corner board space has no printed card
    BoardCellEmpty,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Capacity
            Self::GameFull => "GAME_FULL",
            Self::TooFewPlayers => "TOO_FEW_PLAYERS",

            // Authorization
            Self::NotHost => "NOT_HOST",
            Self::NotYourTurn => "NOT_YOUR_TURN",

            // Phase
            Self::GameNotJoinable => "GAME_NOT_JOINABLE",
            Self::GameNotActive => "GAME_NOT_ACTIVE",
            Self::NotInLobby => "NOT_IN_LOBBY",

            // Resource absence
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::DrawPileEmpty => "DRAW_PILE_EMPTY",
            Self::TargetNotOccupied => "TARGET_NOT_OCCUPIED",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",

            // Rule violations
            Self::TargetOccupied => "TARGET_OCCUPIED",
            Self::CardDoesNotMatchCell => "CARD_DOES_NOT_MATCH_CELL",
            Self::CannotRemoveOwnChip => "CANNOT_REMOVE_OWN_CHIP",
            Self::TargetLocked => "TARGET_LOCKED",
            Self::CardNotDead => "CARD_NOT_DEAD",
            Self::JackNotDeclarable => "JACK_NOT_DECLARABLE",

            // Malformed input
            Self::OutOfBounds => "OUT_OF_BOUNDS",
            Self::MalformedCardToken => "MALFORMED_CARD_TOKEN",
            Self::UnknownRank => "UNKNOWN_RANK",
            Self::UnknownSuit => "UNKNOWN_SUIT",

            // Internal consistency
            Self::CardNotOnBoard => "CARD_NOT_ON_BOARD",
            Self::BoardCellEmpty => "BOARD_CELL_EMPTY",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
