//! Domain error type for the game engine.
//!
//! Every validation failure aborts the whole action with no partial
//! mutation; the error is handed back verbatim to the transport layer for
//! display to the acting player. `DrawPileEmpty` is the one error that
//! callers inside the engine recover from locally (running out of cards
//! near the end of a game is an expected condition).

use thiserror::Error;

use super::error_code::ErrorCode;

/// All the ways a game operation can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    // Capacity
    #[error("game is full")]
    GameFull,
    #[error("not enough players to start, need at least 2, have {0}")]
    TooFewPlayers(usize),

    // Authorization
    #[error("only the host can start the game")]
    NotHost,
    #[error("it is not player {0}'s turn")]
    NotYourTurn(String),

    // Phase
    #[error("game is already in progress")]
    GameNotJoinable,
    #[error("game is not in progress")]
    GameNotActive,
    #[error("game is not in the lobby phase")]
    NotInLobby,

    // Resource absence
    #[error("player does not have card {0}")]
    CardNotInHand(String),
    #[error("draw pile is empty")]
    DrawPileEmpty,
    #[error("cannot remove a chip from an empty or corner space")]
    TargetNotOccupied,
    #[error("game {0} not found")]
    GameNotFound(String),
    #[error("player {0} not found")]
    PlayerNotFound(String),

    // Rule violations
    #[error("space ({x}, {y}) is already occupied")]
    TargetOccupied { x: i32, y: i32 },
    #[error("card {card} does not match board space ({x}, {y})")]
    CardDoesNotMatchCell { card: String, x: i32, y: i32 },
    #[error("cannot remove your own chip with a one-eyed jack")]
    CannotRemoveOwnChip,
    #[error("cannot remove a chip from a locked sequence")]
    TargetLocked,
    #[error("card {0} is not dead, an available spot exists")]
    CardNotDead(String),
    #[error("jacks cannot be dead cards")]
    JackNotDeclarable,

    // Malformed input
    #[error("board position ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i32, y: i32 },
    #[error("malformed card token: {0}")]
    MalformedCardToken(String),
    #[error("unknown rank in card token: {0}")]
    UnknownRank(String),
    #[error("unknown suit in card token: {0}")]
    UnknownSuit(String),

    // Internal consistency (layout defects, not player mistakes)
    #[error("card {0} has no printed spot on the board")]
    CardNotOnBoard(String),
    #[error("board space ({x}, {y}) has no printed card")]
    BoardCellEmpty { x: i32, y: i32 },
}

impl GameError {
    /// The wire code for this error.
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::GameFull => ErrorCode::GameFull,
            Self::TooFewPlayers(_) => ErrorCode::TooFewPlayers,
            Self::NotHost => ErrorCode::NotHost,
            Self::NotYourTurn(_) => ErrorCode::NotYourTurn,
            Self::GameNotJoinable => ErrorCode::GameNotJoinable,
            Self::GameNotActive => ErrorCode::GameNotActive,
            Self::NotInLobby => ErrorCode::NotInLobby,
            Self::CardNotInHand(_) => ErrorCode::CardNotInHand,
            Self::DrawPileEmpty => ErrorCode::DrawPileEmpty,
            Self::TargetNotOccupied => ErrorCode::TargetNotOccupied,
            Self::GameNotFound(_) => ErrorCode::GameNotFound,
            Self::PlayerNotFound(_) => ErrorCode::PlayerNotFound,
            Self::TargetOccupied { .. } => ErrorCode::TargetOccupied,
            Self::CardDoesNotMatchCell { .. } => ErrorCode::CardDoesNotMatchCell,
            Self::CannotRemoveOwnChip => ErrorCode::CannotRemoveOwnChip,
            Self::TargetLocked => ErrorCode::TargetLocked,
            Self::CardNotDead(_) => ErrorCode::CardNotDead,
            Self::JackNotDeclarable => ErrorCode::JackNotDeclarable,
            Self::OutOfBounds { .. } => ErrorCode::OutOfBounds,
            Self::MalformedCardToken(_) => ErrorCode::MalformedCardToken,
            Self::UnknownRank(_) => ErrorCode::UnknownRank,
            Self::UnknownSuit(_) => ErrorCode::UnknownSuit,
            Self::CardNotOnBoard(_) => ErrorCode::CardNotOnBoard,
            Self::BoardCellEmpty { .. } => ErrorCode::BoardCellEmpty,
        }
    }
}
