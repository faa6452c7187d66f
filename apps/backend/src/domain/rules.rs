//! Fixed rule parameters for Sequence.

pub const BOARD_SIZE: usize = 10;
/// Two identical decks in play, so every card id occurs twice.
pub const NUM_DECKS: usize = 2;
pub const DEFAULT_SEQUENCES_TO_WIN: u32 = 2;
pub const DEFAULT_MAX_PLAYERS: usize = 4;
pub const MIN_PLAYERS_TO_START: usize = 2;
/// Beyond this the dealing table has no entry; dealing falls back to 3 cards.
pub const MAX_SUPPORTED_PLAYERS: usize = 12;
/// Run length that completes a sequence.
pub const SEQUENCE_LENGTH: usize = 5;

/// Chip colors assigned by join order, cycling past the end.
pub const CHIP_COLORS: [&str; 12] = [
    "red", "blue", "green", "yellow", "purple", "orange", "pink", "cyan", "lime", "brown", "teal",
    "magenta",
];

/// Cards dealt to each player by occupancy. Occupancies above the supported
/// maximum fall back to 3; the caller logs that case.
pub fn hand_size_for_players(num_players: usize) -> usize {
    match num_players {
        0..=2 => 7,
        3..=4 => 6,
        5..=6 => 5,
        7..=9 => 4,
        10..=12 => 3,
        _ => 3,
    }
}

/// Chip color for the nth player to join (0-based).
pub fn chip_color_for_join(join_index: usize) -> &'static str {
    CHIP_COLORS[join_index % CHIP_COLORS.len()]
}
