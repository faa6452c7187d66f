//! Core card types: Card, Rank, Suit, canonical identifiers and display glyphs.
//!
//! Two cards are the same game-card iff their canonical identifiers match;
//! with two identical decks in play every identifier occurs twice.

/// The four suits. Jack special behavior is keyed off the suit:
/// Hearts/Diamonds jacks are wild ("two-eyed"), Clubs/Spades jacks remove
/// ("one-eyed").
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// Short code used in canonical card identifiers (e.g. "S" in "10S").
    pub const fn code(&self) -> &'static str {
        match self {
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
            Suit::Spades => "S",
        }
    }

    /// Display glyph for board and log output.
    pub const fn emoji(&self) -> &'static str {
        match self {
            Suit::Hearts => "\u{2665}\u{fe0f}",
            Suit::Diamonds => "\u{2666}\u{fe0f}",
            Suit::Clubs => "\u{2663}\u{fe0f}",
            Suit::Spades => "\u{2660}\u{fe0f}",
        }
    }

    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// Short symbol used in canonical identifiers: "A", "2".."10", "J", "Q", "K".
    pub const fn glyph(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];
}

/// An immutable playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Canonical identifier, e.g. "KH" or "10S".
    pub fn id(&self) -> String {
        format!("{}{}", self.rank.glyph(), self.suit.code())
    }

    /// Display string like "A♠️" for board cells and logs.
    pub fn display(&self) -> String {
        format!("{}{}", self.rank.glyph(), self.suit.emoji())
    }

    pub const fn is_jack(&self) -> bool {
        matches!(self.rank, Rank::Jack)
    }

    /// Jack of Hearts or Diamonds: wild placement onto any empty non-corner
    /// space, ignoring the printed card.
    pub const fn is_two_eyed_jack(&self) -> bool {
        matches!(
            (self.rank, self.suit),
            (Rank::Jack, Suit::Hearts) | (Rank::Jack, Suit::Diamonds)
        )
    }

    /// Jack of Clubs or Spades: removes an opponent's unlocked chip instead
    /// of placing one.
    pub const fn is_one_eyed_jack(&self) -> bool {
        matches!(
            (self.rank, self.suit),
            (Rank::Jack, Suit::Clubs) | (Rank::Jack, Suit::Spades)
        )
    }
}
