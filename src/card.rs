//! Card types and deck constants.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// A playing card.
///
/// Suits never affect blackjack scoring, so a card is identified by its rank
/// alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Card {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

/// Every rank, in the order a fresh deck is built.
pub const RANKS: [Card; 13] = [
    Card::Two,
    Card::Three,
    Card::Four,
    Card::Five,
    Card::Six,
    Card::Seven,
    Card::Eight,
    Card::Nine,
    Card::Ten,
    Card::Jack,
    Card::Queen,
    Card::King,
    Card::Ace,
];

/// Copies of each rank in a standard deck.
pub const COPIES_PER_RANK: usize = 4;

/// Number of cards per deck.
pub const DECK_SIZE: usize = RANKS.len() * COPIES_PER_RANK;

impl Card {
    /// Returns the provisional value of the card.
    ///
    /// Aces count 11 here; the hand evaluation softens them to 1 when needed.
    #[must_use]
    pub const fn base_value(self) -> u32 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 11,
        }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }

    /// Returns the face label printed on the card.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::Card;
    ///
    /// assert_eq!(Card::Ten.label(), "10");
    /// assert_eq!(Card::Queen.label(), "Q");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RANKS
            .iter()
            .copied()
            .find(|card| card.label().eq_ignore_ascii_case(s.trim()))
            .ok_or(ParseCardError)
    }
}
