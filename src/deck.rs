//! The shoe a single round is dealt from.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{COPIES_PER_RANK, Card, DECK_SIZE, RANKS};
use crate::error::DrawError;
use crate::source::DrawSource;

/// Cards available to draw during one round.
///
/// A deck is built fresh for every round and thrown away afterwards. Cards
/// leave it only through [`Deck::draw`]; nothing puts them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a shoe of `deck_count` standard decks.
    ///
    /// Each rank appears `4 * deck_count` times.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Card, Deck};
    ///
    /// let deck = Deck::build(4);
    /// assert_eq!(deck.len(), 208);
    /// assert_eq!(deck.count(Card::Ace), 16);
    /// ```
    #[must_use]
    pub fn build(deck_count: u8) -> Self {
        let mut cards = Vec::with_capacity(deck_count as usize * DECK_SIZE);

        for _ in 0..deck_count {
            for _ in 0..COPIES_PER_RANK {
                cards.extend_from_slice(&RANKS);
            }
        }

        Self { cards }
    }

    /// Draws one card, removing it from the deck.
    ///
    /// The source chooses which of the remaining cards is taken.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards remain.
    pub fn draw<S: DrawSource + ?Sized>(&mut self, source: &mut S) -> Result<Card, DrawError> {
        if self.cards.is_empty() {
            return Err(DrawError::EmptyDeck);
        }

        let index = source.pick(&self.cards).min(self.cards.len() - 1);
        Ok(self.cards.remove(index))
    }

    /// Returns the remaining cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns how many copies of `card` remain.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.cards.iter().filter(|&&c| c == card).count()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
