//! Draw sources that decide which remaining card a draw takes.

extern crate alloc;

use alloc::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

/// Picks the index of the next card to draw from the remaining cards.
///
/// Implementations are only called with a non-empty slice. An index past the
/// end is clamped to the last card by the deck.
pub trait DrawSource {
    /// Returns the index of the card to draw.
    fn pick(&mut self, remaining: &[Card]) -> usize;
}

impl<S: DrawSource + ?Sized> DrawSource for &mut S {
    fn pick(&mut self, remaining: &[Card]) -> usize {
        (**self).pick(remaining)
    }
}

/// Uniform random draws from a seeded `ChaCha8` generator.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Creates a source seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl DrawSource for RandomSource {
    fn pick(&mut self, remaining: &[Card]) -> usize {
        if remaining.is_empty() {
            return 0;
        }
        self.rng.random_range(0..remaining.len())
    }
}

/// Draws a fixed sequence of cards, for tests and replays.
///
/// Each pick takes the first remaining copy of the next scripted card. Once
/// the script runs out, or the scripted card is no longer in the deck, the
/// first remaining card is drawn instead.
///
/// # Example
///
/// ```
/// use bjcore::{Card, Deck, ScriptedSource};
///
/// let mut deck = Deck::build(1);
/// let mut source = ScriptedSource::new([Card::Ace, Card::King]);
///
/// assert_eq!(deck.draw(&mut source), Ok(Card::Ace));
/// assert_eq!(deck.draw(&mut source), Ok(Card::King));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<Card>,
}

impl ScriptedSource {
    /// Creates a source that draws `cards` in order.
    pub fn new<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            script: cards.into_iter().collect(),
        }
    }

    /// Appends more cards to the end of the script.
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.script.extend(cards);
    }

    /// Returns the number of scripted cards not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DrawSource for ScriptedSource {
    fn pick(&mut self, remaining: &[Card]) -> usize {
        self.script
            .pop_front()
            .and_then(|wanted| remaining.iter().position(|&card| card == wanted))
            .unwrap_or(0)
    }
}
