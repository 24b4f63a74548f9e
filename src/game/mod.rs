//! Game engine and round state management.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DrawError, OptionsError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{Outcome, Scoreboard};
use crate::source::{DrawSource, RandomSource};

mod actions;
mod dealer;
pub mod state;

pub use state::{Action, ActionReport, RoundState};

/// A single-player blackjack engine.
///
/// The game owns the round's deck, both hands, and the session scoreboard.
/// A front end reads the table through the accessor methods and feeds user
/// input through [`Game::handle_action`]; it never mutates the table itself.
#[derive(Debug, Clone)]
pub struct Game<S = RandomSource> {
    /// Game options.
    options: GameOptions,
    /// Picks which card each draw takes.
    source: S,
    /// Current round state.
    state: RoundState,
    /// This round's shoe. `None` between rounds.
    deck: Option<Deck>,
    player_hand: Hand,
    dealer_hand: Hand,
    /// How the current round ended, once it has.
    outcome: Option<Outcome>,
    scoreboard: Scoreboard,
    /// Rounds dealt so far.
    round: u32,
}

impl Game<RandomSource> {
    /// Creates a new game that draws randomly from a seeded source.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Game, GameOptions, RoundState};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.state(), RoundState::Idle);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, OptionsError> {
        Self::with_source(options, RandomSource::seeded(seed))
    }
}

impl<S: DrawSource> Game<S> {
    /// Creates a new game that draws cards through `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    pub fn with_source(options: GameOptions, source: S) -> Result<Self, OptionsError> {
        options.validate()?;

        Ok(Self {
            options,
            source,
            state: RoundState::Idle,
            deck: None,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            outcome: None,
            scoreboard: Scoreboard::new(),
            round: 0,
        })
    }

    /// Draws a card from the current round's deck.
    fn draw(&mut self) -> Result<Card, DrawError> {
        self.deck
            .as_mut()
            .ok_or(DrawError::EmptyDeck)?
            .draw(&mut self.source)
    }
}

impl<S> Game<S> {
    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current round state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the actions the current state accepts.
    pub const fn available_actions(&self) -> &'static [Action] {
        self.state.actions()
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's full hand, hidden cards included.
    ///
    /// Front ends should consult [`Game::is_dealer_revealed`] or use
    /// [`Game::visible_dealer_cards`] before showing it.
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns whether the dealer's hidden cards may be shown.
    ///
    /// True only once the round is resolved.
    pub fn is_dealer_revealed(&self) -> bool {
        self.state == RoundState::Resolved
    }

    /// Returns the dealer cards a front end may show face up.
    ///
    /// Before the round resolves only the first card is visible.
    pub fn visible_dealer_cards(&self) -> &[Card] {
        let cards = self.dealer_hand.cards();
        if self.is_dealer_revealed() {
            cards
        } else {
            &cards[..cards.len().min(1)]
        }
    }

    /// Returns the player's current score.
    pub fn player_score(&self) -> u32 {
        self.player_hand.score()
    }

    /// Returns the dealer's score once revealed.
    pub fn dealer_visible_score(&self) -> Option<u32> {
        self.is_dealer_revealed().then(|| self.dealer_hand.score())
    }

    /// Returns the session scoreboard.
    pub const fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns the outcome of the current round, if it has one.
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the message to show for the current round.
    ///
    /// Empty until the round resolves.
    pub fn message(&self) -> &'static str {
        self.outcome.map_or("", Outcome::message)
    }

    /// Returns the number of cards left in this round's deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.as_ref().map_or(0, Deck::len)
    }

    /// Returns the number of rounds dealt so far.
    pub const fn round(&self) -> u32 {
        self.round
    }
}
