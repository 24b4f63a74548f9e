use crate::deck::Deck;
use crate::error::DrawError;
use crate::hand::Hand;
use crate::result::Outcome;
use crate::source::DrawSource;

use super::{Action, ActionReport, Game, RoundState};

impl<S: DrawSource> Game<S> {
    fn ignore(&self, action: Action) -> ActionReport {
        tracing::trace!(?action, state = ?self.state, "ignoring action");
        ActionReport::Ignored
    }

    /// Applies a front-end action to the round.
    ///
    /// Actions that the current state does not accept are ignored and leave
    /// the game untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Action, ActionReport, Game, GameOptions, RoundState};
    ///
    /// let mut game = Game::new(GameOptions::default(), 7).unwrap();
    /// assert_eq!(game.handle_action(Action::Hit), ActionReport::Ignored);
    /// assert_eq!(
    ///     game.handle_action(Action::Deal),
    ///     ActionReport::Applied(RoundState::PlayerTurn)
    /// );
    /// ```
    pub fn handle_action(&mut self, action: Action) -> ActionReport {
        match action {
            Action::Deal => self.deal(),
            Action::Hit => self.hit(),
            Action::Stand => self.stand(),
            Action::NextRound => self.next_round(),
        }
    }

    /// Deals a new round from a fresh shoe.
    ///
    /// Two cards go to the player, then two to the dealer. Ignored unless the
    /// table is idle.
    pub fn deal(&mut self) -> ActionReport {
        if self.state != RoundState::Idle {
            return self.ignore(Action::Deal);
        }

        self.round = self.round.saturating_add(1);
        self.deck = Some(Deck::build(self.options.decks));
        self.player_hand = Hand::new();
        self.dealer_hand = Hand::new();
        self.outcome = None;
        self.state = RoundState::PlayerTurn;

        if let Err(err) = self.deal_initial() {
            return self.abort(err);
        }

        tracing::debug!(
            round = self.round,
            player = self.player_hand.score(),
            cards_remaining = self.cards_remaining(),
            "dealt initial hands"
        );
        ActionReport::Applied(RoundState::PlayerTurn)
    }

    fn deal_initial(&mut self) -> Result<(), DrawError> {
        for _ in 0..2 {
            let card = self.draw()?;
            self.player_hand.add_card(card);
        }
        for _ in 0..2 {
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the round as a loss. Ignored outside the player's
    /// turn.
    pub fn hit(&mut self) -> ActionReport {
        if self.state != RoundState::PlayerTurn {
            return self.ignore(Action::Hit);
        }

        let card = match self.draw() {
            Ok(card) => card,
            Err(err) => return self.abort(err),
        };
        self.player_hand.add_card(card);

        tracing::debug!(
            round = self.round,
            %card,
            player = self.player_hand.score(),
            "player hit"
        );

        if self.player_hand.is_bust() {
            return self.resolve(Outcome::PlayerBust);
        }
        ActionReport::Applied(RoundState::PlayerTurn)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer plays out their hand and the round is settled. Ignored
    /// outside the player's turn.
    pub fn stand(&mut self) -> ActionReport {
        if self.state != RoundState::PlayerTurn {
            return self.ignore(Action::Stand);
        }

        if let Err(err) = self.dealer_play() {
            return self.abort(err);
        }

        let outcome = Outcome::evaluate(&self.player_hand, &self.dealer_hand);
        self.resolve(outcome)
    }

    /// Clears the table after a resolved round.
    ///
    /// The scoreboard is kept. Ignored unless the round is resolved.
    pub fn next_round(&mut self) -> ActionReport {
        if self.state != RoundState::Resolved {
            return self.ignore(Action::NextRound);
        }

        self.deck = None;
        self.player_hand = Hand::new();
        self.dealer_hand = Hand::new();
        self.outcome = None;
        self.state = RoundState::Idle;

        tracing::debug!(round = self.round, "table cleared");
        ActionReport::Applied(RoundState::Idle)
    }
}
