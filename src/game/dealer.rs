use crate::error::DrawError;
use crate::result::Outcome;
use crate::source::DrawSource;

use super::{ActionReport, Game, RoundState};

impl<S: DrawSource> Game<S> {
    /// Dealer draws until reaching the stand threshold.
    ///
    /// Stops with an error as soon as the deck runs dry, so the loop always
    /// ends.
    pub(super) fn dealer_play(&mut self) -> Result<(), DrawError> {
        while self.dealer_hand.score() < self.options.stand_threshold {
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
            tracing::trace!(%card, dealer = self.dealer_hand.score(), "dealer draws");
        }
        Ok(())
    }

    /// Ends the round with `outcome` and records it on the scoreboard.
    pub(super) fn resolve(&mut self, outcome: Outcome) -> ActionReport {
        self.state = RoundState::Resolved;
        self.outcome = Some(outcome);

        if let Some(record) = outcome.record() {
            self.scoreboard.record(record);
        }

        tracing::info!(
            round = self.round,
            %outcome,
            player = self.player_hand.score(),
            dealer = self.dealer_hand.score(),
            scoreboard = %self.scoreboard,
            "round resolved"
        );
        ActionReport::Resolved(outcome)
    }

    /// Ends the round early after a failed draw.
    pub(super) fn abort(&mut self, err: DrawError) -> ActionReport {
        tracing::warn!(round = self.round, error = %err, "round aborted");
        self.resolve(Outcome::Aborted)
    }
}
