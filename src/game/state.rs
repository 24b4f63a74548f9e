//! Round state and player action types.

use crate::result::Outcome;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundState {
    /// No cards dealt; waiting for a deal.
    #[default]
    Idle,
    /// Initial cards are out and the player may hit or stand.
    PlayerTurn,
    /// The round has an outcome; waiting for the next round.
    Resolved,
}

/// An action fed in by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Deal a new round.
    Deal,
    /// Take another card.
    Hit,
    /// Keep the current hand and let the dealer play.
    Stand,
    /// Clear the table for the next round.
    NextRound,
}

impl Action {
    /// Returns the button caption for the action.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Deal => "Deal Hand",
            Self::Hit => "HIT",
            Self::Stand => "STAND",
            Self::NextRound => "Next Round",
        }
    }
}

impl RoundState {
    /// Returns the actions accepted in this state.
    #[must_use]
    pub const fn actions(self) -> &'static [Action] {
        match self {
            Self::Idle => &[Action::Deal],
            Self::PlayerTurn => &[Action::Hit, Action::Stand],
            Self::Resolved => &[Action::NextRound],
        }
    }

    /// Returns whether `action` is accepted in this state.
    #[must_use]
    pub fn accepts(self, action: Action) -> bool {
        self.actions().contains(&action)
    }
}

/// What a call to [`Game::handle_action`](super::Game::handle_action) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionReport {
    /// The action is not valid in the current state; nothing changed.
    Ignored,
    /// The action was applied and the round continues.
    Applied(RoundState),
    /// The action ended the round with this outcome.
    Resolved(Outcome),
}
