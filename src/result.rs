//! Round outcomes and the session scoreboard.

use core::fmt;

use crate::hand::{BLACKJACK, Hand};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Both hands scored the same.
    Tie,
    /// Player finished closer to 21.
    PlayerWins,
    /// Dealer finished closer to 21.
    DealerWins,
    /// The shoe ran out before the round could finish.
    Aborted,
}

/// Which scoreboard counter an outcome moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Record {
    /// Counts as a win.
    Win,
    /// Counts as a loss.
    Loss,
    /// Counts as a tie.
    Tie,
}

impl Outcome {
    /// Compares finished player and dealer hands.
    ///
    /// Rules are checked in order and the first match wins: player bust,
    /// dealer bust, equal scores, higher player score, otherwise the dealer.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Card, Hand, Outcome};
    ///
    /// let player: Hand = [Card::Ten, Card::Nine].into_iter().collect();
    /// let dealer: Hand = [Card::Ten, Card::Eight].into_iter().collect();
    /// assert_eq!(Outcome::evaluate(&player, &dealer), Outcome::PlayerWins);
    /// ```
    #[must_use]
    pub fn evaluate(player: &Hand, dealer: &Hand) -> Self {
        let player_score = player.score();
        let dealer_score = dealer.score();

        if player_score > BLACKJACK {
            Self::PlayerBust
        } else if dealer_score > BLACKJACK {
            Self::DealerBust
        } else if player_score == dealer_score {
            Self::Tie
        } else if player_score > dealer_score {
            Self::PlayerWins
        } else {
            Self::DealerWins
        }
    }

    /// Returns the counter this outcome moves, or `None` for an aborted round.
    #[must_use]
    pub const fn record(self) -> Option<Record> {
        match self {
            Self::PlayerBust | Self::DealerWins => Some(Record::Loss),
            Self::DealerBust | Self::PlayerWins => Some(Record::Win),
            Self::Tie => Some(Record::Tie),
            Self::Aborted => None,
        }
    }

    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "Bust! Dealer Wins",
            Self::DealerBust => "Dealer Busts! You Win",
            Self::Tie => "Tie Game",
            Self::PlayerWins => "You Win!",
            Self::DealerWins => "Dealer Wins",
            Self::Aborted => "Round aborted: deck exhausted",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Win, loss and tie counters for one session.
///
/// Counters only ever go up. The engine records exactly one entry per
/// resolved round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Scoreboard {
    wins: u32,
    losses: u32,
    ties: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            ties: 0,
        }
    }

    pub(crate) const fn record(&mut self, record: Record) {
        match record {
            Record::Win => self.wins = self.wins.saturating_add(1),
            Record::Loss => self.losses = self.losses.saturating_add(1),
            Record::Tie => self.ties = self.ties.saturating_add(1),
        }
    }

    /// Returns the number of rounds won.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    /// Returns the number of rounds lost.
    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.losses
    }

    /// Returns the number of tied rounds.
    #[must_use]
    pub const fn ties(&self) -> u32 {
        self.ties
    }

    /// Returns the number of rounds recorded.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.wins
            .saturating_add(self.losses)
            .saturating_add(self.ties)
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Win : {}  Loss : {}  Tie : {}",
            self.wins, self.losses, self.ties
        )
    }
}
