//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the round flow (deal, hit,
//! stand, dealer play) and keeps a win/loss/tie [`Scoreboard`] for the
//! session. Rendering and input live outside the crate: a front end reads
//! the table through [`Game`]'s accessors and feeds [`Action`]s back in.
//!
//! # Example
//!
//! ```
//! use bjcore::{Action, Game, GameOptions, RoundState};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! game.handle_action(Action::Deal);
//! game.handle_action(Action::Stand);
//! assert_eq!(game.state(), RoundState::Resolved);
//! assert_eq!(game.scoreboard().total(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod source;

// Re-export main types
pub use card::{COPIES_PER_RANK, Card, DECK_SIZE, RANKS};
pub use deck::Deck;
pub use error::{DrawError, OptionsError, ParseCardError};
pub use game::{Action, ActionReport, Game, RoundState};
pub use hand::{BLACKJACK, Hand, is_soft, score};
pub use options::GameOptions;
pub use result::{Outcome, Record, Scoreboard};
pub use source::{DrawSource, RandomSource, ScriptedSource};
