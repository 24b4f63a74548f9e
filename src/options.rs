//! Game configuration options.

use crate::error::OptionsError;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcore::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_stand_threshold(18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of standard decks in each round's shoe.
    pub decks: u8,
    /// Score at or above which the dealer stops drawing.
    pub stand_threshold: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 4,
            stand_threshold: 17,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(1);
    /// assert_eq!(options.decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the dealer stand threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_threshold(16);
    /// assert_eq!(options.stand_threshold, 16);
    /// ```
    #[must_use]
    pub const fn with_stand_threshold(mut self, threshold: u32) -> Self {
        self.stand_threshold = threshold;
        self
    }

    /// Checks that the options describe a playable table.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::ZeroDecks`] if the shoe would hold no decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{GameOptions, OptionsError};
    ///
    /// assert_eq!(GameOptions::default().validate(), Ok(()));
    /// assert_eq!(
    ///     GameOptions::default().with_decks(0).validate(),
    ///     Err(OptionsError::ZeroDecks)
    /// );
    /// ```
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.decks == 0 {
            return Err(OptionsError::ZeroDecks);
        }
        Ok(())
    }
}
