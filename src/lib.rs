//! Deckstat is a library for modeling decks of playing cards.
//! It is not a poker hand ranker; it answers simple hand-property
//! questions (flushes, straights, n-of-a-kind) over decks that get
//! doubled, filtered, shuffled, and sampled, and it estimates the
//! odds of those properties by repeated trial.

/// Allow all the core card functionality to be used
/// externally. Everything in core is agnostic to any
/// particular card game.
pub mod core;
/// Monte Carlo estimation helpers, driven by the core.
#[cfg(feature = "sim")]
pub mod sim;

/// Export the error type at the crate root.
pub use crate::core::DeckstatError;
