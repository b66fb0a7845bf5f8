//! This is the core module. It exports the card model and
//! the histogram-based evaluation code.

/// card.rs has the card value type.
mod card;
/// Re-export Card.
pub use self::card::Card;

/// Rank and suit lookup tables.
mod tables;
/// Re-export both tables.
pub use self::tables::{RankTable, SuitTable};

/// Histograms derived from a card sequence.
mod tally;
/// Export `Tally`
pub use self::tally::Tally;

/// CardSet covers deck and hand duty.
mod card_set;
/// Export `CardSet`
pub use self::card_set::CardSet;

/// Hand property queries over a tally.
mod eval;
/// Export the evaluator.
pub use self::eval::Evaluator;

/// Errors for table lookups and out-of-range requests.
mod error;
/// Export the error type.
pub use self::error::DeckstatError;
