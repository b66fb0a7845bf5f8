use thiserror::Error;

/// This is the core error type for the
/// deckstat library. It uses `thiserror` to provide
/// readable error messages.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeckstatError {
    /// A rank label was looked up in a rank table that doesn't contain it.
    #[error("Rank {0:?} is not present in the rank table")]
    UnknownRank(String),
    /// A suit label was looked up in a suit table that doesn't contain it.
    #[error("Suit {0:?} is not present in the suit table")]
    UnknownSuit(String),
    /// More cards were requested than the set currently holds.
    #[error("Requested {requested} cards but only {available} are available")]
    NotEnoughCards {
        /// How many cards the caller asked for.
        requested: usize,
        /// How many cards the set holds.
        available: usize,
    },
}
