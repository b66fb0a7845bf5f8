use std::fmt;

use crate::core::error::DeckstatError;
use crate::core::tables::{RankTable, SuitTable};

/// A playing card.
///
/// Rank, suit, and color are opaque labels compared by value; the rank value
/// is the numeric ordering key. All four fields are fixed at construction.
/// The one supported mutation is rescoring through [`Card::assign_rank_value`],
/// which replaces the rank value and nothing else.
///
/// ```
/// use deckstat::core::Card;
///
/// let card = Card::new("A", 14, "♠", "BLACK");
/// assert_eq!("A", card.rank());
/// assert_eq!(14, card.rank_value());
/// assert_eq!("♠", card.suit());
/// assert_eq!("BLACK", card.color());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    /// The face value label of this card.
    rank: String,
    /// The ordering key assigned to the rank.
    rank_value: i32,
    /// The suit label of this card.
    suit: String,
    /// The color of the suit, assigned at construction and never recomputed.
    color: String,
}

impl Card {
    /// Create a new card. All four fields are required.
    pub fn new(
        rank: impl Into<String>,
        rank_value: i32,
        suit: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            rank: rank.into(),
            rank_value,
            suit: suit.into(),
            color: color.into(),
        }
    }

    /// Create a card by looking the labels up in the given tables.
    ///
    /// The rank value comes from the rank table and the color from the suit
    /// table. Fails without building anything if either label is missing.
    ///
    /// ```
    /// use deckstat::core::{Card, RankTable, SuitTable};
    ///
    /// let card = Card::from_tables("K", "♡", &RankTable::standard(), &SuitTable::standard())
    ///     .unwrap();
    /// assert_eq!(13, card.rank_value());
    /// assert_eq!("RED", card.color());
    ///
    /// let missing = Card::from_tables("K", "☂", &RankTable::standard(), &SuitTable::standard());
    /// assert!(missing.is_err());
    /// ```
    pub fn from_tables(
        rank: impl Into<String>,
        suit: impl Into<String>,
        ranks: &RankTable,
        suits: &SuitTable,
    ) -> Result<Self, DeckstatError> {
        let rank = rank.into();
        let suit = suit.into();
        let rank_value = ranks
            .value(&rank)
            .ok_or_else(|| DeckstatError::UnknownRank(rank.clone()))?;
        let color = suits
            .color(&suit)
            .ok_or_else(|| DeckstatError::UnknownSuit(suit.clone()))?;
        Ok(Self {
            rank,
            rank_value,
            suit,
            color: color.to_string(),
        })
    }

    /// The rank label, e.g. `"10"` or `"A"`.
    pub fn rank(&self) -> &str {
        &self.rank
    }

    /// The numeric ordering key for this card's rank.
    pub fn rank_value(&self) -> i32 {
        self.rank_value
    }

    /// The suit label.
    pub fn suit(&self) -> &str {
        &self.suit
    }

    /// The color derived from the suit at construction.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Rescore this card against a different rank table.
    ///
    /// Only the rank value changes. If the table doesn't know this card's
    /// rank the card is left exactly as it was.
    ///
    /// ```
    /// use deckstat::core::{Card, RankTable};
    ///
    /// let mut card = Card::new("A", 14, "♠", "BLACK");
    /// let aces_low = RankTable::new_with_entries([("A", 1)]);
    /// card.assign_rank_value(&aces_low).unwrap();
    /// assert_eq!(1, card.rank_value());
    /// ```
    pub fn assign_rank_value(&mut self, table: &RankTable) -> Result<(), DeckstatError> {
        self.rank_value = table
            .value(&self.rank)
            .ok_or_else(|| DeckstatError::UnknownRank(self.rank.clone()))?;
        Ok(())
    }
}

/// Render as rank immediately followed by suit, e.g. `A♠`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor() {
        let c = Card::new("3", 3, "♠", "BLACK");
        assert_eq!("3", c.rank());
        assert_eq!(3, c.rank_value());
        assert_eq!("♠", c.suit());
        assert_eq!("BLACK", c.color());
    }

    #[test]
    fn test_equality_by_value() {
        let c1 = Card::new("3", 3, "♠", "BLACK");
        let c2 = Card::new("3", 3, "♠", "BLACK");
        let c3 = Card::new("3", 3, "♣", "BLACK");
        assert_eq!(c1, c2);
        assert_ne!(c1, c3);
    }

    #[test]
    fn test_from_tables() {
        let ranks = RankTable::standard();
        let suits = SuitTable::standard();
        let c = Card::from_tables("10", "♣", &ranks, &suits).unwrap();
        assert_eq!(10, c.rank_value());
        assert_eq!("BLACK", c.color());
    }

    #[test]
    fn test_from_tables_unknown_rank() {
        let err = Card::from_tables("Joker", "♣", &RankTable::standard(), &SuitTable::standard())
            .unwrap_err();
        assert_eq!(DeckstatError::UnknownRank("Joker".to_string()), err);
    }

    #[test]
    fn test_from_tables_unknown_suit() {
        let err = Card::from_tables("2", "☂", &RankTable::standard(), &SuitTable::standard())
            .unwrap_err();
        assert_eq!(DeckstatError::UnknownSuit("☂".to_string()), err);
    }

    #[test]
    fn test_assign_rank_value() {
        let mut c = Card::new("A", 14, "♢", "RED");
        let aces_low = RankTable::new_with_entries([("A", 1), ("K", 13)]);
        c.assign_rank_value(&aces_low).unwrap();
        assert_eq!(1, c.rank_value());
        // Everything but the value stays put.
        assert_eq!("A", c.rank());
        assert_eq!("♢", c.suit());
        assert_eq!("RED", c.color());
    }

    #[test]
    fn test_assign_rank_value_unknown_rank_leaves_card_unchanged() {
        let mut c = Card::new("A", 14, "♢", "RED");
        let table = RankTable::new_with_entries([("K", 13)]);
        let err = c.assign_rank_value(&table).unwrap_err();
        assert_eq!(DeckstatError::UnknownRank("A".to_string()), err);
        assert_eq!(14, c.rank_value());
    }

    #[test]
    fn test_display() {
        assert_eq!("A♠", format!("{}", Card::new("A", 14, "♠", "BLACK")));
        assert_eq!("10♡", format!("{}", Card::new("10", 10, "♡", "RED")));
    }
}
