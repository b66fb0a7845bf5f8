use std::collections::{BTreeMap, HashMap, HashSet};

use crate::core::card::Card;

/// The histograms of a card sequence.
///
/// A `Tally` is a pure function of the cards it was counted from: which
/// suits, ranks, colors, and rank values are present, and how many cards
/// carry each suit and each rank value. `CardSet` recounts after every
/// mutation so its tally can never describe a sequence it no longer holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    total: usize,
    suit_counts: HashMap<String, usize>,
    value_counts: BTreeMap<i32, usize>,
    ranks: HashSet<String>,
    colors: HashSet<String>,
}

impl Tally {
    /// Count a card sequence.
    pub fn of(cards: &[Card]) -> Self {
        let mut tally = Self::default();
        for c in cards {
            tally.total += 1;
            *tally.suit_counts.entry(c.suit().to_string()).or_insert(0) += 1;
            *tally.value_counts.entry(c.rank_value()).or_insert(0) += 1;
            tally.ranks.insert(c.rank().to_string());
            tally.colors.insert(c.color().to_string());
        }
        tally
    }

    /// How many cards were counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Were any cards counted at all?
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// How many cards carry this suit. Zero for a suit that isn't present.
    pub fn suit_count(&self, suit: &str) -> usize {
        self.suit_counts.get(suit).copied().unwrap_or(0)
    }

    /// How many cards carry this rank value. Zero for a value that isn't
    /// present.
    pub fn value_count(&self, value: i32) -> usize {
        self.value_counts.get(&value).copied().unwrap_or(0)
    }

    /// The suits present in the sequence.
    pub fn suits(&self) -> impl Iterator<Item = &str> {
        self.suit_counts.keys().map(String::as_str)
    }

    /// The rank labels present in the sequence.
    pub fn ranks(&self) -> impl Iterator<Item = &str> {
        self.ranks.iter().map(String::as_str)
    }

    /// The colors present in the sequence.
    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(String::as_str)
    }

    /// The distinct rank values present, ascending.
    pub fn rank_values(&self) -> impl Iterator<Item = i32> {
        self.value_counts.keys().copied()
    }

    /// Per-suit occurrence counts.
    pub fn suit_counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.suit_counts.iter().map(|(suit, n)| (suit.as_str(), *n))
    }

    /// Per-rank-value occurrence counts, ascending by value.
    pub fn value_counts(&self) -> impl Iterator<Item = (i32, usize)> {
        self.value_counts.iter().map(|(value, n)| (*value, *n))
    }
}
