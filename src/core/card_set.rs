use std::fmt;
use std::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::card::Card;
use crate::core::error::DeckstatError;
use crate::core::eval::Evaluator;
use crate::core::tables::{RankTable, SuitTable};
use crate::core::tally::Tally;

/// An ordered, mutable collection of cards plus the tally derived from it.
///
/// One type covers both deck duty and hand duty; the two are structurally
/// identical. Every mutating operation recounts the tally before returning,
/// so the histograms always describe the cards currently in the set.
///
/// ```
/// use deckstat::core::CardSet;
///
/// let mut deck = CardSet::standard();
/// assert_eq!(52, deck.len());
///
/// deck.duplicate();
/// assert_eq!(104, deck.len());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Card>", into = "Vec<Card>"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSet {
    /// Card storage.
    cards: Vec<Card>,
    /// Histograms of `cards`, recounted after every mutation.
    tally: Tally,
}

impl CardSet {
    /// Create a set from an explicit list of cards, used verbatim.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let tally = Tally::of(&cards);
        Self { cards, tally }
    }

    /// Create the cartesian product of a rank table and a suit table:
    /// one card per rank × suit pair, ranks outermost, both in table order.
    ///
    /// ```
    /// use deckstat::core::{CardSet, RankTable, SuitTable};
    ///
    /// let ranks = RankTable::new_with_entries([("2", 2), ("3", 3)]);
    /// let suits = SuitTable::new_with_entries([("★", "GOLD"), ("☾", "SILVER")]);
    /// let deck = CardSet::with_tables(&ranks, &suits);
    ///
    /// assert_eq!(4, deck.len());
    /// assert_eq!("2★ 2☾ 3★ 3☾", deck.to_string());
    /// ```
    pub fn with_tables(ranks: &RankTable, suits: &SuitTable) -> Self {
        let mut cards = Vec::with_capacity(ranks.len() * suits.len());
        for (rank, value) in ranks.iter() {
            for (suit, color) in suits.iter() {
                cards.push(Card::new(rank, value, suit, color));
            }
        }
        Self::from_cards(cards)
    }

    /// Custom ranks crossed with the standard four suits.
    pub fn with_ranks(ranks: &RankTable) -> Self {
        Self::with_tables(ranks, &SuitTable::standard())
    }

    /// Custom suits crossed with the standard thirteen ranks.
    pub fn with_suits(suits: &SuitTable) -> Self {
        Self::with_tables(&RankTable::standard(), suits)
    }

    /// The standard 52 card deck.
    pub fn standard() -> Self {
        Self::with_tables(&RankTable::standard(), &SuitTable::standard())
    }

    /// How many cards are there in the set?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been removed?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in their current order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Get an iterator over the cards.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// The histograms of the current sequence.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// An evaluator bound to the current tally.
    ///
    /// The evaluator borrows the set, so the set can't be mutated while the
    /// evaluator is alive; a query can never see a stale tally.
    ///
    /// ```
    /// use deckstat::core::CardSet;
    ///
    /// let deck = CardSet::standard();
    /// assert!(deck.evaluator().has_flush(13, None));
    /// ```
    pub fn evaluator(&self) -> Evaluator<'_> {
        Evaluator::new(&self.tally)
    }

    /// Add a card to the end of the set.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
        self.retally();
    }

    /// Add cards to the end of the set in the order given.
    /// A no-op on empty input; never fails.
    pub fn append(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
        self.retally();
    }

    /// Add a value-equal copy of every card currently in the set.
    ///
    /// The length doubles; the originals keep their positions and the copies
    /// follow in the same order.
    ///
    /// ```
    /// use deckstat::core::{Card, CardSet};
    ///
    /// let mut pair = CardSet::from_cards(vec![
    ///     Card::new("A", 14, "♠", "BLACK"),
    ///     Card::new("K", 13, "♡", "RED"),
    /// ]);
    /// pair.duplicate();
    /// assert_eq!("A♠ K♡ A♠ K♡", pair.to_string());
    /// ```
    pub fn duplicate(&mut self) {
        self.cards.extend_from_within(..);
        self.retally();
    }

    /// Keep only the cards satisfying the predicate, preserving their order.
    ///
    /// ```
    /// use deckstat::core::CardSet;
    ///
    /// let mut deck = CardSet::standard();
    /// deck.retain(|c| c.rank() != "A");
    /// assert_eq!(48, deck.len());
    /// ```
    pub fn retain<F: FnMut(&Card) -> bool>(&mut self, predicate: F) {
        self.cards.retain(predicate);
        self.retally();
    }

    /// Keep only the first `n` cards. Asking for more cards than the set
    /// holds keeps everything.
    pub fn truncate(&mut self, n: usize) {
        self.cards.truncate(n);
        self.retally();
    }

    /// Remove and return one card with the minimum rank value, breaking ties
    /// by first occurrence in the current order. `None` on an empty set.
    pub fn remove_lowest_rank(&mut self) -> Option<Card> {
        let mut lowest: Option<(usize, i32)> = None;
        for (idx, card) in self.cards.iter().enumerate() {
            // Strict comparison keeps the first occurrence on ties.
            if lowest.is_none_or(|(_, value)| card.rank_value() < value) {
                lowest = Some((idx, card.rank_value()));
            }
        }
        let (idx, _) = lowest?;
        let card = self.cards.remove(idx);
        self.retally();
        Some(card)
    }

    /// Randomly shuffle the set in place.
    /// Deterministic under a seeded rng; not suitable for cryptography.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        // A permutation never changes the tally.
        self.cards.shuffle(rng);
    }

    /// A new set holding value-copies of the first `n` cards, typically used
    /// to take a hand off the top of a deck. This set is left unmodified.
    ///
    /// ```
    /// use deckstat::core::CardSet;
    ///
    /// let deck = CardSet::standard();
    /// let hand = deck.sample(5).unwrap();
    ///
    /// assert_eq!(5, hand.len());
    /// assert_eq!(52, deck.len());
    /// assert!(deck.sample(53).is_err());
    /// ```
    pub fn sample(&self, n: usize) -> Result<CardSet, DeckstatError> {
        if n > self.cards.len() {
            return Err(DeckstatError::NotEnoughCards {
                requested: n,
                available: self.cards.len(),
            });
        }
        Ok(Self::from_cards(self.cards[..n].to_vec()))
    }

    fn retally(&mut self) {
        self.tally = Tally::of(&self.cards);
    }
}

/// The standard 52 card deck is the default.
impl Default for CardSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<Vec<Card>> for CardSet {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl From<CardSet> for Vec<Card> {
    fn from(set: CardSet) -> Self {
        set.cards
    }
}

impl Extend<Card> for CardSet {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
        self.retally();
    }
}

/// Turn a set into an iterator over its cards.
impl IntoIterator for CardSet {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;
    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl Index<usize> for CardSet {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}
impl Index<Range<usize>> for CardSet {
    type Output = [Card];
    fn index(&self, index: Range<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeTo<usize>> for CardSet {
    type Output = [Card];
    fn index(&self, index: RangeTo<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFrom<usize>> for CardSet {
    type Output = [Card];
    fn index(&self, index: RangeFrom<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFull> for CardSet {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

/// Render every card as rank+suit, space-separated.
/// A debugging surface, not a serialization format.
impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
