use crate::core::tally::Tally;

/// Boolean hand-property queries over a [`Tally`].
///
/// Stateless: every query is a pure function of the tally it borrows, so an
/// evaluator is cheap to construct and should be constructed fresh after the
/// underlying cards change.
/// [`CardSet::evaluator`](crate::core::CardSet::evaluator) hands one out
/// already bound to a live tally.
///
/// ```
/// use deckstat::core::CardSet;
///
/// let mut deck = CardSet::standard();
/// deck.retain(|c| c.suit() == "♠");
///
/// assert!(deck.evaluator().has_flush(13, None));
/// assert!(deck.evaluator().has_straight(13));
/// assert!(!deck.evaluator().has_pair());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    tally: &'a Tally,
}

impl<'a> Evaluator<'a> {
    /// Bind an evaluator to a tally.
    pub fn new(tally: &'a Tally) -> Self {
        Self { tally }
    }

    /// Is there at least one card behind this tally?
    pub fn has_cards(&self) -> bool {
        !self.tally.is_empty()
    }

    /// Is there a flush of the given size?
    ///
    /// With a named suit, true iff that suit's count **strictly exceeds**
    /// `count`; an unknown suit counts as zero and can never satisfy this.
    /// With no suit, true iff any suit's count is at least `count`. The two
    /// branches intentionally use different comparisons; callers depend on
    /// each one as it stands, so they must not be unified.
    ///
    /// ```
    /// use deckstat::core::{Card, CardSet};
    ///
    /// let mut set = CardSet::standard();
    /// set.retain(|c| c.suit() == "♠");
    /// set.truncate(5);
    /// set.push(Card::new("2", 2, "♡", "RED"));
    ///
    /// let eval = set.evaluator();
    /// assert!(eval.has_flush(4, Some("♠"))); // 5 > 4
    /// assert!(!eval.has_flush(5, Some("♠"))); // 5 is not > 5
    /// assert!(eval.has_flush(5, None)); // 5 >= 5
    /// ```
    pub fn has_flush(&self, count: usize, suit: Option<&str>) -> bool {
        match suit {
            Some(suit) => self.tally.suit_count(suit) > count,
            None => self.tally.suit_counts().any(|(_, n)| n >= count),
        }
    }

    /// Is there a run of `count` consecutive rank values?
    ///
    /// The run is searched over the set of *distinct* rank values present;
    /// holding the same rank in several suits neither lengthens nor breaks a
    /// run. A zero-length run exists vacuously.
    pub fn has_straight(&self, count: usize) -> bool {
        if count == 0 {
            return true;
        }
        let values: Vec<i32> = self.tally.rank_values().collect();
        // Values are distinct and ascending, so a window holds `count`
        // consecutive values iff its endpoints differ by `count - 1`.
        values
            .windows(count)
            .any(|w| w[count - 1] - w[0] == count as i32 - 1)
    }

    /// Are there at least `sets_required` distinct rank values that each
    /// occur at least `group_size` times?
    ///
    /// ```
    /// use deckstat::core::CardSet;
    ///
    /// let mut deck = CardSet::standard();
    /// // Thirteen four-of-a-kinds in a full deck.
    /// assert!(deck.evaluator().has_n_of_a_kind(13, 4));
    ///
    /// deck.truncate(3); // 2♠ 2♣ 2♡
    /// assert!(deck.evaluator().has_three_of_a_kind());
    /// assert!(!deck.evaluator().has_four_of_a_kind());
    /// ```
    pub fn has_n_of_a_kind(&self, sets_required: usize, group_size: usize) -> bool {
        let sets = self
            .tally
            .value_counts()
            .filter(|&(_, n)| n >= group_size)
            .count();
        sets >= sets_required
    }

    /// One rank value occurring at least twice.
    pub fn has_pair(&self) -> bool {
        self.has_n_of_a_kind(1, 2)
    }

    /// Two distinct rank values each occurring at least twice.
    pub fn has_two_pair(&self) -> bool {
        self.has_n_of_a_kind(2, 2)
    }

    /// One rank value occurring at least three times.
    pub fn has_three_of_a_kind(&self) -> bool {
        self.has_n_of_a_kind(1, 3)
    }

    /// One rank value occurring at least four times.
    pub fn has_four_of_a_kind(&self) -> bool {
        self.has_n_of_a_kind(1, 4)
    }

    /// Always `false`. No straight-flush detection has ever been wired up
    /// behind this query; it is kept as a stable placeholder rather than an
    /// invitation to guess at semantics.
    pub fn has_straight_flush(&self) -> bool {
        false
    }
}
