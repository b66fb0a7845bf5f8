//! Monte Carlo estimation helpers.
//!
//! The core answers yes/no questions about one fixed set of cards. This
//! module runs a caller-supplied trial over and over and tallies how often
//! the answer is yes, which is all an empirical probability estimate is.
//! The random source is injected so whole experiments replay under a seed.

use std::fmt;

use rand::Rng;
use tracing::event;

/// A running count of trial outcomes.
///
/// ```
/// use deckstat::sim::Frequency;
///
/// let mut freq = Frequency::default();
/// freq.record(true);
/// freq.record(false);
/// assert_eq!(0.5, freq.ratio());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frequency {
    /// How many trials succeeded.
    pub hits: usize,
    /// How many trials ran.
    pub trials: usize,
}

impl Frequency {
    /// Record the outcome of one trial.
    pub fn record(&mut self, hit: bool) {
        self.trials += 1;
        if hit {
            self.hits += 1;
        }
    }

    /// The empirical success ratio. Zero before any trial has run.
    pub fn ratio(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.hits as f64 / self.trials as f64
        }
    }

    /// The success ratio as a percentage.
    pub fn percent(&self) -> f64 {
        100.0 * self.ratio()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({:.2}%)", self.hits, self.trials, self.percent())
    }
}

/// Run `trials` independent trials and tally how often they succeed.
///
/// Each trial borrows the one rng, so consecutive trials draw from a single
/// seedable stream and an experiment replays exactly under the same seed.
///
/// ```
/// use deckstat::core::CardSet;
/// use deckstat::sim::estimate;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let freq = estimate(1000, &mut rng, |rng| {
///     let mut deck = CardSet::standard();
///     deck.shuffle(rng);
///     let hand = deck.sample(5).unwrap();
///     hand.evaluator().has_pair()
/// });
///
/// assert_eq!(1000, freq.trials);
/// ```
pub fn estimate<R, F>(trials: usize, rng: &mut R, mut trial: F) -> Frequency
where
    R: Rng,
    F: FnMut(&mut R) -> bool,
{
    let mut freq = Frequency::default();
    for _ in 0..trials {
        let hit = trial(rng);
        freq.record(hit);
    }
    event!(
        tracing::Level::DEBUG,
        hits = freq.hits,
        trials = freq.trials,
        ratio = freq.ratio(),
        "estimate complete"
    );
    freq
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardSet;
    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_frequency_record() {
        let mut freq = Frequency::default();
        freq.record(true);
        freq.record(true);
        freq.record(false);

        assert_eq!(2, freq.hits);
        assert_eq!(3, freq.trials);
        assert_relative_eq!(2.0 / 3.0, freq.ratio());
    }

    #[test]
    fn test_frequency_empty_ratio_is_zero() {
        let freq = Frequency::default();
        assert_eq!(0.0, freq.ratio());
        assert_eq!(0.0, freq.percent());
    }

    #[test]
    fn test_frequency_display() {
        let mut freq = Frequency::default();
        for i in 0..4 {
            freq.record(i < 3);
        }
        assert_eq!("3/4 (75.00%)", freq.to_string());
    }

    #[test]
    fn test_estimate_extremes() {
        let mut rng = StdRng::seed_from_u64(0);

        let always = estimate(100, &mut rng, |_| true);
        assert_eq!(100, always.hits);

        let never = estimate(100, &mut rng, |_| false);
        assert_eq!(0, never.hits);
        assert_eq!(100, never.trials);

        let none = estimate(0, &mut rng, |_| true);
        assert_eq!(Frequency::default(), none);
    }

    #[test]
    fn test_estimate_is_reproducible() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            estimate(500, &mut rng, |rng| {
                let mut deck = CardSet::standard();
                deck.shuffle(rng);
                deck.sample(5).unwrap().evaluator().has_pair()
            })
        };

        assert_eq!(run(99), run(99));
    }

    #[test_log::test]
    fn test_estimate_pair_in_five_cards() {
        // Exact probability of a pair or better in five cards is
        // 1 - (48/51)(44/50)(40/49)(36/48) ~= 0.4929.
        let mut rng = StdRng::seed_from_u64(1337);
        let freq = estimate(10_000, &mut rng, |rng| {
            let mut deck = CardSet::standard();
            deck.shuffle(rng);
            deck.sample(5).unwrap().evaluator().has_pair()
        });

        assert_relative_eq!(0.4929, freq.ratio(), epsilon = 0.02);
    }
}
