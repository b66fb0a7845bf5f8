use std::collections::BTreeMap;

use rand::Rng;

use deckstat::core::{CardSet, SuitTable};
use deckstat::sim::{Frequency, estimate};

const FOAK_TRIALS: usize = 100_000;
const STRAIGHT_TRIALS: usize = 50_000;

/// The deck every experiment here draws from: thirteen ranks over two custom
/// suits, doubled to 52, shuffled, stripped of aces, cut to the top 13.
fn two_suit_cut<R: Rng>(suits: &SuitTable, rng: &mut R) -> CardSet {
    let mut deck = CardSet::with_suits(suits);
    deck.duplicate();
    deck.shuffle(rng);
    deck.retain(|c| c.rank() != "A");
    deck.truncate(13);
    deck
}

fn four_of_a_kind_odds<R: Rng>(suits: &SuitTable, rng: &mut R) {
    let freq = estimate(FOAK_TRIALS, rng, |rng| {
        two_suit_cut(suits, rng).evaluator().has_four_of_a_kind()
    });
    println!("Four of a kind in the 13-card cut: {freq}");
}

fn straight_length_sweep<R: Rng>(suits: &SuitTable, rng: &mut R) {
    for length in 3..9 {
        let freq = estimate(STRAIGHT_TRIALS, rng, |rng| {
            two_suit_cut(suits, rng).evaluator().has_straight(length)
        });
        println!("{length}-card straight in the 13-card cut: {freq}");
    }
}

/// Deal a 12-card hand, then shrink it from the bottom one card at a time,
/// asking at every size whether a 3-card straight is still in there.
fn diminishing_straight_odds<R: Rng>(suits: &SuitTable, rng: &mut R) {
    let mut by_size: BTreeMap<usize, Frequency> = BTreeMap::new();

    for _ in 0..STRAIGHT_TRIALS {
        let mut hand = two_suit_cut(suits, rng).sample(12).unwrap();
        while hand.len() >= 3 {
            by_size
                .entry(hand.len())
                .or_default()
                .record(hand.evaluator().has_straight(3));
            hand.remove_lowest_rank();
        }
    }

    for (size, freq) in &by_size {
        println!("3-card straight among the {size} highest cards: {freq}");
    }
}

fn main() {
    let suits = SuitTable::new_with_entries([("★", "GOLD"), ("☾", "SILVER")]);
    let mut rng = rand::rng();

    four_of_a_kind_odds(&suits, &mut rng);
    println!();
    straight_length_sweep(&suits, &mut rng);
    println!();
    diminishing_straight_odds(&suits, &mut rng);
}
