// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classification and comparison.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use rialo_cards::{Card, Hand, Result};

use super::HandCategory;

/// A hand rank: the hand category followed by the tie breaking ranks.
///
/// Two tuples are compared element by element with the shorter one padded
/// with zeros, so that `[7, 9, 2]` and `[7, 9, 2, 0]` are equal. Equality
/// follows the same rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankTuple(Vec<u8>);

impl RankTuple {
    /// Classifies a five cards hand.
    pub fn eval(hand: &Hand) -> Self {
        classify(hand.cards())
    }

    /// Classifies a slice of cards.
    ///
    /// Fails with [rialo_cards::Error::InvalidHandSize] if the slice doesn't
    /// have exactly five cards, or [rialo_cards::Error::DuplicateCard] if a
    /// card is repeated.
    pub fn try_eval(cards: &[Card]) -> Result<Self> {
        let hand = Hand::try_from(cards)?;
        Ok(Self::eval(&hand))
    }

    /// Creates a tuple from raw values, the first value is the category.
    pub fn from_values(values: Vec<u8>) -> Self {
        Self(values)
    }

    /// The tuple values, the first value is the category.
    pub fn values(&self) -> &[u8] {
        &self.0
    }

    /// The hand category.
    ///
    /// An empty tuple or an unknown category value is a high card.
    pub fn category(&self) -> HandCategory {
        self.0
            .first()
            .copied()
            .map(HandCategory::from)
            .unwrap_or(HandCategory::HighCard)
    }

    /// The hand category name.
    pub fn describe(&self) -> &'static str {
        self.category().label()
    }

    fn new(category: HandCategory, ranks: impl IntoIterator<Item = u8>) -> Self {
        Self(std::iter::once(category.value()).chain(ranks).collect())
    }
}

impl Ord for RankTuple {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.0.len().max(other.0.len());
        (0..len)
            .map(|idx| {
                let a = self.0.get(idx).copied().unwrap_or(0);
                let b = other.0.get(idx).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for RankTuple {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankTuple {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for RankTuple {}

impl fmt::Display for RankTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.describe(), self.0)
    }
}

/// Compares two hand ranks.
///
/// Missing tie breaking values are compared as zeros.
pub fn compare(a: &RankTuple, b: &RankTuple) -> Ordering {
    a.cmp(b)
}

/// Compares two hand ranks returning 1 if `a` wins, -1 if `b` wins and 0 for
/// a tie.
pub fn compare_i8(a: &RankTuple, b: &RankTuple) -> i8 {
    compare(a, b) as i8
}

fn classify(cards: &[Card]) -> RankTuple {
    use HandCategory::*;

    let mut ranks = cards.iter().map(|c| c.rank().value()).collect::<Vec<_>>();
    ranks.sort_unstable();

    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());

    // A wheel is a straight with the ace playing low.
    let is_wheel = ranks == [2, 3, 4, 5, 14];
    let is_straight = is_wheel || ranks.windows(2).all(|w| w[0] + 1 == w[1]);
    let straight_high = if is_wheel { 5 } else { ranks[ranks.len() - 1] };

    // Rank groups as (count, rank) sorted by count and then rank, descending.
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(cards.len());
    for &rank in &ranks {
        match groups.iter_mut().find(|(_, r)| *r == rank) {
            Some((count, _)) => *count += 1,
            None => groups.push((1, rank)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let (primary_count, primary) = groups[0];
    let (secondary_count, secondary) = groups.get(1).copied().unwrap_or_default();

    let descending = || ranks.iter().rev().copied();
    let kickers = |skip: &[u8]| {
        ranks
            .iter()
            .rev()
            .copied()
            .filter(|r| !skip.contains(r))
            .collect::<Vec<_>>()
    };

    if is_straight && is_flush {
        RankTuple::new(StraightFlush, [straight_high])
    } else if primary_count == 4 {
        RankTuple::new(FourOfAKind, [primary].into_iter().chain(kickers(&[primary])))
    } else if primary_count == 3 && secondary_count == 2 {
        RankTuple::new(FullHouse, [primary, secondary])
    } else if is_flush {
        RankTuple::new(Flush, descending())
    } else if is_straight {
        RankTuple::new(Straight, [straight_high])
    } else if primary_count == 3 {
        RankTuple::new(ThreeOfAKind, [primary].into_iter().chain(kickers(&[primary])))
    } else if primary_count == 2 && secondary_count == 2 {
        let (high, low) = (primary.max(secondary), primary.min(secondary));
        RankTuple::new(TwoPair, [high, low].into_iter().chain(kickers(&[high, low])))
    } else if primary_count == 2 {
        RankTuple::new(OnePair, [primary].into_iter().chain(kickers(&[primary])))
    } else {
        RankTuple::new(HighCard, descending())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::StdRng};
    use rialo_cards::{Deck, Error};

    fn eval(hand: &str) -> RankTuple {
        RankTuple::eval(&hand.parse::<Hand>().unwrap())
    }

    fn permutations(cards: &[Card]) -> Vec<Vec<Card>> {
        if cards.len() <= 1 {
            return vec![cards.to_vec()];
        }

        let mut out = Vec::new();
        for idx in 0..cards.len() {
            let mut rest = cards.to_vec();
            let card = rest.remove(idx);
            for mut p in permutations(&rest) {
                p.insert(0, card);
                out.push(p);
            }
        }

        out
    }

    #[test]
    fn straight_flush() {
        let v = eval("2♠ 3♠ 4♠ 5♠ A♠");
        assert_eq!(v.values(), &[8, 5]);
        assert_eq!(v.category(), HandCategory::StraightFlush);
        assert_eq!(v.describe(), "Straight Flush");

        let royal = eval("10H JH QH KH AH");
        assert_eq!(royal.values(), &[8, 14]);
        assert!(royal > v);
    }

    #[test]
    fn four_of_a_kind() {
        let v = eval("9♥ 9♦ 9♣ 9♠ 2♥");
        assert_eq!(v.values(), &[7, 9, 2]);
        assert_eq!(v.describe(), "Four of a Kind");

        let v = eval("2H AD AC AS AH");
        assert_eq!(v.values(), &[7, 14, 2]);
    }

    #[test]
    fn full_house() {
        let v = eval("K♠ K♥ K♦ 4♣ 4♠");
        assert_eq!(v.values(), &[6, 13, 4]);
        assert_eq!(v.describe(), "Full House");

        // Trips rank first even when the pair is higher.
        let v = eval("3S 3H 3D AC AS");
        assert_eq!(v.values(), &[6, 3, 14]);
    }

    #[test]
    fn flush() {
        let v = eval("2♣ 5♣ 9♣ J♣ K♣");
        assert_eq!(v.values(), &[5, 13, 11, 9, 5, 2]);
        assert_eq!(v.describe(), "Flush");
    }

    #[test]
    fn straight() {
        let v = eval("5♥ 6♠ 7♦ 8♣ 9♥");
        assert_eq!(v.values(), &[4, 9]);
        assert_eq!(v.describe(), "Straight");

        let broadway = eval("10C JD QH KS AC");
        assert_eq!(broadway.values(), &[4, 14]);

        let wheel = eval("AC 2D 3H 4S 5C");
        assert_eq!(wheel.values(), &[4, 5]);

        let six_high = eval("2C 3D 4H 5S 6C");
        assert!(six_high > wheel);
        assert!(broadway > six_high);
    }

    #[test]
    fn no_wrap_around_straight() {
        let v = eval("QC KD AH 2S 3C");
        assert_eq!(v.category(), HandCategory::HighCard);

        let v = eval("9C JD QH KS AC");
        assert_eq!(v.category(), HandCategory::HighCard);
    }

    #[test]
    fn three_of_a_kind() {
        let v = eval("7S 7H 7D KC 2S");
        assert_eq!(v.values(), &[3, 7, 13, 2]);
        assert_eq!(v.describe(), "Three of a Kind");
    }

    #[test]
    fn two_pair() {
        let v = eval("4S 4H JD JC 9S");
        assert_eq!(v.values(), &[2, 11, 4, 9]);
        assert_eq!(v.describe(), "Two Pair");

        let better_kicker = eval("4C 4D JH JS QS");
        assert!(better_kicker > v);
    }

    #[test]
    fn one_pair() {
        let v = eval("8S 8H AD 3C 5S");
        assert_eq!(v.values(), &[1, 8, 14, 5, 3]);
        assert_eq!(v.describe(), "One Pair");
    }

    #[test]
    fn high_card() {
        let v = eval("2C 7D 9H JC KS");
        assert_eq!(v.values(), &[0, 13, 11, 9, 7, 2]);
        assert_eq!(v.describe(), "High Card");
    }

    #[test]
    fn try_eval_hand_size() {
        let cards = Deck::default().into_iter().take(6).collect::<Vec<_>>();

        assert_eq!(
            RankTuple::try_eval(&cards[..4]),
            Err(Error::InvalidHandSize(4))
        );
        assert_eq!(
            RankTuple::try_eval(&cards),
            Err(Error::InvalidHandSize(6))
        );
        assert_eq!(RankTuple::try_eval(&[]), Err(Error::InvalidHandSize(0)));

        // 2S..6S
        let v = RankTuple::try_eval(&cards[..5]).unwrap();
        assert_eq!(v.values(), &[8, 6]);
    }

    #[test]
    fn eval_ignores_cards_order() {
        for hand in [
            "2S 3S 4S 5S AS",
            "KS KH KD 4C 4S",
            "4S 4H JD JC 9S",
            "8S 8H AD 3C 5S",
            "2C 7D 9H JC KS",
        ] {
            let cards = hand.parse::<Hand>().unwrap().cards().to_vec();
            let expected = RankTuple::try_eval(&cards).unwrap();

            let perms = permutations(&cards);
            assert_eq!(perms.len(), 120);

            for p in perms {
                let v = RankTuple::try_eval(&p).unwrap();
                assert_eq!(v.values(), expected.values(), "{p:?}");
            }
        }
    }

    #[test]
    fn category_beats_kickers() {
        let full_house = eval("2S 2H 2D 3C 3S");
        let flush = eval("9C JC QC KC AC");
        assert_eq!(compare(&full_house, &flush), Ordering::Greater);
        assert_eq!(compare_i8(&full_house, &flush), 1);
        assert_eq!(compare_i8(&flush, &full_house), -1);
    }

    #[test]
    fn compare_pads_with_zeros() {
        let a = RankTuple::from_values(vec![7, 9, 2]);
        let b = RankTuple::from_values(vec![7, 9, 2, 0]);
        assert_eq!(compare(&a, &b), Ordering::Equal);
        assert_eq!(a, b);

        let c = RankTuple::from_values(vec![7, 9, 2, 1]);
        assert_eq!(compare_i8(&a, &c), -1);
        assert_eq!(compare_i8(&c, &a), 1);

        let empty = RankTuple::from_values(Vec::new());
        assert_eq!(empty, RankTuple::from_values(vec![0, 0]));
        assert_eq!(empty.category(), HandCategory::HighCard);
    }

    #[test]
    fn describe_unknown_category() {
        let v = RankTuple::from_values(vec![42, 1, 2]);
        assert_eq!(v.describe(), "High Card");
    }

    #[test]
    fn compare_ties_and_antisymmetry() {
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..2_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let h1 = Hand::new(deck.deal(5).unwrap()).unwrap();
            let h2 = Hand::new(deck.deal(5).unwrap()).unwrap();

            let v1 = RankTuple::eval(&h1);
            let v2 = RankTuple::eval(&h2);

            assert_eq!(compare_i8(&v1, &v1.clone()), 0);
            assert_eq!(compare_i8(&v1, &v2), -compare_i8(&v2, &v1));
        }

        // Same ranks in different suits tie.
        let a = eval("AS KD 9H 7C 2S");
        let b = eval("AH KC 9S 7D 2H");
        assert_eq!(compare_i8(&a, &b), 0);
    }

    #[test]
    fn all_five_cards_hands() {
        let cards = Deck::default().into_iter().collect::<Vec<_>>();
        let n = cards.len();
        let mut counts = [0usize; 9];
        let mut flush_values = HashSet::default();

        for c1 in 0..n {
            for c2 in (c1 + 1)..n {
                for c3 in (c2 + 1)..n {
                    for c4 in (c3 + 1)..n {
                        for c5 in (c4 + 1)..n {
                            let hand = [cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]];
                            let v = classify(&hand);
                            counts[v.category().value() as usize] += 1;

                            if v.category() == HandCategory::Flush {
                                flush_values.insert(v.values().to_vec());
                            }
                        }
                    }
                }
            }
        }

        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
        assert_eq!(counts[HandCategory::HighCard as usize], 1_302_540);
        assert_eq!(counts[HandCategory::OnePair as usize], 1_098_240);
        assert_eq!(counts[HandCategory::TwoPair as usize], 123_552);
        assert_eq!(counts[HandCategory::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandCategory::Straight as usize], 10_200);
        assert_eq!(counts[HandCategory::Flush as usize], 5_108);
        assert_eq!(counts[HandCategory::FullHouse as usize], 3_744);
        assert_eq!(counts[HandCategory::FourOfAKind as usize], 624);
        assert_eq!(counts[HandCategory::StraightFlush as usize], 40);

        // 1287 ranks combinations less the 10 straights.
        assert_eq!(flush_values.len(), 1_277);
    }
}
