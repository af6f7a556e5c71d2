// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand payouts.
use super::RankTuple;

/// The chips paid by a high card hand.
pub const BASE_AMOUNT: u32 = 5;

/// Computes the chips paid for a hand between two players.
///
/// The payout is `BASE_AMOUNT * (1 + category)` where category is the
/// strongest of the two hands categories, so a strong losing hand raises the
/// payout as much as a strong winning hand.
///
/// The category is the raw first value of each tuple, an empty tuple counts
/// as a high card.
pub fn payout_multiplier(a: &RankTuple, b: &RankTuple) -> u32 {
    let category = |t: &RankTuple| t.values().first().copied().unwrap_or_default();
    let strength = category(a).max(category(b)) as u32;
    BASE_AMOUNT * (1 + strength)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hand;

    fn eval(hand: &str) -> RankTuple {
        RankTuple::eval(&hand.parse::<Hand>().unwrap())
    }

    #[test]
    fn full_house_beats_flush() {
        let full_house = eval("KS KH KD 4C 4S");
        let flush = eval("2C 5C 9C JC KC");
        assert_eq!(payout_multiplier(&full_house, &flush), 35);
        assert_eq!(payout_multiplier(&flush, &full_house), 35);
    }

    #[test]
    fn losing_hand_sets_payout() {
        // The strongest category sets the payout whichever hand holds it.
        let quads = eval("9H 9D 9C 9S 2H");
        let high_card = eval("2C 5D 9H JC KS");
        assert_eq!(payout_multiplier(&high_card, &quads), 40);

        let sf = eval("2S 3S 4S 5S AS");
        assert_eq!(payout_multiplier(&quads, &sf), 45);
    }

    #[test]
    fn high_cards_payout() {
        let h1 = eval("2C 5D 9H JC KS");
        let h2 = eval("3C 6D 9D JH AS");
        assert_eq!(payout_multiplier(&h1, &h2), BASE_AMOUNT);
    }

    #[test]
    fn raw_category_payout() {
        let unknown = RankTuple::from_values(vec![9, 1]);
        let high_card = RankTuple::from_values(vec![0, 1]);
        assert_eq!(payout_multiplier(&unknown, &high_card), 50);

        let empty = RankTuple::from_values(Vec::new());
        assert_eq!(payout_multiplier(&empty, &empty), BASE_AMOUNT);
    }
}
