// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A five cards hand is classified into a [RankTuple]: its first element is
//! the [HandCategory] value, from 0 for a high card to 8 for a straight flush,
//! and the remaining elements are the ranks used to break ties in descending
//! significance (pairs ranks, kickers, straight high card).
//!
//! Tuples of different categories have different lengths, for example a four
//! of a kind tuple has three elements and a flush tuple six. Tuples are
//! compared lexicographically with the shorter tuple padded with trailing
//! zeros, see [compare].
//!
//! The [payout_multiplier] function computes the chips moved by a hand from
//! the stronger of the two hands categories.

mod category;
mod payout;
mod tuple;

pub use category::HandCategory;
pub use payout::{BASE_AMOUNT, payout_multiplier};
pub use tuple::{RankTuple, compare, compare_i8};
