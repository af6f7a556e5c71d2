// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rialo Poker hand evaluator.
//!
//! Evaluates five cards Poker hands into a [RankTuple]: the hand
//! [HandCategory] followed by the ranks that break ties between hands of the
//! same category, most significant first.
//!
//! To use the evaluator create a hand and use [RankTuple] to evaluate it and
//! compare it with other hands:
//!
//! ```
//! # use rialo_eval::*;
//! let kings_full: Hand = "KS KH KD 4C 4S".parse().unwrap();
//! let flush: Hand = "2C 5C 9C JC KC".parse().unwrap();
//!
//! let v1 = RankTuple::eval(&kings_full);
//! let v2 = RankTuple::eval(&flush);
//! assert!(v1 > v2);
//! assert_eq!(v1.describe(), "Full House");
//! assert_eq!(payout_multiplier(&v1, &v2), 35);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandCategory, RankTuple, compare, compare_i8, payout_multiplier};

// Reexport cards types.
pub use rialo_cards::{Card, Deck, Error, Hand, Rank, Result, Suit};
