// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rialo Poker game session.
//!
//! A [Session] is a heads-up game between a player and a bot: each hand deals
//! five cards to both, the stronger hand wins a payout in the session base
//! [Asset](poker::Asset), and the player can fold a hand on the table at a
//! fixed cost.
//!
//! ```
//! # use rialo_core::{Config, HandResult, Session, poker::Chips};
//! let mut session = Session::new(Config::default());
//! let outcome = session.deal_hand().unwrap();
//! assert_eq!(session.hands_played(), 1);
//! if outcome.result != HandResult::Tie {
//!     assert!(outcome.delta >= Chips::new(5));
//! }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod poker;
pub mod prices;
pub mod session;

pub use session::{Config, GameError, HandOutcome, HandResult, Player, Session};
