// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rialo Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use rialo_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "10♦".parse().unwrap();
//! assert_eq!(td.to_string(), "10♦");
//! assert!(ah.rank() > td.rank());
//! ```
//!
//! a [Hand] type that holds exactly five distinct cards, and a [Deck] type for
//! shuffling and dealing cards:
//!
//! ```
//! # use rialo_cards::{Deck, Hand};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let player = Hand::new(deck.deal(5).unwrap()).unwrap();
//! let bot = Hand::new(deck.deal(5).unwrap()).unwrap();
//! assert_eq!(deck.count(), Deck::SIZE - 10);
//! # let _ = (player, bot);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
mod deck;
mod error;

pub use cards::{Card, Hand, Rank, Suit};
pub use deck::Deck;
pub use error::{Error, Result};
