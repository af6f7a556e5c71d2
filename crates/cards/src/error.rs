// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

use crate::Card;

/// Errors for dealing cards and building hands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Tried to deal more cards than the deck holds.
    #[error("cannot deal {requested} cards, only {remaining} left in the deck")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
    /// A hand must have exactly five cards.
    #[error("a hand needs 5 cards, got {0}")]
    InvalidHandSize(usize),
    /// The same card appears twice in a hand.
    #[error("duplicate card {0} in hand")]
    DuplicateCard(Card),
    /// The text is not a valid card.
    #[error("invalid card '{0}'")]
    ParseCard(String),
}

/// Cards result type.
pub type Result<T> = std::result::Result<T, Error>;
