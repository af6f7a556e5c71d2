// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards deck.
use log::debug;
use rand::prelude::*;

use crate::{Card, Error, Rank, Result, Suit};

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the deck in place.
    ///
    /// This is a Fisher-Yates shuffle: walking from the last card down to the
    /// second, each card is swapped with a card picked uniformly from the cards
    /// at or below its position.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Deals `count` cards from the top of the deck.
    ///
    /// The top of the deck is the end of the cards sequence, cards are returned
    /// in the order they are removed. If the deck has less than `count` cards
    /// no card is dealt and an error is returned.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>> {
        let remaining = self.cards.len();
        if count > remaining {
            return Err(Error::InsufficientCards {
                requested: count,
                remaining,
            });
        }

        let cards: Vec<Card> = self.cards.drain(remaining - count..).rev().collect();
        debug!("Dealt {count} cards, {} left", self.cards.len());

        Ok(cards)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The cards left in the deck, the last card is the top of the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    /// Builds an ordered deck, suits in spades, hearts, diamonds, clubs order
    /// and ranks ascending within each suit.
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
