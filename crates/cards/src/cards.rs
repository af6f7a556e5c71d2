// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Error, Result};

/// A Poker card.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = Error;

    /// Parses a rank followed by a suit, like `AS`, `10♠`, `th` or `Qd`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let err = || Error::ParseCard(s.to_string());

        let suit_char = s.chars().last().ok_or_else(err)?;
        let rank_str = &s[..s.len() - suit_char.len_utf8()];

        let suit = Suit::from_char(suit_char).ok_or_else(err)?;
        let rank = Rank::from_str_exact(rank_str).ok_or_else(err)?;

        Ok(Card::new(rank, suit))
    }
}

/// Card rank.
///
/// The discriminant is the rank ordinal used by the evaluator, from 2 for a
/// deuce to 14 for an ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank ordinal value, 2 to 14.
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8
    }

    fn from_str_exact(s: &str) -> Option<Rank> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spades,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
}

impl Suit {
    /// Returns all suits in deck order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }

    /// Red suits are hearts and diamonds.
    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    /// The suit symbol.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    fn from_char(c: char) -> Option<Suit> {
        match c {
            '♠' | 'S' | 's' => Some(Suit::Spades),
            '♥' | 'H' | 'h' => Some(Suit::Hearts),
            '♦' | 'D' | 'd' => Some(Suit::Diamonds),
            '♣' | 'C' | 'c' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A five cards Poker hand.
///
/// A hand can only be created with exactly [Hand::SIZE] distinct cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>")]
pub struct Hand([Card; 5]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from the given cards.
    pub fn new(cards: Vec<Card>) -> Result<Self> {
        Self::try_from(cards)
    }

    /// The hand cards in the order they were dealt.
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// Iterates the hand cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = Error;

    fn try_from(cards: &[Card]) -> Result<Self> {
        let cards: [Card; Hand::SIZE] = cards
            .try_into()
            .map_err(|_| Error::InvalidHandSize(cards.len()))?;

        for (idx, card) in cards.iter().enumerate() {
            if cards[idx + 1..].contains(card) {
                return Err(Error::DuplicateCard(*card));
            }
        }

        Ok(Self(cards))
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = Error;

    fn try_from(cards: Vec<Card>) -> Result<Self> {
        Self::try_from(cards.as_slice())
    }
}

impl FromStr for Hand {
    type Err = Error;

    /// Parses whitespace separated cards, like `AS KS QS JS 10S`.
    fn from_str(s: &str) -> Result<Self> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>>>()?;
        Hand::new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "K♦");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5♠");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "J♣");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10♥");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(format!("{c:?}"), "Card(A♥)");
    }

    #[test]
    fn card_parse() {
        let ts = Card::new(Rank::Ten, Suit::Spades);
        assert_eq!("10♠".parse::<Card>().unwrap(), ts);
        assert_eq!("TS".parse::<Card>().unwrap(), ts);
        assert_eq!("ts".parse::<Card>().unwrap(), ts);
        assert_eq!("10s".parse::<Card>().unwrap(), ts);

        assert_eq!(
            "Qd".parse::<Card>().unwrap(),
            Card::new(Rank::Queen, Suit::Diamonds)
        );
        assert_eq!(
            " 2♣ ".parse::<Card>().unwrap(),
            Card::new(Rank::Deuce, Suit::Clubs)
        );

        for bad in ["", "S", "1S", "11H", "AX", "A"] {
            assert!(
                matches!(bad.parse::<Card>(), Err(Error::ParseCard(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn rank_values() {
        let values = Rank::ranks().map(|r| r.value()).collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<_>>());
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Deuce < Rank::Trey);
    }

    #[test]
    fn red_suits() {
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Spades.is_red());
        assert!(!Suit::Clubs.is_red());
    }

    #[test]
    fn hand_size() {
        let cards = "2S 3S 4S 5S AS 9H"
            .split_whitespace()
            .map(|c| c.parse::<Card>().unwrap())
            .collect::<Vec<_>>();

        assert_eq!(
            Hand::new(cards[..4].to_vec()),
            Err(Error::InvalidHandSize(4))
        );
        assert_eq!(Hand::new(cards.clone()), Err(Error::InvalidHandSize(6)));
        assert_eq!(Hand::new(Vec::new()), Err(Error::InvalidHandSize(0)));

        let hand = Hand::new(cards[..5].to_vec()).unwrap();
        assert_eq!(hand.cards(), &cards[..5]);
        assert_eq!(hand.to_string(), "2♠ 3♠ 4♠ 5♠ A♠");
    }

    #[test]
    fn hand_duplicates() {
        let res = "KH KH 2C 3C 4C".parse::<Hand>();
        assert_eq!(
            res,
            Err(Error::DuplicateCard(Card::new(Rank::King, Suit::Hearts)))
        );

        assert!("KH KD 2C 3C 4C".parse::<Hand>().is_ok());
    }

    #[test]
    fn hand_deserialize_duplicates() {
        let hand = "AS KS QS JS 10S".parse::<Hand>().unwrap();
        let json = serde_json::to_string(&hand).unwrap();
        assert_eq!(serde_json::from_str::<Hand>(&json).unwrap(), hand);

        let ace = serde_json::to_string(&Card::new(Rank::Ace, Suit::Spades)).unwrap();
        let dups = format!("[{}]", vec![ace.as_str(); 5].join(","));
        assert!(serde_json::from_str::<Hand>(&dups).is_err());

        let short = format!("[{ace}]");
        assert!(serde_json::from_str::<Hand>(&short).is_err());
    }
}
