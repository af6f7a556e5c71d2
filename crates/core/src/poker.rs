// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Types used in a Poker game.
use serde::{Deserialize, Serialize};
use std::{fmt, ops, str::FromStr};

pub use rialo_cards::{Card, Deck, Hand, Rank, Suit};
pub use rialo_eval::{HandCategory, RankTuple};

use crate::GameError;

/// Chips amount.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Chips(u32);

impl Chips {
    /// The zero chips.
    pub const ZERO: Chips = Chips(0);

    /// Creates chips with the given value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The integer amount.
    pub fn amount(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Chips {
    fn from(val: u32) -> Self {
        Chips(val)
    }
}

impl From<Chips> for u32 {
    fn from(val: Chips) -> Self {
        val.0
    }
}

impl ops::Add for Chips {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl ops::AddAssign for Chips {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

/// Subtraction floors at zero chips.
impl ops::Sub<Chips> for Chips {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl ops::SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0;
        if amount >= 1_000_000 {
            write!(
                f,
                "{},{:03},{:03}",
                amount / 1_000_000,
                amount % 1_000_000 / 1_000,
                amount % 1000
            )
        } else if amount >= 1_000 {
            write!(f, "{},{:03}", amount / 1000, amount % 1000)
        } else {
            write!(f, "{}", amount)
        }
    }
}

/// The asset chips are denominated in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asset {
    /// Bitcoin chips.
    #[default]
    Btc,
    /// Ether chips.
    Eth,
}

impl Asset {
    /// Returns all assets.
    pub fn assets() -> impl Iterator<Item = Asset> {
        [Asset::Btc, Asset::Eth].into_iter()
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let asset = match self {
            Asset::Btc => "BTC",
            Asset::Eth => "ETH",
        };

        write!(f, "{asset}")
    }
}

impl FromStr for Asset {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BTC" => Ok(Asset::Btc),
            "ETH" => Ok(Asset::Eth),
            _ => Err(GameError::UnknownAsset(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_formatting() {
        assert_eq!(Chips(5).to_string(), "5");
        assert_eq!(Chips(123).to_string(), "123");
        assert_eq!(Chips(1_000).to_string(), "1,000");
        assert_eq!(Chips(12_345).to_string(), "12,345");
        assert_eq!(Chips(1_000_000).to_string(), "1,000,000");
        assert_eq!(Chips(1_234_567).to_string(), "1,234,567");
    }

    #[test]
    fn chips_floor_at_zero() {
        let mut chips = Chips::new(20);
        chips -= Chips::new(35);
        assert_eq!(chips, Chips::ZERO);
        assert_eq!(Chips::new(10) - Chips::new(15), Chips::ZERO);

        chips += Chips::new(u32::MAX);
        chips += Chips::new(1);
        assert_eq!(chips.amount(), u32::MAX);
        assert_eq!(Chips::new(40) + Chips::new(2), Chips::new(42));
    }

    #[test]
    fn asset_parse() {
        assert_eq!("BTC".parse::<Asset>().unwrap(), Asset::Btc);
        assert_eq!("eth".parse::<Asset>().unwrap(), Asset::Eth);
        assert_eq!(" Eth ".parse::<Asset>().unwrap(), Asset::Eth);
        assert!(matches!(
            "SOL".parse::<Asset>(),
            Err(GameError::UnknownAsset(s)) if s == "SOL"
        ));

        for asset in Asset::assets() {
            assert_eq!(asset.to_string().parse::<Asset>().unwrap(), asset);
        }
    }
}
