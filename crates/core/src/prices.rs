// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Reference prices for estimating a player portfolio.
//!
//! Prices are cosmetic: they are never read when dealing or scoring hands,
//! and a missing price only leaves that asset out of the estimate.
use serde::{Deserialize, Serialize};

use crate::poker::{Asset, Chips};

/// The number of chips for one unit of an asset.
pub const CHIPS_PER_UNIT: f64 = 1000.0;

/// USD reference prices, a price is `None` when it is not known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    /// BTC price in USD.
    pub btc_usd: Option<f64>,
    /// ETH price in USD.
    pub eth_usd: Option<f64>,
}

impl Prices {
    /// Creates prices.
    pub fn new(btc_usd: Option<f64>, eth_usd: Option<f64>) -> Self {
        Self { btc_usd, eth_usd }
    }

    /// The USD price of an asset.
    pub fn price(&self, asset: Asset) -> Option<f64> {
        match asset {
            Asset::Btc => self.btc_usd,
            Asset::Eth => self.eth_usd,
        }
    }

    /// The USD value of an amount of chips, zero if the price is unknown.
    pub fn value(&self, asset: Asset, chips: Chips) -> f64 {
        let price = self.price(asset).unwrap_or(0.0);
        chips.amount() as f64 / CHIPS_PER_UNIT * price
    }

    /// Checks if any price is known.
    pub fn is_empty(&self) -> bool {
        self.btc_usd.is_none() && self.eth_usd.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_value() {
        let prices = Prices::new(Some(60_000.0), Some(3_000.0));
        assert_eq!(prices.value(Asset::Btc, Chips::new(100)), 6_000.0);
        assert_eq!(prices.value(Asset::Eth, Chips::new(100)), 300.0);
        assert_eq!(prices.value(Asset::Eth, Chips::ZERO), 0.0);
        assert!(!prices.is_empty());
    }

    #[test]
    fn missing_prices() {
        let prices = Prices::new(None, Some(2_000.0));
        assert_eq!(prices.price(Asset::Btc), None);
        assert_eq!(prices.value(Asset::Btc, Chips::new(100)), 0.0);
        assert_eq!(prices.value(Asset::Eth, Chips::new(500)), 1_000.0);

        assert!(Prices::default().is_empty());
    }
}
