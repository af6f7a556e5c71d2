// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rialo Poker terminal client.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::warn;
use rand::{SeedableRng, rngs::StdRng};

use rialo_core::{Config, Session, poker::Asset, prices::Prices};

pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// The player name.
    #[clap(long, short, default_value = "@you")]
    name: String,
    /// The asset hands are played for, BTC or ETH.
    #[clap(long, short, default_value = "BTC")]
    asset: Asset,
    /// The BTC reference price in USD.
    #[clap(long)]
    btc_usd: Option<f64>,
    /// The ETH reference price in USD.
    #[clap(long)]
    eth_usd: Option<f64>,
    /// Seed the shuffles to replay the same hands.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = Config {
        player_name: cli.name,
        base_asset: cli.asset,
        ..Config::default()
    };

    let session = match cli.seed {
        Some(seed) => Session::with_rng(config, StdRng::seed_from_u64(seed)),
        None => Session::new(config),
    };

    let prices = Prices::new(cli.btc_usd, cli.eth_usd);
    if prices.is_empty() {
        warn!("No reference prices, the portfolio value will not be estimated");
    }

    terminal::run(session, prices)
}
