// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Heads-up game session between a player and a bot.
use log::info;
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

use rialo_eval::payout_multiplier;

use crate::{
    poker::{Asset, Chips, Deck, Hand, RankTuple},
    prices::Prices,
};

/// Game session errors.
#[derive(Debug, Error)]
pub enum GameError {
    /// Fold requested without a hand on the table.
    #[error("no hand to fold")]
    NoHandToFold,
    /// The asset name is not known.
    #[error("unknown asset '{0}', expected BTC or ETH")]
    UnknownAsset(String),
    /// Cards dealing or hand error.
    #[error(transparent)]
    Cards(#[from] rialo_cards::Error),
}

/// The player name when none is given.
pub const DEFAULT_PLAYER_NAME: &str = "@you";

/// Names the bot picks from at the start of a session.
static BOT_NAMES: &[&str] = &[
    "Nova Quinn",
    "Lex Carter",
    "Asha Rami",
    "Ada Solace",
    "Rian Vale",
    "Eli Navarro",
    "Mira Kade",
    "Jonas Hale",
    "Seren Lyra",
    "Kai Mercer",
    "Aidan Frost",
    "Naya Reeves",
    "Lena Kova",
    "Rafi Calder",
];

/// Session configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The player name, blank names become [DEFAULT_PLAYER_NAME].
    pub player_name: String,
    /// The asset hands are played for.
    pub base_asset: Asset,
    /// Chips each player starts with in each asset.
    pub starting_chips: Chips,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            base_asset: Asset::Btc,
            starting_chips: Session::STARTING_CHIPS,
        }
    }
}

/// A session player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// The player name.
    pub name: String,
    /// The player BTC chips.
    pub btc_chips: Chips,
    /// The player ETH chips.
    pub eth_chips: Chips,
}

impl Player {
    fn new(name: String, chips: Chips) -> Self {
        Self {
            name,
            btc_chips: chips,
            eth_chips: chips,
        }
    }

    /// The player chips for an asset.
    pub fn chips(&self, asset: Asset) -> Chips {
        match asset {
            Asset::Btc => self.btc_chips,
            Asset::Eth => self.eth_chips,
        }
    }

    fn chips_mut(&mut self, asset: Asset) -> &mut Chips {
        match asset {
            Asset::Btc => &mut self.btc_chips,
            Asset::Eth => &mut self.eth_chips,
        }
    }

    /// The USD value of this player chips.
    pub fn portfolio_value(&self, prices: &Prices) -> f64 {
        prices.value(Asset::Btc, self.btc_chips) + prices.value(Asset::Eth, self.eth_chips)
    }
}

/// Who won a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandResult {
    /// The player hand is stronger.
    PlayerWins,
    /// The bot hand is stronger.
    BotWins,
    /// Both hands have the same rank, no chips move.
    Tie,
}

/// The outcome of a dealt hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandOutcome {
    /// The player cards.
    pub player_hand: Hand,
    /// The bot cards.
    pub bot_hand: Hand,
    /// The player hand rank.
    pub player_rank: RankTuple,
    /// The bot hand rank.
    pub bot_rank: RankTuple,
    /// The hand winner.
    pub result: HandResult,
    /// The hand payout, no chips move on a tie.
    pub delta: Chips,
}

/// A game session.
///
/// The session owns both players stacks and the hands on the table, it lives
/// from the session start until the player leaves or starts a new one.
#[derive(Debug)]
pub struct Session {
    config: Config,
    player: Player,
    bot: Player,
    hands_played: u32,
    player_hand: Option<Hand>,
    bot_hand: Option<Hand>,
    rng: StdRng,
}

impl Session {
    /// Default chips for each player and asset.
    pub const STARTING_CHIPS: Chips = Chips::new(100);

    /// The chips lost by the player on a fold.
    pub const FOLD_LOSS: Chips = Chips::new(5);

    /// Starts a new session.
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Starts a new session with user initialized randomness.
    pub fn with_rng(mut config: Config, mut rng: StdRng) -> Self {
        let name = config.player_name.trim();
        config.player_name = if name.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            name.to_string()
        };

        let bot_name = Self::pick_bot_name(&mut rng);
        let session = Self {
            player: Player::new(config.player_name.clone(), config.starting_chips),
            bot: Player::new(bot_name, config.starting_chips),
            config,
            hands_played: 0,
            player_hand: None,
            bot_hand: None,
            rng,
        };

        info!(
            "New session started. Player={}, Bot={}, base={}",
            session.player.name, session.bot.name, session.config.base_asset
        );

        session
    }

    /// Starts over with a new bot, fresh stacks and no hands played.
    pub fn restart(&mut self) {
        let bot_name = Self::pick_bot_name(&mut self.rng);
        self.player = Player::new(self.config.player_name.clone(), self.config.starting_chips);
        self.bot = Player::new(bot_name, self.config.starting_chips);
        self.hands_played = 0;
        self.clear_hands();

        info!(
            "Session restarted. Player={}, Bot={}, base={}",
            self.player.name, self.bot.name, self.config.base_asset
        );
    }

    /// Deals a new hand and settles it.
    ///
    /// A fresh deck is shuffled for each hand, the player gets the first five
    /// cards and the bot the next five. The winner gets the hand payout and the
    /// loser pays it in the base asset, the loser chips floor at zero.
    pub fn deal_hand(&mut self) -> Result<HandOutcome, GameError> {
        let mut deck = Deck::new_and_shuffled(&mut self.rng);
        let player_hand = Hand::new(deck.deal(Hand::SIZE)?)?;
        let bot_hand = Hand::new(deck.deal(Hand::SIZE)?)?;

        self.player_hand = Some(player_hand);
        self.bot_hand = Some(bot_hand);
        self.hands_played += 1;

        let player_rank = RankTuple::eval(&player_hand);
        let bot_rank = RankTuple::eval(&bot_hand);
        let delta = Chips::new(payout_multiplier(&player_rank, &bot_rank));
        let asset = self.config.base_asset;

        let result = match player_rank.cmp(&bot_rank) {
            Ordering::Greater => {
                transfer(&mut self.player, &mut self.bot, asset, delta);
                info!(
                    "Player {} wins. {} > {}. +{delta} {asset} chips.",
                    self.player.name,
                    player_rank.describe(),
                    bot_rank.describe()
                );
                HandResult::PlayerWins
            }
            Ordering::Less => {
                transfer(&mut self.bot, &mut self.player, asset, delta);
                info!(
                    "Bot {} wins. {} > {}. -{delta} {asset} chips.",
                    self.bot.name,
                    bot_rank.describe(),
                    player_rank.describe()
                );
                HandResult::BotWins
            }
            Ordering::Equal => {
                info!(
                    "Tie between {} and {}. {}.",
                    self.player.name,
                    self.bot.name,
                    player_rank.describe()
                );
                HandResult::Tie
            }
        };

        Ok(HandOutcome {
            player_hand,
            bot_hand,
            player_rank,
            bot_rank,
            result,
            delta: if result == HandResult::Tie {
                Chips::ZERO
            } else {
                delta
            },
        })
    }

    /// The player folds the hand on the table and pays [Session::FOLD_LOSS] to
    /// the bot, returns the chips lost.
    pub fn fold(&mut self) -> Result<Chips, GameError> {
        if self.player_hand.is_none() {
            return Err(GameError::NoHandToFold);
        }

        let asset = self.config.base_asset;
        transfer(&mut self.bot, &mut self.player, asset, Self::FOLD_LOSS);
        self.clear_hands();

        info!(
            "Player {} folded. Lost {} {asset} chips.",
            self.player.name,
            Self::FOLD_LOSS
        );

        Ok(Self::FOLD_LOSS)
    }

    /// The human player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The bot player.
    pub fn bot(&self) -> &Player {
        &self.bot
    }

    /// The player cards on the table.
    pub fn player_hand(&self) -> Option<&Hand> {
        self.player_hand.as_ref()
    }

    /// The bot cards on the table.
    pub fn bot_hand(&self) -> Option<&Hand> {
        self.bot_hand.as_ref()
    }

    /// The asset hands are played for.
    pub fn base_asset(&self) -> Asset {
        self.config.base_asset
    }

    /// Number of hands dealt in this session.
    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }

    /// The USD value of the player chips.
    pub fn portfolio_value(&self, prices: &Prices) -> f64 {
        self.player.portfolio_value(prices)
    }

    fn clear_hands(&mut self) {
        self.player_hand = None;
        self.bot_hand = None;
    }

    fn pick_bot_name(rng: &mut StdRng) -> String {
        BOT_NAMES.choose(rng).copied().unwrap_or("Bot").to_string()
    }
}

/// Moves chips from the loser to the winner, the loser stack floors at zero.
fn transfer(winner: &mut Player, loser: &mut Player, asset: Asset, chips: Chips) {
    *winner.chips_mut(asset) += chips;
    *loser.chips_mut(asset) -= chips;
}
