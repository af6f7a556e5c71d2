// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{self, Color, Stylize},
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use log::LevelFilter;
use std::{collections::VecDeque, io};

use rialo_core::{
    GameError, HandResult, Player, Session,
    poker::{Asset, Hand},
    prices::Prices,
};

/// Number of log lines shown at the bottom of the screen.
const LOG_LINES: usize = 8;

/// Runs the terminal loop.
pub fn run(session: Session, prices: Prices) -> Result<()> {
    let mut table = Table::new(session, prices);

    // Log lines on stderr would draw over the table.
    let _quiet = QuietLogs::new();
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let res = event_loop(&mut stdout, &mut table);

    execute!(
        stdout,
        Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        cursor::Show
    )?;
    disable_raw_mode()?;

    res
}

/// Turns logging off until dropped.
struct QuietLogs(LevelFilter);

impl QuietLogs {
    fn new() -> Self {
        let level = log::max_level();
        log::set_max_level(LevelFilter::Off);
        Self(level)
    }
}

impl Drop for QuietLogs {
    fn drop(&mut self) {
        log::set_max_level(self.0);
    }
}

fn event_loop(w: &mut impl io::Write, table: &mut Table) -> Result<()> {
    print_table(w, table)?;

    loop {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            if !table.handle_key(code)? {
                break;
            }

            print_table(w, table)?;
        }
    }

    Ok(())
}

/// The log line tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Win,
    Loss,
    Info,
}

impl Tag {
    fn color(&self) -> Color {
        match self {
            Tag::Win => Color::Green,
            Tag::Loss => Color::Red,
            Tag::Info => Color::Yellow,
        }
    }
}

#[derive(Debug)]
struct LogLine {
    tag: Tag,
    scope: &'static str,
    message: String,
}

/// The table view state.
#[derive(Debug)]
struct Table {
    session: Session,
    prices: Prices,
    phase: String,
    result: Option<(Tag, String)>,
    summary: String,
    log: VecDeque<LogLine>,
}

impl Table {
    fn new(session: Session, prices: Prices) -> Self {
        let mut table = Self {
            session,
            prices,
            phase: String::new(),
            result: None,
            summary: String::new(),
            log: VecDeque::with_capacity(LOG_LINES),
        };

        table.push_log(
            Tag::Info,
            "Engine",
            "Rialo Crypto Poker initialized. Press d to deal a hand.".to_string(),
        );
        table.session_started();
        table
    }

    /// Handles a key press, returns false when the player quits.
    fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        match code {
            KeyCode::Char('d') => self.deal()?,
            KeyCode::Char('f') => self.fold()?,
            KeyCode::Char('n') => {
                self.session.restart();
                self.session_started();
            }
            KeyCode::Char('q') | KeyCode::Esc => return Ok(false),
            _ => {}
        }

        Ok(true)
    }

    fn session_started(&mut self) {
        self.phase = "Session live. Press d to deal a new hand.".to_string();
        self.result = None;
        self.summary.clear();

        let message = format!(
            "New session started. Player={}, Bot={}, base={}.",
            self.session.player().name,
            self.session.bot().name,
            self.session.base_asset()
        );
        self.push_log(Tag::Info, "Session", message);
    }

    fn deal(&mut self) -> Result<()> {
        let outcome = self.session.deal_hand()?;
        let base = self.session.base_asset();
        let delta = outcome.delta;
        let player_desc = outcome.player_rank.describe();
        let bot_desc = outcome.bot_rank.describe();
        let player_name = self.session.player().name.clone();
        let bot_name = self.session.bot().name.clone();

        match outcome.result {
            HandResult::PlayerWins => {
                self.phase = "Block confirmed. You win this hand.".to_string();
                self.result = Some((Tag::Win, format!("You win +{delta} {base} chips.")));
                self.summary = format!("{player_desc} beats {bot_desc}.");
                self.push_log(
                    Tag::Win,
                    "Hand",
                    format!(
                        "Player {player_name} wins. {player_desc} > {bot_desc}. +{delta} {base} chips."
                    ),
                );
            }
            HandResult::BotWins => {
                self.phase = "Bot found a better route. You lose this hand.".to_string();
                self.result = Some((Tag::Loss, format!("You lose -{delta} {base} chips.")));
                self.summary = format!("{bot_desc} beats {player_desc}.");
                self.push_log(
                    Tag::Loss,
                    "Hand",
                    format!("Bot {bot_name} wins. {bot_desc} > {player_desc}. -{delta} {base} chips."),
                );
            }
            HandResult::Tie => {
                self.phase = "Perfect balance. Pot is pushed.".to_string();
                self.result = Some((Tag::Info, "Tie. No chips move this hand.".to_string()));
                self.summary = format!("{player_desc} equals {bot_desc}.");
                self.push_log(
                    Tag::Info,
                    "Hand",
                    format!("Tie between {player_name} and {bot_name}. {player_desc}."),
                );
            }
        }

        Ok(())
    }

    fn fold(&mut self) -> Result<()> {
        let loss = match self.session.fold() {
            Ok(loss) => loss,
            // Nothing to fold until a hand is dealt.
            Err(GameError::NoHandToFold) => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        let base = self.session.base_asset();
        self.phase = "Fold registered. Press d to continue.".to_string();
        self.result = Some((Tag::Loss, "You folded. Bot scoops a small pot.".to_string()));
        self.summary = "You can always fight the next block.".to_string();

        let message = format!(
            "Player {} folded. Lost {loss} {base} chips.",
            self.session.player().name
        );
        self.push_log(Tag::Loss, "Fold", message);

        Ok(())
    }

    fn push_log(&mut self, tag: Tag, scope: &'static str, message: String) {
        if self.log.len() == LOG_LINES {
            self.log.pop_front();
        }

        self.log.push_back(LogLine {
            tag,
            scope,
            message,
        });
    }
}

fn print_table(w: &mut impl io::Write, table: &Table) -> Result<()> {
    execute!(w, Clear(ClearType::All))?;

    let session = &table.session;
    let base = session.base_asset();

    queue!(
        w,
        cursor::MoveTo(0, 0),
        style::PrintStyledContent(
            format!("Rialo Crypto Poker ({base})   [d] deal  [f] fold  [n] new session  [q] quit")
                .bold()
        )
    )?;

    print_player(w, session.bot(), session.bot_hand(), 2)?;
    print_player(w, session.player(), session.player_hand(), 3)?;

    queue!(
        w,
        cursor::MoveTo(0, 5),
        style::Print(&table.phase),
        cursor::MoveTo(0, 6)
    )?;

    if let Some((tag, text)) = &table.result {
        queue!(w, style::PrintStyledContent(text.as_str().with(tag.color())))?;
    }

    queue!(
        w,
        cursor::MoveTo(0, 7),
        style::Print(&table.summary),
        cursor::MoveTo(0, 8),
        style::Print(format!("Hands played: {}", session.hands_played())),
        cursor::MoveTo(0, 10),
        style::Print(prices_line(session, &table.prices))
    )?;

    for (line, row) in table.log.iter().zip(12..) {
        queue!(
            w,
            cursor::MoveTo(0, row),
            style::PrintStyledContent(format!("{:<8}", line.scope).with(line.tag.color())),
            style::Print(&line.message)
        )?;
    }

    w.flush()?;

    Ok(())
}

fn print_player(w: &mut impl io::Write, p: &Player, hand: Option<&Hand>, row: u16) -> Result<()> {
    let text = format!(
        "{:<14.14}|{:>6} BTC |{:>6} ETH | ",
        p.name,
        p.btc_chips.to_string(),
        p.eth_chips.to_string(),
    );

    queue!(
        w,
        cursor::MoveTo(0, row),
        style::PrintStyledContent(text.as_str().dark_green())
    )?;

    match hand {
        Some(hand) => {
            for card in hand.iter() {
                let color = if card.suit().is_red() {
                    Color::Red
                } else {
                    Color::White
                };
                queue!(
                    w,
                    style::PrintStyledContent(format!("{:>3} ", card.to_string()).with(color))
                )?;
            }
        }
        None => queue!(w, style::Print("▒▒▒ ".repeat(Hand::SIZE)))?,
    }

    Ok(())
}

fn prices_line(session: &Session, prices: &Prices) -> String {
    let price = |asset: Asset| match prices.price(asset) {
        Some(usd) => format!("${usd:.2}"),
        None => "N/A".to_string(),
    };

    if prices.is_empty() {
        format!(
            "BTC {}  ETH {}  (no prices, portfolio not estimated)",
            price(Asset::Btc),
            price(Asset::Eth)
        )
    } else {
        format!(
            "BTC {}  ETH {}  Portfolio ${:.2}",
            price(Asset::Btc),
            price(Asset::Eth),
            session.portfolio_value(prices)
        )
    }
}
