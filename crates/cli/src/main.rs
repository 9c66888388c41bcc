// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, deals a table and shows the players hands and the winners.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};

use showdown_eval::{Card, Deck, Owner, PlayerId, Table};

/// Number of hole cards dealt to each player.
const HOLE_CARDS: usize = 2;

/// Number of community cards.
const BOARD_CARDS: usize = 5;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players when no hands are given.
    #[clap(long, short, default_value_t = 6, value_parser = clap::value_parser!(u8).range(2..=23))]
    players: u8,
    /// The deck shuffle seed, random if not given.
    #[clap(long, short)]
    seed: Option<u64>,
    /// The community cards (eg. "6S 6C 7C 8C QD"), dealt from the deck if not given.
    #[clap(long, short)]
    board: Option<String>,
    /// A player hole cards (eg. "5C 9C"), repeat for each player.
    #[clap(long = "hand")]
    hands: Vec<String>,
    /// Print the cards grid of each player.
    #[clap(long, short)]
    grids: bool,
    /// Enable debug logging.
    #[clap(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(&cli) {
        error!("{e:#}");
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cards = deal(cli)?;
    let table = Table::try_new(&cards)?;

    println!("{table}");

    for &player in table.players() {
        if cli.grids {
            println!("Player {player} cards\n{}", table.grid(player)?);
        }

        match table.best_hand(player)? {
            Some(hand) => println!("Player {player}: {hand}"),
            None => println!("Player {player}: no valid hand"),
        }
    }

    let winners = table.winners()?;
    let names = winners
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    if winners.len() > 1 {
        println!("\nSplit pot between players {names}");
    } else {
        println!("\nThe game is won by player {names}");
    }

    Ok(())
}

/// Deals the given cards and completes the table from a shuffled deck.
fn deal(cli: &Cli) -> Result<Vec<Card>> {
    let board = cli
        .board
        .as_deref()
        .map(|board| parse_cards(board, Owner::Community))
        .transpose()?;

    let mut hands = Vec::with_capacity(cli.hands.len());
    for (idx, hand) in cli.hands.iter().enumerate() {
        let player = player_id(idx + 1)?;
        hands.push(parse_cards(hand, Owner::Player(player))?);
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("Shuffling deck with seed {seed}");

    let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(seed));
    for card in board.iter().chain(&hands).flatten() {
        deck.remove(*card);
    }

    let mut cards = hands.into_iter().flatten().collect::<Vec<_>>();
    if cli.hands.is_empty() {
        for idx in 0..cli.players as usize {
            let owner = Owner::Player(player_id(idx + 1)?);
            for _ in 0..HOLE_CARDS {
                cards.push(deck.deal(owner).context("The deck is empty")?);
            }
        }
    }

    match board {
        Some(board) => cards.extend(board),
        None => {
            for _ in 0..BOARD_CARDS {
                cards.push(deck.deal(Owner::Community).context("The deck is empty")?);
            }
        }
    }

    Ok(cards)
}

/// Parses space separated cards dealt to the given owner.
fn parse_cards(cards: &str, owner: Owner) -> Result<Vec<Card>> {
    cards
        .split_whitespace()
        .map(|s| {
            s.parse::<Card>()
                .map(|card| card.with_owner(owner))
                .with_context(|| format!("Invalid card {s:?}"))
        })
        .collect()
}

fn player_id(id: usize) -> Result<PlayerId> {
    u32::try_from(id)
        .ok()
        .and_then(PlayerId::new)
        .with_context(|| format!("Invalid player id {id}"))
}
