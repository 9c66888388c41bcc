// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards, a card is a rank and a suit
//! dealt to an [Owner], either a player or the community:
//!
//! ```
//! # use showdown_cards::{Card, PlayerId, Rank, Suit};
//! let p1 = PlayerId::new(1).unwrap();
//! let ah = Card::hole(Rank::Ace, Suit::Hearts, p1);
//! let kd = Card::community(Rank::King, Suit::Diamonds);
//! assert_eq!("KD".parse::<Card>().unwrap(), kd);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to deal a hole card to a player and a card to the board:
//!
//! ```
//! # use showdown_cards::{Deck, Owner, PlayerId};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let p1 = PlayerId::new(1).unwrap();
//! let hole = deck.deal(Owner::Player(p1)).unwrap();
//! let board = deck.deal(Owner::Community).unwrap();
//! assert_ne!(hole, board);
//! assert_eq!(deck.count(), 50);
//! ```
//!
//! to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Owner, ParseCardError, PlayerId, Rank, Suit};
