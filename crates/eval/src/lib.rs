// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Finds the best five cards hand for each player at a table, where players
//! share the community cards, and resolves the showdown winners breaking ties
//! with the kickers.
//!
//! Each player gets a [Grid] with the cards they can use, a detector for each
//! hand category scans the grid for the best hand of that category, and the
//! best [Hand] is the one of the strongest category the player can make:
//!
//! ```
//! # use showdown_eval::*;
//! let p1 = PlayerId::new(1).unwrap();
//! let p2 = PlayerId::new(2).unwrap();
//!
//! let cards = [
//!     Card::community(Rank::Six, Suit::Spades),
//!     Card::community(Rank::Six, Suit::Clubs),
//!     Card::community(Rank::Seven, Suit::Clubs),
//!     Card::community(Rank::Eight, Suit::Clubs),
//!     Card::community(Rank::Queen, Suit::Diamonds),
//!     Card::hole(Rank::Five, Suit::Clubs, p1),
//!     Card::hole(Rank::Nine, Suit::Clubs, p1),
//!     Card::hole(Rank::Six, Suit::Hearts, p2),
//!     Card::hole(Rank::Six, Suit::Diamonds, p2),
//! ];
//!
//! let table = Table::new(&cards);
//! assert_eq!(table.best_hand_rank(p1), Ok(Some(HandRank::StraightFlush)));
//! assert_eq!(table.best_hand_rank(p2), Ok(Some(HandRank::FourOfAKind)));
//! assert_eq!(table.winners(), Ok(vec![p1]));
//! ```
//!
//! The **`parallel`** feature evaluates the players hands on parallel threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod detect;
pub mod grid;
pub mod hand;
pub mod showdown;

pub use grid::{Grid, Marker};
pub use hand::{Hand, HandRank};
pub use showdown::{EvalError, Table};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Owner, PlayerId, Rank, Suit};
