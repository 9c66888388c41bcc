// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hands and their categories.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::{Card, Owner, PlayerId};

use crate::{detect::DETECTORS, grid::Grid};

const HAND_SIZE: usize = 5;

/// The hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush, including the royal flush.
    StraightFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// A five cards poker hand.
///
/// The cards are ordered by significance for the hand category, so hands are
/// compared first by category and then card by card using the rank values,
/// with the Ace always high:
///
/// ```
/// # use showdown_eval::*;
/// let parse = |s: &str| {
///     s.split_whitespace()
///         .map(|c| c.parse::<Card>().unwrap())
///         .collect::<Vec<_>>()
/// };
///
/// let kings = Hand::eval(&parse("KS KD 9C 7H 2C")).unwrap();
/// let queens = Hand::eval(&parse("QS QD AC JH 8C")).unwrap();
/// assert_eq!(kings.rank(), HandRank::OnePair);
/// assert!(kings > queens);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hand {
    rank: HandRank,
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Number of cards in a hand.
    pub const SIZE: usize = HAND_SIZE;

    /// Creates a hand from a category and its cards in significance order.
    pub fn new(rank: HandRank, cards: [Card; Hand::SIZE]) -> Self {
        Self { rank, cards }
    }

    /// Returns the best hand in a player grid.
    ///
    /// Categories are tried from the strongest and the first one the player
    /// can make is the best hand. Returns `None` only if the player has less
    /// than five cards.
    pub fn best(grid: &Grid) -> Option<Hand> {
        DETECTORS
            .iter()
            .find_map(|&(rank, detect)| detect(grid).map(|cards| Hand::new(rank, cards)))
    }

    /// Returns the best hand using all the given cards.
    ///
    /// Every card is treated as usable regardless of its owner, the returned
    /// cards are community cards.
    pub fn eval(cards: &[Card]) -> Option<Hand> {
        let cards = cards
            .iter()
            .map(|c| c.with_owner(Owner::Community))
            .collect::<Vec<_>>();
        Self::best(&Grid::from_cards(PlayerId::FIRST, &cards))
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The hand cards in significance order.
    pub fn cards(&self) -> &[Card; Hand::SIZE] {
        &self.cards
    }

    /// The rank values of the cards used for comparing hands.
    pub fn values(&self) -> [u8; Hand::SIZE] {
        self.cards.map(|c| c.rank().value())
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.values().cmp(&other.values()))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank)?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }

        Ok(())
    }
}
