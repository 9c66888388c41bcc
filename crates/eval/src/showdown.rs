// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown between players sharing the community cards.
use ahash::{AHashMap, AHashSet};
use log::debug;
use std::fmt;
use thiserror::Error;

use showdown_cards::{Card, Owner, PlayerId};

use crate::{
    detect::detector,
    grid::{Grid, Marker, write_table},
    hand::{Hand, HandRank},
};

/// Showdown errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// No card was dealt to any player.
    #[error("no players at the table")]
    NoPlayers,
    /// No player can make a five cards hand.
    #[error("no player has a valid hand")]
    NoValidHand,
    /// The player has no cards at the table.
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
    /// The same card was dealt more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// The cards dealt at a table, with one availability grid per player.
///
/// Players are the owners of the hole cards, each player can use its own hole
/// cards and all the community cards. Build a table and then find the winners:
///
/// ```
/// # use showdown_eval::*;
/// let p1 = PlayerId::new(1).unwrap();
/// let p2 = PlayerId::new(2).unwrap();
///
/// let mut cards = ["KS", "KD", "7H", "4C", "2S"]
///     .iter()
///     .map(|s| s.parse::<Card>().unwrap())
///     .collect::<Vec<_>>();
/// cards.push(Card::hole(Rank::Ace, Suit::Hearts, p1));
/// cards.push(Card::hole(Rank::Trey, Suit::Diamonds, p1));
/// cards.push(Card::hole(Rank::Queen, Suit::Hearts, p2));
/// cards.push(Card::hole(Rank::Trey, Suit::Clubs, p2));
///
/// let table = Table::try_new(&cards).unwrap();
/// assert_eq!(table.best_hand_rank(p1), Ok(Some(HandRank::OnePair)));
/// assert_eq!(table.winners(), Ok(vec![p1]));
/// ```
///
/// Cards are not validated by [Table::new], a card dealt twice to different
/// owners gives an undefined result, use [Table::try_new] to reject them.
#[derive(Debug, Clone)]
pub struct Table {
    players: Vec<PlayerId>,
    grids: AHashMap<PlayerId, Grid>,
}

impl Table {
    /// Creates a table from the dealt cards.
    ///
    /// All hole cards are marked first, then each community card is marked on
    /// every player grid.
    pub fn new(cards: &[Card]) -> Self {
        let mut grids = AHashMap::default();

        for card in cards {
            if let Owner::Player(player) = card.owner() {
                grids
                    .entry(player)
                    .or_insert_with(|| Grid::new(player))
                    .mark(card);
            }
        }

        for card in cards.iter().filter(|c| c.owner() == Owner::Community) {
            grids.values_mut().for_each(|grid: &mut Grid| grid.mark(card));
        }

        let mut players = grids.keys().copied().collect::<Vec<_>>();
        players.sort();

        debug!("Table with {} cards and {} players", cards.len(), players.len());

        Self { players, grids }
    }

    /// Creates a table from the dealt cards, rejecting duplicate cards.
    pub fn try_new(cards: &[Card]) -> Result<Self, EvalError> {
        let mut seen = AHashSet::with_capacity(cards.len());
        if let Some(card) = cards.iter().find(|&&card| !seen.insert(card)) {
            return Err(EvalError::DuplicateCard(*card));
        }

        Ok(Self::new(cards))
    }

    /// The players sorted by id.
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    /// The player cards grid.
    pub fn grid(&self, player: PlayerId) -> Result<&Grid, EvalError> {
        self.grids
            .get(&player)
            .ok_or(EvalError::UnknownPlayer(player))
    }

    /// Checks if a player can make a hand of the given category.
    ///
    /// Returns the best hand of that category, even if the player can make a
    /// stronger one.
    pub fn detect(&self, player: PlayerId, rank: HandRank) -> Result<Option<Hand>, EvalError> {
        let grid = self.grid(player)?;
        Ok(detector(rank)(grid).map(|cards| Hand::new(rank, cards)))
    }

    /// The player best hand, `None` if the player has less than five cards.
    pub fn best_hand(&self, player: PlayerId) -> Result<Option<Hand>, EvalError> {
        self.grid(player).map(Hand::best)
    }

    /// The player best hand category, `None` if the player has less than five cards.
    pub fn best_hand_rank(&self, player: PlayerId) -> Result<Option<HandRank>, EvalError> {
        Ok(self.best_hand(player)?.map(|hand| hand.rank()))
    }

    /// The best hand of each player in players order.
    #[cfg(not(feature = "parallel"))]
    pub fn best_hands(&self) -> Vec<(PlayerId, Option<Hand>)> {
        self.players
            .iter()
            .map(|&player| (player, self.grids.get(&player).and_then(Hand::best)))
            .collect()
    }

    /// The best hand of each player in players order.
    ///
    /// Each player hand is evaluated on its own thread.
    #[cfg(feature = "parallel")]
    pub fn best_hands(&self) -> Vec<(PlayerId, Option<Hand>)> {
        std::thread::scope(|s| {
            let tasks = self
                .players
                .iter()
                .map(|&player| {
                    let grid = self.grids.get(&player);
                    (player, s.spawn(move || grid.and_then(Hand::best)))
                })
                .collect::<Vec<_>>();

            tasks
                .into_iter()
                .map(|(player, task)| {
                    let hand = task
                        .join()
                        .unwrap_or_else(|e| std::panic::resume_unwind(e));
                    (player, hand)
                })
                .collect()
        })
    }

    /// Returns the players that win the showdown.
    ///
    /// The winners are the players with the highest hand category, ties are
    /// broken comparing the hands card by card. More than one winner is a split
    /// pot. Players with less than five cards cannot win.
    pub fn winners(&self) -> Result<Vec<PlayerId>, EvalError> {
        if self.players.is_empty() {
            return Err(EvalError::NoPlayers);
        }

        let hands = self.best_hands();
        for (player, hand) in &hands {
            match hand {
                Some(hand) => debug!("Player {player} has {hand}"),
                None => debug!("Player {player} has no valid hand"),
            }
        }

        let top = hands
            .iter()
            .filter_map(|(_, hand)| hand.map(|h| h.rank()))
            .max()
            .ok_or(EvalError::NoValidHand)?;

        let mut contenders = hands
            .iter()
            .filter_map(|(player, hand)| {
                hand.filter(|h| h.rank() == top)
                    .map(|h| (*player, h.values()))
            })
            .collect::<Vec<_>>();

        for pos in 0..Hand::SIZE {
            if contenders.len() == 1 {
                break;
            }

            let Some(high) = contenders.iter().map(|(_, values)| values[pos]).max() else {
                break;
            };

            contenders.retain(|(_, values)| values[pos] == high);
            debug!(
                "Card {} keeps {} contenders with value {high}",
                pos + 1,
                contenders.len()
            );
        }

        Ok(contenders.into_iter().map(|(player, _)| player).collect())
    }

    /// All players ordered from the strongest hand to the weakest.
    ///
    /// Players with equal hands keep the players order and players with no
    /// valid hand are last.
    pub fn ranking(&self) -> Vec<(PlayerId, Option<Hand>)> {
        let mut hands = self.best_hands();
        hands.sort_by(|(_, h1), (_, h2)| h2.cmp(h1));
        hands
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(f, |suit, column| {
            let mut label = ".".to_string();
            for grid in self.players.iter().filter_map(|p| self.grids.get(p)) {
                match grid.marker(suit, column) {
                    Marker::OwnedBy(id) => return id.to_string(),
                    Marker::Community => label = "B".to_string(),
                    Marker::Unavailable => {}
                }
            }

            label
        })
    }
}
