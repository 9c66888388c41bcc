// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Per player cards availability grid.
//!
//! A grid has one row per suit and one column per rank, with the Ace stored
//! twice, at column 0 for Ace-low straights and at column 13 for everything
//! else:
//!
//! ```text
//!        A  2  3  4  5  6  7  8  9  T  J  Q  K  A
//!     C  .  .  .  .  1  B  B  B  1  .  .  .  .  .
//!     D  .  .  .  .  .  .  .  .  .  .  .  B  .  .
//!     H  1  .  .  .  .  .  .  .  .  .  .  .  .  1
//!     S  .  .  .  .  .  B  .  .  .  .  .  .  .  .
//! ```
//!
//! Both Ace columns always hold the same [Marker], and a grid never holds
//! another player's cards.
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Card, Owner, PlayerId, Rank, Suit};

/// Number of grid rows, one per suit.
pub const ROWS: usize = 4;

/// Number of grid columns, Ace, Deuce..King, Ace.
pub const COLUMNS: usize = 14;

/// Availability of a card to the grid player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    /// The player cannot use this card.
    #[default]
    Unavailable,
    /// A community card.
    Community,
    /// A hole card owned by the player.
    OwnedBy(PlayerId),
}

/// The cards a player can use to make a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    player: PlayerId,
    cells: [[Marker; COLUMNS]; ROWS],
}

impl Grid {
    /// Creates an empty grid for a player.
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            cells: [[Marker::Unavailable; COLUMNS]; ROWS],
        }
    }

    /// Creates a grid for a player from dealt cards.
    ///
    /// The player hole cards are marked first and the community cards are
    /// overlaid on top, cards dealt to other players are ignored.
    pub fn from_cards(player: PlayerId, cards: &[Card]) -> Self {
        let mut grid = Self::new(player);

        cards
            .iter()
            .filter(|c| c.owner() == Owner::Player(player))
            .for_each(|c| grid.mark(c));

        cards
            .iter()
            .filter(|c| c.owner() == Owner::Community)
            .for_each(|c| grid.mark(c));

        grid
    }

    /// The player this grid belongs to.
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Marks a card as available, mirroring the Ace on both Ace columns.
    pub(crate) fn mark(&mut self, card: &Card) {
        let marker = match card.owner() {
            Owner::Community => Marker::Community,
            Owner::Player(id) if id == self.player => Marker::OwnedBy(id),
            Owner::Player(_) => return,
        };

        let row = &mut self.cells[card.suit().row()];
        row[card.rank().column()] = marker;
        if card.rank() == Rank::Ace {
            row[Rank::ACE_LOW] = marker;
        }
    }

    /// The marker at a suit and column, out of range columns are unavailable.
    pub fn marker(&self, suit: Suit, column: usize) -> Marker {
        self.cells[suit.row()]
            .get(column)
            .copied()
            .unwrap_or_default()
    }

    /// Checks if the player can use the card at a suit and column.
    #[inline]
    pub fn is_available(&self, suit: Suit, column: usize) -> bool {
        match self.marker(suit, column) {
            Marker::Unavailable => false,
            Marker::Community => true,
            Marker::OwnedBy(id) => id == self.player,
        }
    }

    /// Checks if the player can use any card at a column.
    pub fn is_column_available(&self, column: usize) -> bool {
        Suit::suits().any(|suit| self.is_available(suit, column))
    }

    /// The suits available at a column in suit order.
    pub fn available_suits(&self, column: usize) -> impl Iterator<Item = Suit> + '_ {
        Suit::suits().filter(move |&suit| self.is_available(suit, column))
    }

    /// The card at a suit and column if the player can use it.
    pub fn card_at(&self, suit: Suit, column: usize) -> Option<Card> {
        let owner = match self.marker(suit, column) {
            Marker::Unavailable => return None,
            Marker::Community => Owner::Community,
            Marker::OwnedBy(id) => Owner::Player(id),
        };

        Rank::from_column(column).map(|rank| Card::new(rank, suit, owner))
    }

    /// All the cards available to the player, highest rank first.
    pub fn cards(&self) -> Vec<Card> {
        high_columns()
            .flat_map(|column| Suit::suits().filter_map(move |suit| self.card_at(suit, column)))
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(f, |suit, column| match self.marker(suit, column) {
            Marker::Unavailable => ".".to_string(),
            Marker::Community => "B".to_string(),
            Marker::OwnedBy(id) => id.to_string(),
        })
    }
}

/// Columns from Ace-high down to Deuce, each rank visited once.
pub(crate) fn high_columns() -> impl Iterator<Item = usize> {
    (1..=Rank::ACE_HIGH).rev()
}

/// Writes a 4x14 table with a ranks header and one row per suit.
pub(crate) fn write_table<F>(f: &mut fmt::Formatter<'_>, cell: F) -> fmt::Result
where
    F: Fn(Suit, usize) -> String,
{
    write!(f, " ")?;
    for column in 0..COLUMNS {
        if let Some(rank) = Rank::from_column(column) {
            write!(f, "{rank:>3}")?;
        }
    }
    writeln!(f)?;

    for suit in Suit::suits() {
        write!(f, "{suit}")?;
        for column in 0..COLUMNS {
            write!(f, "{:>3}", cell(suit, column))?;
        }
        writeln!(f)?;
    }

    Ok(())
}
