// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    hash::{Hash, Hasher},
    num::NonZeroU32,
    str::FromStr,
};
use thiserror::Error;

/// Error returned when a card label cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The rank label is not one of 2..10, T, J, Q, K, A.
    #[error("invalid rank {0:?}")]
    Rank(String),
    /// The suit label is not one of C, D, H, S.
    #[error("invalid suit {0:?}")]
    Suit(String),
    /// The card is too short to hold a rank and a suit.
    #[error("invalid card {0:?}")]
    Card(String),
}

/// A player identifier, always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(NonZeroU32);

impl PlayerId {
    /// The lowest player id.
    pub const FIRST: PlayerId = PlayerId(NonZeroU32::MIN);

    /// Creates a player id, returns `None` for zero.
    pub fn new(id: u32) -> Option<PlayerId> {
        NonZeroU32::new(id).map(PlayerId)
    }

    /// The integer id.
    pub fn id(&self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who a dealt card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// A shared board card usable by every player.
    Community,
    /// A hole card owned by one player.
    Player(PlayerId),
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Community => write!(f, "community"),
            Owner::Player(id) => write!(f, "player {id}"),
        }
    }
}

/// A Poker card.
///
/// A card carries the player it was dealt to, but two cards are equal when
/// they have the same rank and suit, whoever owns them:
///
/// ```
/// # use showdown_cards::{Card, Owner, PlayerId, Rank, Suit};
/// let p1 = PlayerId::new(1).unwrap();
/// let board = Card::community(Rank::Ace, Suit::Spades);
/// let hole = Card::hole(Rank::Ace, Suit::Spades, p1);
/// assert_eq!(board, hole);
/// assert_eq!(hole.owner(), Owner::Player(p1));
/// ```
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    owner: Owner,
}

impl Card {
    /// Creates a card given its rank, suit and owner.
    pub fn new(rank: Rank, suit: Suit, owner: Owner) -> Card {
        Card { rank, suit, owner }
    }

    /// Creates a community card.
    pub fn community(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit, Owner::Community)
    }

    /// Creates a hole card for a player.
    pub fn hole(rank: Rank, suit: Suit, player: PlayerId) -> Card {
        Card::new(rank, suit, Owner::Player(player))
    }

    /// Returns a copy of this card dealt to another owner.
    pub fn with_owner(self, owner: Owner) -> Card {
        Card { owner, ..self }
    }

    /// This card unique id in 0..52, independent of the owner.
    pub fn id(&self) -> u8 {
        self.suit.row() as u8 * 13 + self.rank as u8
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card owner.
    pub fn owner(&self) -> Owner {
        self.owner
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{}, {})", self.rank, self.suit, self.owner)
    }
}

/// Parses a community card from labels like `AS`, `10C` or `td`.
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .char_indices()
            .last()
            .map(|(idx, _)| idx)
            .filter(|&idx| idx > 0)
            .ok_or_else(|| ParseCardError::Card(s.to_string()))?;

        let (rank, suit) = s.split_at(split);
        Ok(Card::community(rank.parse()?, suit.parse()?))
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

const RANKS: [Rank; 13] = {
    use Rank::*;
    [
        Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
    ]
};

impl Rank {
    /// The Ace-low grid column.
    pub const ACE_LOW: usize = 0;

    /// The Ace-high grid column.
    pub const ACE_HIGH: usize = 13;

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        RANKS.into_iter()
    }

    /// The grid column for this rank, Deuce is 1 and Ace is 13.
    ///
    /// The Ace also lives at column [Rank::ACE_LOW], the caller is responsible
    /// for mirroring it there.
    pub fn column(&self) -> usize {
        *self as usize + 1
    }

    /// Maps a grid column back to its rank, both 0 and 13 are the Ace.
    pub fn from_column(column: usize) -> Option<Rank> {
        match column {
            Self::ACE_LOW => Some(Rank::Ace),
            1..=Self::ACE_HIGH => Some(RANKS[column - 1]),
            _ => None,
        }
    }

    /// The value used to compare ranks at showdown, the Ace is always high (13).
    pub fn value(&self) -> u8 {
        *self as u8 + 1
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "T",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        })
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::Rank(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
///
/// The discriminant is the suit row in a player cards grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
}

impl Suit {
    /// Returns all suits in row order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The grid row for this suit.
    pub fn row(&self) -> usize {
        *self as usize
    }

    /// Maps a grid row back to its suit.
    pub fn from_row(row: usize) -> Option<Suit> {
        Suit::suits().nth(row)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Spades => "S",
        })
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "C" => Ok(Suit::Clubs),
            "D" => Ok(Suit::Diamonds),
            "H" => Ok(Suit::Hearts),
            "S" => Ok(Suit::Spades),
            _ => Err(ParseCardError::Suit(s.to_string())),
        }
    }
}

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck to the given owner.
    pub fn deal(&mut self, owner: Owner) -> Option<Card> {
        self.cards.pop().map(|c| c.with_owner(owner))
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        // Positions of the current combination in lexicographic order.
        let mut pos = (0..k).collect::<Vec<_>>();
        let mut hand = pos.iter().map(|&p| self.cards[p]).collect::<Vec<_>>();

        loop {
            f(&hand);

            let Some(i) = (0..k).rev().find(|&i| pos[i] < n - k + i) else {
                break;
            };

            pos[i] += 1;
            for j in (i + 1)..k {
                pos[j] = pos[j - 1] + 1;
            }

            for j in i..k {
                hand[j] = self.cards[pos[j]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::community(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::StdRng;

    fn p(id: u32) -> PlayerId {
        PlayerId::new(id).unwrap()
    }

    #[test]
    fn card_to_string() {
        let c = Card::community(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::community(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::hole(Rank::Ten, Suit::Hearts, p(3));
        assert_eq!(c.to_string(), "TH");
        assert_eq!(format!("{c:?}"), "Card(TH, player 3)");

        // Labels honor width and alignment.
        assert_eq!(format!("{:>3}", Rank::Ace), "  A");
        assert_eq!(format!("{:<2}|", Rank::Ten), "T |");
        assert_eq!(format!("{:^3}", Suit::Hearts), " H ");
    }

    #[test]
    fn card_from_str() {
        let c = "AS".parse::<Card>().unwrap();
        assert_eq!(c, Card::community(Rank::Ace, Suit::Spades));
        assert_eq!(c.owner(), Owner::Community);

        assert_eq!("10c".parse::<Card>().unwrap().rank(), Rank::Ten);
        assert_eq!("TD".parse::<Card>().unwrap().rank(), Rank::Ten);
        assert_eq!(" 2h ".parse::<Card>().unwrap().suit(), Suit::Hearts);

        assert_eq!("S".parse::<Card>(), Err(ParseCardError::Card("S".into())));
        assert_eq!("1S".parse::<Card>(), Err(ParseCardError::Rank("1".into())));
        assert_eq!("AX".parse::<Card>(), Err(ParseCardError::Suit("X".into())));
    }

    #[test]
    fn card_identity_ignores_owner() {
        let mut cards = HashSet::default();
        cards.insert(Card::community(Rank::Queen, Suit::Clubs));
        cards.insert(Card::hole(Rank::Queen, Suit::Clubs, p(1)));
        cards.insert(Card::hole(Rank::Queen, Suit::Clubs, p(2)));
        assert_eq!(cards.len(), 1);

        assert_ne!(
            Card::community(Rank::Queen, Suit::Clubs),
            Card::community(Rank::Queen, Suit::Hearts)
        );
    }

    #[test]
    fn player_id_is_positive() {
        assert!(PlayerId::new(0).is_none());
        assert_eq!(p(7).id(), 7);
        assert_eq!(p(7).to_string(), "7");
    }

    #[test]
    fn rank_columns() {
        assert_eq!(Rank::Deuce.column(), 1);
        assert_eq!(Rank::King.column(), 12);
        assert_eq!(Rank::Ace.column(), Rank::ACE_HIGH);

        assert_eq!(Rank::from_column(Rank::ACE_LOW), Some(Rank::Ace));
        assert_eq!(Rank::from_column(Rank::ACE_HIGH), Some(Rank::Ace));
        assert_eq!(Rank::from_column(14), None);

        for rank in Rank::ranks() {
            assert_eq!(Rank::from_column(rank.column()), Some(rank));
            assert_eq!(rank.to_string().parse::<Rank>(), Ok(rank));
        }

        assert_eq!(Rank::Ace.value(), 13);
        assert!(Rank::Ace.value() > Rank::King.value());
    }

    #[test]
    fn suit_rows() {
        for (row, suit) in Suit::suits().enumerate() {
            assert_eq!(suit.row(), row);
            assert_eq!(Suit::from_row(row), Some(suit));
            assert_eq!(suit.to_string().parse::<Suit>(), Ok(suit));
        }

        assert_eq!(Suit::from_row(4), None);
    }

    #[test]
    fn deck_deals_every_card_once() {
        for seed in [0, 1, 42, 0xdead_beef] {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let mut ids = HashSet::default();

            while let Some(card) = deck.deal(Owner::Player(p(1))) {
                assert_eq!(card.owner(), Owner::Player(p(1)));
                assert!(ids.insert(card.id()), "{card} dealt twice");
            }

            assert_eq!(ids.len(), Deck::SIZE);
            assert!(deck.is_empty());
            assert!(deck.deal(Owner::Community).is_none());
        }
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::community(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::community(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);

        let mut count = 0;
        deck.for_each(4, |cards| {
            assert_eq!(cards.len(), 4);
            count += 1;
        });
        assert_eq!(count, 230_300);
    }
}
