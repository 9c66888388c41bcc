// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand detectors.
//!
//! There is one detector for each hand category, a detector scans a player
//! [Grid] and returns the best five cards that make the category, or `None`
//! if the player cannot make it. The cards are ordered by significance, the
//! group that defines the category first (the quad, the higher pair, ...)
//! followed by the kickers in descending rank order, so that two hands of the
//! same category can be compared card by card.
use showdown_cards::{Card, Suit};

use crate::{
    grid::{Grid, high_columns},
    hand::{Hand, HandRank},
};

/// A hand category detector.
pub type Detector = fn(&Grid) -> Option<[Card; Hand::SIZE]>;

/// All detectors, from the strongest category to the weakest.
pub const DETECTORS: [(HandRank, Detector); 9] = [
    (HandRank::StraightFlush, straight_flush),
    (HandRank::FourOfAKind, four_of_a_kind),
    (HandRank::FullHouse, full_house),
    (HandRank::Flush, flush),
    (HandRank::Straight, straight),
    (HandRank::ThreeOfAKind, three_of_a_kind),
    (HandRank::TwoPair, two_pair),
    (HandRank::OnePair, one_pair),
    (HandRank::HighCard, high_card),
];

/// Returns the detector for a category.
pub fn detector(rank: HandRank) -> Detector {
    DETECTORS[DETECTORS.len() - 1 - rank as usize].1
}

/// The highest straight flush in any suit.
pub fn straight_flush(grid: &Grid) -> Option<[Card; Hand::SIZE]> {
    let mut best: Option<(usize, Suit)> = None;

    for suit in Suit::suits() {
        if let Some(top) = find_run(|column| grid.is_available(suit, column)) {
            if best.is_none_or(|(best_top, _)| top > best_top) {
                best = Some((top, suit));
            }
        }
    }

    let (top, suit) = best?;
    complete(run_columns(top).filter_map(|column| grid.card_at(suit, column)))
}

/// The highest four of a kind with the highest kicker.
pub fn four_of_a_kind(grid: &Grid) -> Option<[Card; Hand::SIZE]> {
    let quad = find_group(grid, 4, &[])?;
    complete(group(grid, quad, 4).chain(kickers(grid, &[quad], 1)))
}

/// The highest three cards group with the highest pair.
///
/// Ranks are visited once from the highest, each rank fills the three cards
/// group if it has at least three cards and the group is still empty, else
/// the pair if it has at least two cards. A second three cards group becomes
/// the pair.
pub fn full_house(grid: &Grid) -> Option<[Card; Hand::SIZE]> {
    let mut three = None;
    let mut two = None;

    for column in high_columns() {
        let count = grid.available_suits(column).count();
        if count >= 3 && three.is_none() {
            three = Some(column);
        } else if count >= 2 && two.is_none() {
            two = Some(column);
        }

        if three.is_some() && two.is_some() {
            break;
        }
    }

    let (three, two) = (three?, two?);
    complete(group(grid, three, 3).chain(group(grid, two, 2)))
}

/// The highest flush, every suit is checked and compared card by card.
pub fn flush(grid: &Grid) -> Option<[Card; Hand::SIZE]> {
    let mut best: Option<(Suit, Vec<usize>)> = None;

    for suit in Suit::suits() {
        let columns = high_columns()
            .filter(|&column| grid.is_available(suit, column))
            .take(Hand::SIZE)
            .collect::<Vec<_>>();

        if columns.len() == Hand::SIZE
            && best
                .as_ref()
                .is_none_or(|(_, best_columns)| columns > *best_columns)
        {
            best = Some((suit, columns));
        }
    }

    let (suit, columns) = best?;
    complete(
        columns
            .into_iter()
            .filter_map(|column| grid.card_at(suit, column)),
    )
}

/// The highest straight in mixed suits, including the Ace-low straight.
pub fn straight(grid: &Grid) -> Option<[Card; Hand::SIZE]> {
    let top = find_run(|column| grid.is_column_available(column))?;
    complete(run_columns(top).filter_map(|column| first_card(grid, column)))
}

/// The highest three of a kind with the two highest kickers.
pub fn three_of_a_kind(grid: &Grid) -> Option<[Card; Hand::SIZE]> {
    let three = find_group(grid, 3, &[])?;
    complete(group(grid, three, 3).chain(kickers(grid, &[three], 2)))
}

/// The two highest pairs with the highest kicker.
pub fn two_pair(grid: &Grid) -> Option<[Card; Hand::SIZE]> {
    let high = find_group(grid, 2, &[])?;
    let low = find_group(grid, 2, &[high])?;
    complete(
        group(grid, high, 2)
            .chain(group(grid, low, 2))
            .chain(kickers(grid, &[high, low], 1)),
    )
}

/// The highest pair with the three highest kickers.
pub fn one_pair(grid: &Grid) -> Option<[Card; Hand::SIZE]> {
    let pair = find_group(grid, 2, &[])?;
    complete(group(grid, pair, 2).chain(kickers(grid, &[pair], 3)))
}

/// The five highest ranks, `None` if the player has less than five cards.
pub fn high_card(grid: &Grid) -> Option<[Card; Hand::SIZE]> {
    complete(kickers(grid, &[], Hand::SIZE))
}

/// Finds the highest run of five consecutive available columns and returns
/// its top column.
///
/// The scan starts with the window topped at the Ace-high column and, when a
/// window fails, restarts right below the first unavailable column as no
/// window through it can qualify. The Ace-low column is the bottom of the
/// last window.
fn find_run<P>(available: P) -> Option<usize>
where
    P: Fn(usize) -> bool,
{
    let mut top = high_columns().next()?;

    while top >= Hand::SIZE - 1 {
        let run = (0..Hand::SIZE)
            .take_while(|&offset| available(top - offset))
            .count();
        if run == Hand::SIZE {
            return Some(top);
        }

        top = top.checked_sub(run + 1)?;
    }

    None
}

/// The five columns of a run, from the top one down.
fn run_columns(top: usize) -> impl Iterator<Item = usize> {
    (top + 1 - Hand::SIZE..=top).rev()
}

/// Finds the highest column, not in `skip`, with at least `count` cards.
fn find_group(grid: &Grid, count: usize, skip: &[usize]) -> Option<usize> {
    high_columns()
        .filter(|column| !skip.contains(column))
        .find(|&column| grid.available_suits(column).count() >= count)
}

/// Up to `count` cards from a column in suit order.
fn group(grid: &Grid, column: usize, count: usize) -> impl Iterator<Item = Card> + '_ {
    grid.available_suits(column)
        .filter_map(move |suit| grid.card_at(suit, column))
        .take(count)
}

/// Up to `count` kickers, one per rank from the highest, skipping `used` ranks.
fn kickers<'a>(grid: &'a Grid, used: &'a [usize], count: usize) -> impl Iterator<Item = Card> + 'a {
    high_columns()
        .filter(move |column| !used.contains(column))
        .filter_map(move |column| first_card(grid, column))
        .take(count)
}

/// The first available card in suit order at a column.
fn first_card(grid: &Grid, column: usize) -> Option<Card> {
    Suit::suits().find_map(|suit| grid.card_at(suit, column))
}

/// Returns the hand cards only if there are exactly five of them.
fn complete<I>(cards: I) -> Option<[Card; Hand::SIZE]>
where
    I: IntoIterator<Item = Card>,
{
    cards.into_iter().collect::<Vec<_>>().try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::{Owner, PlayerId, Rank};

    fn p1() -> PlayerId {
        PlayerId::new(1).unwrap()
    }

    fn grid(cards: &str) -> Grid {
        let cards = cards
            .split_whitespace()
            .map(|s| s.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        Grid::from_cards(p1(), &cards)
    }

    fn labels(cards: Option<[Card; Hand::SIZE]>) -> String {
        cards
            .map(|cards| {
                cards
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
    }

    fn assert_descending(kickers: &[Card]) {
        for w in kickers.windows(2) {
            assert!(w[0].rank().value() > w[1].rank().value(), "{kickers:?}");
        }
    }

    #[test]
    fn detectors_order() {
        for (idx, (rank, _)) in DETECTORS.iter().enumerate() {
            assert_eq!(*rank as usize, DETECTORS.len() - 1 - idx);
        }

        let g = grid("2C 3C 4C 5C 6C");
        assert_eq!(labels(detector(HandRank::StraightFlush)(&g)), "6C 5C 4C 3C 2C");
        assert_eq!(labels(detector(HandRank::HighCard)(&g)), "6C 5C 4C 3C 2C");
        assert_eq!(detector(HandRank::OnePair)(&g), None);
    }

    #[test]
    fn straight_flush_ace_high_and_low() {
        let g = grid("TS JS QS KS AS 2D 3D");
        assert_eq!(labels(straight_flush(&g)), "AS KS QS JS TS");

        let g = grid("AH 2H 3H 4H 5H KD QD");
        assert_eq!(labels(straight_flush(&g)), "5H 4H 3H 2H AH");

        // A straight but not suited.
        let g = grid("AH 2H 3H 4H 5D KD QD");
        assert_eq!(straight_flush(&g), None);
    }

    #[test]
    fn straight_flush_highest_across_suits() {
        // Clubs are scanned first but diamonds have the higher straight.
        let g = grid("2C 3C 4C 5C 6C 4D 5D 6D 7D 8D");
        assert_eq!(labels(straight_flush(&g)), "8D 7D 6D 5D 4D");

        let g = grid("9C TC JC QC KC 4D 5D 6D 7D 8D");
        assert_eq!(labels(straight_flush(&g)), "KC QC JC TC 9C");

        // The highest run in a suit with more than five cards.
        let g = grid("4S 5S 6S 7S 8S 9S");
        assert_eq!(labels(straight_flush(&g)), "9S 8S 7S 6S 5S");
    }

    #[test]
    fn straight_needs_five_consecutive_ranks() {
        let g = grid("AC 2D 3H 4S 6C 7D 8H");
        assert_eq!(straight(&g), None);
        assert_eq!(straight_flush(&g), None);

        let g = grid("AC 2D 3H 4S 5C 7D 8H");
        assert_eq!(labels(straight(&g)), "5C 4S 3H 2D AC");

        let g = grid("TC JD QH KS AD 2C");
        assert_eq!(labels(straight(&g)), "AD KS QH JD TC");

        // K-A-2-3-4 does not wrap around.
        let g = grid("KC AD 2H 3S 4C");
        assert_eq!(straight(&g), None);
    }

    #[test]
    fn straight_highest_window() {
        let g = grid("3C 4D 5H 6S 7C 8D 9H");
        assert_eq!(labels(straight(&g)), "9H 8D 7C 6S 5H");

        // Picks the first suit at each rank.
        let g = grid("6S 7H 7C 8D 9H TS TC");
        assert_eq!(labels(straight(&g)), "TC 9H 8D 7C 6S");
    }

    #[test]
    fn four_of_a_kind_kicker() {
        let g = grid("6S 6C 6H 6D QD 8C 7C");
        assert_eq!(labels(four_of_a_kind(&g)), "6C 6D 6H 6S QD");

        let g = grid("AS AC AH AD 2C 2D 2H");
        assert_eq!(labels(four_of_a_kind(&g)), "AC AD AH AS 2C");

        // The kicker can pair the board.
        let g = grid("9S 9C 9H 9D KD KC 3C");
        assert_eq!(labels(four_of_a_kind(&g)), "9C 9D 9H 9S KC");

        let g = grid("9S 9C 9H 8D KD KC 3C");
        assert_eq!(four_of_a_kind(&g), None);

        // No kicker with only four cards.
        let g = grid("9S 9C 9H 9D");
        assert_eq!(four_of_a_kind(&g), None);
    }

    #[test]
    fn full_house_groups() {
        let g = grid("3C 3D 3H KS KC 2C 2D");
        assert_eq!(labels(full_house(&g)), "3C 3D 3H KC KS");

        // The higher three cards group wins, the lower becomes the pair.
        let g = grid("3C 3D 3H KS KC KH 2D");
        assert_eq!(labels(full_house(&g)), "KC KH KS 3C 3D");

        // Highest pair among many.
        let g = grid("8C 8D 8H QS QC 5C 5D");
        assert_eq!(labels(full_house(&g)), "8C 8D 8H QC QS");

        let g = grid("8C 8D 8H QS JC 5C 4D");
        assert_eq!(full_house(&g), None);

        let g = grid("8C 8D QH QS JC JD 4D");
        assert_eq!(full_house(&g), None);
    }

    #[test]
    fn flush_highest_suit() {
        // Clubs qualify first but hearts are higher.
        let g = grid("2C 3C 4C 5C 7C 9H JH KH AH 3H");
        assert_eq!(labels(flush(&g)), "AH KH JH 9H 3H");

        // Same top four cards, the fifth decides.
        let g = grid("AC KC QC JC 8C AH KH QH JH 9H");
        assert_eq!(labels(flush(&g)), "AH KH QH JH 9H");

        // Uses the five highest of six suited cards.
        let g = grid("2S 4S 6S 8S TS QS");
        assert_eq!(labels(flush(&g)), "QS TS 8S 6S 4S");

        let g = grid("2S 4S 6S 8S TD QD");
        assert_eq!(flush(&g), None);
    }

    #[test]
    fn three_of_a_kind_kickers() {
        let g = grid("7C 7D 7H AS 2C 9D 4H");
        let cards = three_of_a_kind(&g);
        assert_eq!(labels(cards), "7C 7D 7H AS 9D");

        // One kicker per rank.
        let g = grid("7C 7D 7H QS QC 9D 4H");
        let cards = three_of_a_kind(&g).unwrap();
        assert_eq!(labels(Some(cards)), "7C 7D 7H QC 9D");
        assert_descending(&cards[3..]);

        let g = grid("7C 7D 7H");
        assert_eq!(three_of_a_kind(&g), None);
    }

    #[test]
    fn two_pair_kicker() {
        let g = grid("4C 4D JH JS 2C 9D 3H");
        assert_eq!(labels(two_pair(&g)), "JH JS 4C 4D 9D");

        // Three pairs, the third pair gives the kicker.
        let g = grid("AC AD KH KS QC QD 2H");
        assert_eq!(labels(two_pair(&g)), "AC AD KH KS QC");

        let g = grid("AC AD KH 7S QC 3D 2H");
        assert_eq!(two_pair(&g), None);
    }

    #[test]
    fn one_pair_kickers() {
        let g = grid("5H 5S AC 2D 9H JS 3C");
        let cards = one_pair(&g).unwrap();
        assert_eq!(labels(Some(cards)), "5H 5S AC JS 9H");
        assert_descending(&cards[2..]);

        let g = grid("5H 6S AC 2D 9H JS 3C");
        assert_eq!(one_pair(&g), None);
    }

    #[test]
    fn high_card_needs_five_cards() {
        let g = grid("5H 7S AC 2D 9H JS 3C");
        let cards = high_card(&g).unwrap();
        assert_eq!(labels(Some(cards)), "AC JS 9H 7S 5H");
        assert_descending(&cards);

        let g = grid("5H 7S AC 2D");
        assert_eq!(high_card(&g), None);
        assert_eq!(straight(&g), None);
        assert_eq!(flush(&g), None);
    }

    #[test]
    fn detectors_keep_owners() {
        let p1 = p1();
        let cards = [
            Card::hole(Rank::Ace, Suit::Spades, p1),
            Card::hole(Rank::Ace, Suit::Hearts, p1),
            Card::community(Rank::Ace, Suit::Clubs),
            Card::community(Rank::Deuce, Suit::Clubs),
            Card::community(Rank::Seven, Suit::Diamonds),
        ];

        let g = Grid::from_cards(p1, &cards);
        let hand = three_of_a_kind(&g).unwrap();
        assert_eq!(hand[0].owner(), Owner::Community);
        assert_eq!(hand[1].owner(), Owner::Player(p1));
        assert_eq!(hand[2].owner(), Owner::Player(p1));
    }

    #[test]
    fn every_detector_returns_five_or_none() {
        for cards in [
            "",
            "AS",
            "AS KS",
            "AS AD AH AC",
            "AS 2S 3S 4S",
            "AS 2S 3S 4S 5S",
            "9C 9D 9H 9S 5S 5D 5H",
        ] {
            let g = grid(cards);
            for (rank, detect) in DETECTORS {
                if let Some(hand) = detect(&g) {
                    let mut distinct = hand.to_vec();
                    distinct.dedup();
                    assert_eq!(distinct.len(), Hand::SIZE, "{rank:?} {cards}");
                }
            }
        }
    }
}
