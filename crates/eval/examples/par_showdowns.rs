// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --features=parallel --example par_showdowns
// ```

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use showdown_eval::*;

fn main() {
    // Play 100K showdowns at full tables, hands evaluated on a thread per player.
    const NUM_TABLES: usize = 100_000;
    const NUM_PLAYERS: u32 = 23;

    let mut rng = StdRng::seed_from_u64(0);
    let mut counts = [0usize; 9];
    let mut splits = 0;

    let now = Instant::now();

    for _ in 0..NUM_TABLES {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let mut cards = Vec::new();
        for id in 1..=NUM_PLAYERS {
            let owner = Owner::Player(PlayerId::new(id).unwrap());
            cards.extend([deck.deal(owner).unwrap(), deck.deal(owner).unwrap()]);
        }
        cards.extend((0..5).filter_map(|_| deck.deal(Owner::Community)));

        let table = Table::new(&cards);
        let best = table.best_hands().into_iter().filter_map(|(_, h)| h).max().unwrap();
        counts[best.rank() as usize] += 1;

        if table.winners().unwrap().len() > 1 {
            splits += 1;
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    println!("Total tables     {NUM_TABLES}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Tables/sec:      {:.0}", NUM_TABLES as f64 / elapsed);
    println!("Split pots:      {splits}\n");

    println!("Winning hands");
    println!("High Card:       {}", counts[HandRank::HighCard as usize]);
    println!("One  Pair:       {}", counts[HandRank::OnePair as usize]);
    println!("Two Pairs:       {}", counts[HandRank::TwoPair as usize]);
    println!("Three of a Kind: {}", counts[HandRank::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[HandRank::Straight as usize]);
    println!("Flush:           {}", counts[HandRank::Flush as usize]);
    println!("Full House:      {}", counts[HandRank::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[HandRank::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[HandRank::StraightFlush as usize]);
}
