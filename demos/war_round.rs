//! CLI War example: plays one pass through both hands.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use warrs::{DeckGenerator, EMPTY_PILE, Hand, WonPile};

fn glyph(hand: &Hand, index: usize) -> String {
    hand.card(index)
        .and_then(|card| card.glyph().ok())
        .and_then(|bytes| String::from_utf8(bytes.to_vec()).ok())
        .unwrap_or_default()
}

fn main() {
    println!("War example: highest card takes the round.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut generator = DeckGenerator::new(seed);
    let deck = generator.deck(1000);

    let players = deck.split(2).unwrap();
    let (you, cpu) = (&players[0], &players[1]);

    let mut your_pile: WonPile = EMPTY_PILE;
    let mut cpu_pile: WonPile = EMPTY_PILE;
    let (mut your_wins, mut cpu_wins) = (0u32, 0u32);

    for round in 0..you.len().min(cpu.len()) {
        let yours = you.card(round).unwrap();
        let theirs = cpu.card(round).unwrap();
        you.set_played(round, true);
        cpu.set_played(round, true);

        let outcome = if yours.value() > theirs.value() {
            your_pile[2 * round] = Some(yours);
            your_pile[2 * round + 1] = Some(theirs);
            your_wins += 1;
            "you win"
        } else {
            cpu_pile[2 * round] = Some(theirs);
            cpu_pile[2 * round + 1] = Some(yours);
            cpu_wins += 1;
            "cpu wins"
        };

        println!(
            "round {:2}: {} {:18} vs {} {:18} -> {}",
            round + 1,
            glyph(you, round),
            yours.name().unwrap_or_default(),
            glyph(cpu, round),
            theirs.name().unwrap_or_default(),
            outcome,
        );
    }

    // Each player's next hand: their dealt cards plus their winnings,
    // consolidated into fresh owned storage.
    let your_next = you.squash(&your_pile);
    let cpu_next = cpu.squash(&cpu_pile);

    println!(
        "you took {your_wins} rounds, cpu took {cpu_wins}; next hands hold {} and {} cards",
        your_next.len(),
        cpu_next.len(),
    );
    println!("cards played: you {}, cpu {}", you.count_played(), cpu.count_played());
}
