//! Deck, hand, and card integration tests.

use warrs::{
    CARD_BACK, Card, CardError, DECK_SIZE, DeckGenerator, EMPTY_PILE, Hand, HandError, SplitError,
    Suit, WonPile,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn deck_with_seed(seed: u64, shuffle_rounds: u32) -> Hand {
    DeckGenerator::new(seed).deck(shuffle_rounds)
}

#[test]
fn deck_is_the_exact_cartesian_product() {
    for shuffle_rounds in [0, 1, 7, 1000] {
        let deck = deck_with_seed(9, shuffle_rounds);
        assert_eq!(deck.len(), DECK_SIZE);
        assert!(!deck.is_view());

        // value() is injective over the deck, so 52 distinct values in
        // 1..=52 means every rank/suit pair appears exactly once.
        let mut seen = [false; 53];
        for c in &deck {
            assert!(c.is_valid());
            let value = c.value() as usize;
            assert!(!seen[value]);
            seen[value] = true;
        }
        assert!(seen[1..].iter().all(|&s| s));
    }
}

#[test]
fn deck_generation_is_deterministic_per_seed() {
    let a = deck_with_seed(42, 500);
    let b = deck_with_seed(42, 500);
    let c = deck_with_seed(43, 500);
    assert_eq!(a.cards(), b.cards());
    assert_ne!(a.cards(), c.cards());
}

#[test]
fn unshuffled_deck_is_suit_major_sorted() {
    let deck = deck_with_seed(0, 0);
    for i in 0..DECK_SIZE {
        let expected = card(Suit::ALL[i / 13], (i % 13 + 1) as u8);
        assert_eq!(deck.card(i), Some(expected));
    }
}

#[test]
fn random_cards_stay_in_domain() {
    let mut generator = DeckGenerator::new(7);
    for _ in 0..200 {
        assert!(generator.random_card().is_valid());
    }
}

#[test]
fn split_views_cover_the_source_in_order() {
    let deck = deck_with_seed(3, 300);
    let views = deck.split(5).unwrap();

    let lengths: Vec<usize> = views.iter().map(Hand::len).collect();
    assert_eq!(lengths, [10, 10, 10, 10, 12]);

    let mut concatenated = Vec::new();
    for view in &views {
        assert!(view.is_view());
        concatenated.extend(view.cards());
    }
    assert_eq!(concatenated, deck.cards());
}

#[test]
fn split_into_two_deals_26_each() {
    let deck = deck_with_seed(4, 300);
    let players = deck.split(2).unwrap();
    assert_eq!(players[0].len(), 26);
    assert_eq!(players[1].len(), 26);
    assert_eq!(
        [players[0].cards(), players[1].cards()].concat(),
        deck.cards()
    );
}

#[test]
fn views_share_played_markers_with_the_source() {
    let deck = deck_with_seed(5, 100);
    let views = deck.split(5).unwrap();

    assert!(views[0].set_played(0, true));
    assert_eq!(deck.is_played(0), Some(true));

    // Visible in the other direction too: view 1 starts at position 10.
    assert!(deck.set_played(10, true));
    assert_eq!(views[1].is_played(0), Some(true));

    assert_eq!(deck.count_played(), 2);
    assert_eq!(views[0].count_played(), 1);
    assert_eq!(views[4].count_played(), 0);
}

#[test]
fn views_survive_dropping_the_source_handle() {
    let views = deck_with_seed(6, 100).split(2).unwrap();
    assert_eq!(views[0].len() + views[1].len(), DECK_SIZE);
    assert!(views[0].set_played(3, true));
    assert_eq!(views[0].count_played(), 1);
}

#[test]
fn splitting_a_view_stays_inside_the_view() {
    let deck = deck_with_seed(8, 100);
    let halves = deck.split(2).unwrap();
    let quarters = halves[1].split(2).unwrap();

    assert_eq!(quarters[0].len() + quarters[1].len(), halves[1].len());
    assert_eq!(
        [quarters[0].cards(), quarters[1].cards()].concat(),
        halves[1].cards()
    );

    // Still aliased through to the original deck: the second half starts
    // at position 26.
    assert!(quarters[0].set_played(0, true));
    assert_eq!(deck.is_played(26), Some(true));
}

#[test]
fn split_errors() {
    let deck = deck_with_seed(1, 10);
    assert_eq!(deck.split(0).unwrap_err(), SplitError::InvalidSplit);
    assert_eq!(
        deck.split(DECK_SIZE + 1).unwrap_err(),
        SplitError::InvalidSplit
    );
}

#[test]
fn out_of_range_indices_are_rejected() {
    let deck = deck_with_seed(2, 10);
    assert_eq!(deck.card(DECK_SIZE), None);
    assert_eq!(deck.is_played(DECK_SIZE), None);
    assert!(!deck.set_played(DECK_SIZE, true));
    assert_eq!(deck.count_played(), 0);
}

#[test]
fn from_parts_rejects_mismatched_markers() {
    let cards = vec![card(Suit::Hearts, 2), card(Suit::Spades, 3)];
    assert_eq!(
        Hand::from_parts(cards, vec![false]).unwrap_err(),
        HandError::MismatchedMarkers
    );
}

#[test]
fn from_parts_restores_cards_and_markers() {
    let cards = vec![card(Suit::Hearts, 2), card(Suit::Spades, 3)];
    let hand = Hand::from_parts(cards.clone(), vec![true, false]).unwrap();
    assert!(!hand.is_view());
    assert_eq!(hand.cards(), cards);
    assert_eq!(hand.played(), [true, false]);
    assert_eq!(hand.count_played(), 1);
}

#[test]
fn squash_copies_filters_and_resets_markers() {
    // Rank 0 marks a cleared slot and must be dropped.
    let hand = Hand::from_parts(
        vec![
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 0),
            card(Suit::Spades, 12),
        ],
        vec![true, true, false],
    )
    .unwrap();

    let mut pile: WonPile = EMPTY_PILE;
    pile[3] = Some(card(Suit::Diamonds, 9));
    pile[10] = Some(card(Suit::Clubs, 0));
    pile[40] = Some(card(Suit::Clubs, 1));

    let squashed = hand.squash(&pile);
    assert!(!squashed.is_view());
    assert_eq!(
        squashed.cards(),
        [
            card(Suit::Hearts, 5),
            card(Suit::Spades, 12),
            card(Suit::Diamonds, 9),
            card(Suit::Clubs, 1),
        ]
    );
    // Fresh markers, regardless of the sources' played state.
    assert_eq!(squashed.played(), [false; 4]);
}

#[test]
fn squash_of_a_view_shares_nothing_with_its_source() {
    let deck = deck_with_seed(11, 100);
    let views = deck.split(2).unwrap();

    let squashed = views[0].squash(&EMPTY_PILE);
    assert_eq!(squashed.cards(), views[0].cards());

    assert!(squashed.set_played(0, true));
    assert_eq!(deck.is_played(0), Some(false));
}

#[test]
fn cards_order_by_rank_then_suit() {
    // Rank dominates the suit entirely.
    assert!(card(Suit::Spades, 4) < card(Suit::Clubs, 5));

    // Suits break rank ties in the fixed order.
    assert!(card(Suit::Clubs, 7) < card(Suit::Diamonds, 7));
    assert!(card(Suit::Diamonds, 7) < card(Suit::Hearts, 7));
    assert!(card(Suit::Hearts, 7) < card(Suit::Spades, 7));

    assert_eq!(card(Suit::Hearts, 9), card(Suit::Hearts, 9));
    assert!(card(Suit::Spades, 4) < card(Suit::Clubs, 5));
    assert!(card(Suit::Clubs, 5) > card(Suit::Spades, 4));
}

#[test]
fn value_agrees_with_ordering_within_a_suit() {
    for suit in Suit::ALL {
        for rank in 1..13u8 {
            let lower = card(suit, rank);
            let higher = card(suit, rank + 1);
            assert!(lower < higher);
            assert!(lower.value() < higher.value());
        }
    }

    assert_eq!(card(Suit::Clubs, 1).value(), 1);
    assert_eq!(card(Suit::Diamonds, 1).value(), 14);
    assert_eq!(card(Suit::Spades, 13).value(), 52);
}

#[test]
fn card_names() {
    assert_eq!(card(Suit::Clubs, 1).name().unwrap(), "1 of Clubs");
    assert_eq!(card(Suit::Hearts, 10).name().unwrap(), "10 of Hearts");
    assert_eq!(card(Suit::Diamonds, 11).name().unwrap(), "Jack of Diamonds");
    assert_eq!(card(Suit::Hearts, 12).name().unwrap(), "Queen of Hearts");
    assert_eq!(card(Suit::Spades, 13).name().unwrap(), "King of Spades");

    assert_eq!(card(Suit::Clubs, 0).name().unwrap_err(), CardError::InvalidCard);
    assert_eq!(card(Suit::Clubs, 14).name().unwrap_err(), CardError::InvalidCard);
}

#[test]
fn card_glyphs() {
    assert_eq!(card(Suit::Spades, 1).glyph().unwrap(), [0xf0, 0x9f, 0x82, 0xa1]);
    assert_eq!(card(Suit::Clubs, 1).glyph().unwrap(), [0xf0, 0x9f, 0x83, 0x91]);
    assert_eq!(card(Suit::Clubs, 13).glyph().unwrap(), [0xf0, 0x9f, 0x83, 0x9d]);

    // Every in-domain glyph is one valid UTF-8 scalar.
    for suit in Suit::ALL {
        for rank in 1..=13 {
            let glyph = card(suit, rank).glyph().unwrap();
            let text = core::str::from_utf8(&glyph).unwrap();
            assert_eq!(text.chars().count(), 1);
        }
    }

    assert_eq!(card(Suit::Spades, 0).glyph().unwrap_err(), CardError::InvalidCard);
    assert_eq!(card(Suit::Spades, 14).glyph().unwrap_err(), CardError::InvalidCard);

    assert_eq!(core::str::from_utf8(&CARD_BACK).unwrap(), "\u{1f0a0}");
}

#[test]
fn iteration_matches_indexed_access() {
    let deck = deck_with_seed(12, 300);
    let iterated: Vec<Card> = deck.iter().collect();
    assert_eq!(iterated, deck.cards());
    assert_eq!(deck.iter().len(), DECK_SIZE);
}
