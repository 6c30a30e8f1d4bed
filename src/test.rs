#![cfg(test)]
use crate::card::Card;
use crate::deal::TRICKS_PER_DEAL;
use crate::deck::{Deck, DECK_SIZE};
use crate::hand::Hand;
use crate::table::Table;

pub fn table() -> Table {
    Table::new(["A", "B", "C", "D"]).expect("four distinct players")
}

pub fn card(text: &str) -> Card {
    text.parse().expect("test card")
}

pub fn hand(text: &str) -> Hand {
    text.parse().expect("test hand")
}

/// Stack a deck so that dealing it gives the four hands, north first
pub fn stacked_deck(hands: [Hand; 4]) -> Deck {
    let mut iters = hands.map(Hand::iter);
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for _ in 0..TRICKS_PER_DEAL {
        for iter in &mut iters {
            cards.extend(iter.next());
        }
    }
    Deck::from_cards(cards)
}

/// Every seat holds three or four top cards of each suit
///
/// North holds all the honors, and west's only spade is the deuce, which
/// is also the last card dealt.
pub fn ladder_hands() -> [Hand; 4] {
    [
        "AKQJ.AKQ.AKQ.AKQ",
        "T987.JT9.JT9.JT9",
        "6543.876.876.876",
        "2.5432.5432.5432",
    ]
    .map(hand)
}
