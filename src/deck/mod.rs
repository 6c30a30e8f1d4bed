
use crate::card::{Card, Rank, Suit};
use crate::error::Error;
use rand::prelude::SliceRandom as _;

/// Number of cards in a standard deck
pub const DECK_SIZE: usize = 52;

/// An ordered pile of playing cards, dealt from the front
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create a standard 52-card deck, clubs first, each suit from 2 to A
    #[must_use]
    pub fn standard_52() -> Self {
        Self {
            cards: Suit::ASC
                .into_iter()
                .flat_map(|suit| core::iter::repeat(suit).zip(Rank::ASC))
                .map(|(suit, rank)| Card::new(suit, rank))
                .collect(),
        }
    }

    /// Create a deck with a preset order, the first card dealt first
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffle the deck in place
    pub fn shuffle(&mut self, rng: &mut (impl rand::Rng + ?Sized)) {
        self.cards.shuffle(rng);
    }

    /// Number of cards left
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether every card has been dealt
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards left, in dealing order
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Remove the top card
    pub fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Remove `count` cards from the top
    ///
    /// # Errors
    /// [`Error::NotEnoughCards`] if fewer than `count` cards are left, in
    /// which case the deck is untouched.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, Error> {
        if count > self.cards.len() {
            return Err(Error::NotEnoughCards {
                requested: count,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..count).collect())
    }
}

/// Create a shuffled standard 52-card deck
#[must_use]
pub fn shuffled_standard_52_deck(rng: &mut (impl rand::Rng + ?Sized)) -> Deck {
    let mut deck = Deck::standard_52();
    deck.shuffle(rng);
    deck
}
