
use crate::card::{Card, Suit};
use crate::deck::{shuffled_standard_52_deck, Deck, DECK_SIZE};
use crate::error::Error;
use crate::hand::{Hand, Holding, SmallSet as _};
use crate::score::Scoreboard;
use crate::table::{Partnerships, Seat, Table, PLAYERS};
use crate::trick::Trick;
use core::fmt;
use core::num::Wrapping;
use core::ops::Index;

/// Number of tricks, and of cards in each hand, in a deal
pub const TRICKS_PER_DEAL: usize = 13;

/// Four hands dealt from one deck, with the trump card and tricks taken
///
/// A deal only changes through [`Deal::play_card`] and the recording of
/// tricks.  Hands are handed out as copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    table: Table,
    hands: [Hand; PLAYERS],
    played: Hand,
    trump_card: Card,
    scoreboard: Scoreboard,
}

struct DealDisplay<'a> {
    deal: &'a Deal,
    seat: Seat,
}

impl fmt::Display for DealDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}:{} {} {} {}",
            char::from(self.seat),
            self.deal[self.seat],
            self.deal[self.seat + Wrapping(1)],
            self.deal[self.seat + Wrapping(2)],
            self.deal[self.seat + Wrapping(3)],
        )
    }
}

impl Deal {
    /// Deal a freshly shuffled standard deck to the table
    ///
    /// # Errors
    /// [`Error::DealingInvariantViolated`] if dealing does not produce four
    /// 13-card hands, which indicates a defect
    pub fn new(table: Table, rng: &mut (impl rand::Rng + ?Sized)) -> Result<Self, Error> {
        Self::with_deck(table, shuffled_standard_52_deck(rng))
    }

    /// Deal a deck in its given order
    ///
    /// Cards go one at a time to each seat in turn, starting from
    /// [`Seat::North`], until the deck is exhausted.  The last card dealt is
    /// the trump card and stays in the hand of [`Seat::West`].
    ///
    /// # Errors
    /// [`Error::DealingInvariantViolated`] unless the deck is exactly the 52
    /// distinct cards of a standard deck
    pub fn with_deck(table: Table, mut deck: Deck) -> Result<Self, Error> {
        if deck.len() != DECK_SIZE {
            return Err(Error::DealingInvariantViolated("deck must hold 52 cards"));
        }

        let mut hands = [Hand::EMPTY; PLAYERS];
        let mut trump_card = None;

        for _ in 0..TRICKS_PER_DEAL {
            for seat in Seat::ALL {
                let card = deck
                    .draw()
                    .ok_or(Error::DealingInvariantViolated("deck ran out while dealing"))?;
                hands[seat as usize].insert(card);
                trump_card = Some(card);
            }
        }

        let dealt = hands.iter().fold(Hand::EMPTY, |acc, &hand| acc | hand);
        if !deck.is_empty() || dealt != Hand::ALL {
            return Err(Error::DealingInvariantViolated("deck has repeated cards"));
        }
        if hands.iter().any(|hand| hand.len() != TRICKS_PER_DEAL) {
            return Err(Error::DealingInvariantViolated("hands must hold 13 cards"));
        }
        let trump_card =
            trump_card.ok_or(Error::DealingInvariantViolated("no card was dealt"))?;

        let deal = Self {
            scoreboard: Scoreboard::new(table.clone()),
            table,
            hands,
            played: Hand::EMPTY,
            trump_card,
        };
        tracing::debug!(layout = %deal.display(Seat::North), trump_card = %trump_card, "dealt hands");
        Ok(deal)
    }

    /// The players of the deal
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The last card dealt, which sets the trump suit
    #[must_use]
    pub fn trump_card(&self) -> Card {
        self.trump_card
    }

    /// The suit of the trump card
    #[must_use]
    pub fn trump_suit(&self) -> Suit {
        self.trump_card.suit()
    }

    /// A copy of the cards a player holds
    ///
    /// # Errors
    /// [`Error::UnknownPlayer`] if the player is not at the table
    pub fn hand(&self, player: &str) -> Result<Hand, Error> {
        Ok(self[self.seat_of(player)?])
    }

    /// Cards played to tricks so far
    #[must_use]
    pub fn played(&self) -> Hand {
        self.played
    }

    /// Tricks won so far
    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Cards a seat may play to a trick
    ///
    /// A seat holding the lead suit must follow it; otherwise any card goes.
    #[must_use]
    pub fn legal_cards(&self, seat: Seat, trick: &Trick) -> Hand {
        let hand = self[seat];
        match trick.lead_suit() {
            Some(lead) if hand.has_suit(lead) => {
                let mut holdings = [Holding::EMPTY; 4];
                holdings[lead as usize] = hand[lead];
                Hand(holdings)
            }
            _ => hand,
        }
    }

    /// Move a card from a player's hand into a trick
    ///
    /// # Errors
    /// - [`Error::UnknownPlayer`] if the player is not at the table
    /// - [`Error::CardNotInHand`] if the player does not hold the card
    /// - [`Error::MustFollowSuit`] if the card does not follow the lead suit
    ///   while the player holds a card of it
    /// - [`Error::TrickFull`] or [`Error::DuplicatePlayer`] from
    ///   [`Trick::add_play`]
    ///
    /// Neither the hand nor the trick changes on error.
    pub fn play_card(&mut self, player: &str, card: Card, trick: &mut Trick) -> Result<Seat, Error> {
        let seat = self.seat_of(player)?;
        let hand = self[seat];

        if !hand.contains(card) {
            return Err(Error::CardNotInHand {
                player: player.to_owned(),
                card,
            });
        }

        if let Some(lead) = trick.lead_suit() {
            if card.suit() != lead && hand.has_suit(lead) {
                return Err(Error::MustFollowSuit {
                    player: player.to_owned(),
                    card,
                    lead,
                });
            }
        }

        trick.add_play(seat, card)?;
        self.hands[seat as usize].remove(card);
        self.played.insert(card);
        tracing::debug!(player, seat = %seat, card = %card, "card played");
        Ok(seat)
    }

    /// Credit a trick to a player
    ///
    /// # Errors
    /// [`Error::UnregisteredWinner`] if the player is not at the table
    pub fn record_trick(&mut self, winner: &str) -> Result<Seat, Error> {
        self.scoreboard.record_trick(winner)
    }

    pub(crate) fn record_seat(&mut self, seat: Seat) {
        self.scoreboard.record_seat(seat);
    }

    /// Points earned by each partnership so far
    #[must_use]
    pub fn partnership_points(&self) -> Partnerships<u8> {
        self.scoreboard.partnership_points()
    }

    /// Display the deal from a seat's perspective
    #[must_use]
    pub fn display(&self, seat: Seat) -> impl fmt::Display + '_ {
        DealDisplay { deal: self, seat }
    }

    fn seat_of(&self, player: &str) -> Result<Seat, Error> {
        self.table
            .seat_of(player)
            .ok_or_else(|| Error::UnknownPlayer(player.to_owned()))
    }
}

impl Index<Seat> for Deal {
    type Output = Hand;

    fn index(&self, seat: Seat) -> &Hand {
        &self.hands[seat as usize]
    }
}
