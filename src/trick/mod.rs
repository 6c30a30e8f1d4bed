
use crate::card::{Card, Strain, Suit};
use crate::error::Error;
use crate::table::{Seat, PLAYERS};
use serde::{Deserialize, Serialize};

/// A card played by a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Play {
    /// The seat playing the card
    pub seat: Seat,
    /// The card played
    pub card: Card,
}

/// Up to four plays, one per seat, in the order they were made
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Trick {
    plays: Vec<Play>,
}

impl Trick {
    /// An empty trick
    #[must_use]
    pub fn new() -> Self {
        Self {
            plays: Vec::with_capacity(PLAYERS),
        }
    }

    /// The suit of the first card, if any
    #[must_use]
    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|play| play.card.suit())
    }

    /// The seat that led, if any
    #[must_use]
    pub fn leader(&self) -> Option<Seat> {
        self.plays.first().map(|play| play.seat)
    }

    /// The plays so far, in playing order
    #[must_use]
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    /// Number of cards played
    #[must_use]
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Whether no card has been played yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Whether every seat has played
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.plays.len() == PLAYERS
    }

    /// Append a play
    ///
    /// # Errors
    /// - [`Error::TrickFull`] if four cards have been played
    /// - [`Error::DuplicatePlayer`] if the seat has already played
    pub fn add_play(&mut self, seat: Seat, card: Card) -> Result<(), Error> {
        if self.is_complete() {
            return Err(Error::TrickFull);
        }
        if self.plays.iter().any(|play| play.seat == seat) {
            return Err(Error::DuplicatePlayer(seat));
        }
        self.plays.push(Play { seat, card });
        Ok(())
    }

    /// The play currently taking the trick
    ///
    /// The highest trump wins if any trump was played, otherwise the highest
    /// card of the lead suit.  Discards never win.  Among equal ranks the
    /// earliest play is kept, which cannot arise with a standard deck.
    #[must_use]
    pub fn winning_play(&self, trump: Strain) -> Option<Play> {
        let lead = self.lead_suit()?;
        let trump = trump.suit();
        let candidates = |suit: Suit| {
            self.plays
                .iter()
                .copied()
                .filter(move |play| play.card.suit() == suit)
        };

        trump
            .and_then(|suit| highest(candidates(suit)))
            .or_else(|| highest(candidates(lead)))
    }

    /// The seat taking the trick, [`None`] if nothing has been played
    #[must_use]
    pub fn winner(&self, trump: Strain) -> Option<Seat> {
        self.winning_play(trump).map(|play| play.seat)
    }
}

/// First play of the highest rank
fn highest(plays: impl Iterator<Item = Play>) -> Option<Play> {
    plays.fold(None, |best: Option<Play>, play| match best {
        Some(best) if !play.card.rank().beats(best.card.rank()) => Some(best),
        _ => Some(play),
    })
}
