
use crate::card::{Card, Strain};
use crate::deal::{Deal, TRICKS_PER_DEAL};
use crate::error::Error;
use crate::hand::{Hand, SmallSet as _};
use crate::table::{Partnerships, Seat, Table};
use crate::trick::Trick;
use core::num::Wrapping;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How the trump suit of a round is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrumpPolicy {
    /// The suit of the last card dealt
    #[default]
    LastCardDealt,
    /// A strain fixed before dealing, possibly notrump
    Fixed(Strain),
}

impl From<Option<Strain>> for TrumpPolicy {
    fn from(trump: Option<Strain>) -> Self {
        trump.map_or(Self::LastCardDealt, Self::Fixed)
    }
}

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Fewer than 13 tricks have been completed
    InProgress,
    /// All 13 tricks have been completed
    Complete,
}

/// Snapshot of the progress of a round
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundState {
    /// The player who led, or is to lead, the current trick
    pub leader: String,
    /// The player to act
    pub next_player: String,
    /// Number of completed tricks
    pub tricks_played: usize,
    /// Number of tricks still to play
    pub tricks_remaining: usize,
    /// The trump strain
    pub trump: Strain,
    /// Whether the round is over
    pub phase: Phase,
}

/// Trick-by-trick play of one deal
///
/// North leads the first trick.  Play goes clockwise, and the winner of each
/// trick leads the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    deal: Deal,
    trump: Strain,
    current: Trick,
    completed: Vec<Trick>,
    leader: Seat,
    next: Seat,
}

impl Round {
    /// Deal a shuffled deck to the table and start the first trick
    ///
    /// # Errors
    /// [`Error::DealingInvariantViolated`] from [`Deal::new`]
    pub fn new(
        table: Table,
        policy: TrumpPolicy,
        rng: &mut (impl rand::Rng + ?Sized),
    ) -> Result<Self, Error> {
        Ok(Self::with_deal(Deal::new(table, rng)?, policy))
    }

    /// Start the first trick of an already dealt deal
    #[must_use]
    pub fn with_deal(deal: Deal, policy: TrumpPolicy) -> Self {
        let trump = match policy {
            TrumpPolicy::LastCardDealt => deal.trump_suit().into(),
            TrumpPolicy::Fixed(strain) => strain,
        };
        Self {
            deal,
            trump,
            current: Trick::new(),
            completed: Vec::with_capacity(TRICKS_PER_DEAL),
            leader: Seat::North,
            next: Seat::North,
        }
    }

    /// The trump strain for the whole round
    #[must_use]
    pub fn trump(&self) -> Strain {
        self.trump
    }

    /// The deal being played
    #[must_use]
    pub fn deal(&self) -> &Deal {
        &self.deal
    }

    /// The seat to act
    #[must_use]
    pub fn expected_seat(&self) -> Seat {
        self.next
    }

    /// The player to act
    #[must_use]
    pub fn expected_player(&self) -> &str {
        &self.deal.table()[self.next]
    }

    /// The player who led, or is to lead, the current trick
    #[must_use]
    pub fn leader(&self) -> &str {
        &self.deal.table()[self.leader]
    }

    /// The trick being played
    #[must_use]
    pub fn current_trick(&self) -> &Trick {
        &self.current
    }

    /// Tricks completed so far, in playing order
    #[must_use]
    pub fn completed_tricks(&self) -> &[Trick] {
        &self.completed
    }

    /// Number of tricks completed so far
    #[must_use]
    pub fn tricks_played(&self) -> usize {
        self.completed.len()
    }

    /// Whether all 13 tricks have been played
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed.len() >= TRICKS_PER_DEAL
    }

    /// The lifecycle phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_complete() {
            Phase::Complete
        } else {
            Phase::InProgress
        }
    }

    /// A copy of the cards a player holds
    ///
    /// # Errors
    /// [`Error::UnknownPlayer`] if the player is not at the table
    pub fn hand(&self, player: &str) -> Result<Hand, Error> {
        self.deal.hand(player)
    }

    /// Cards the player may play now
    ///
    /// The set is empty unless it is the player's turn.
    ///
    /// # Errors
    /// [`Error::UnknownPlayer`] if the player is not at the table
    pub fn legal_cards(&self, player: &str) -> Result<Hand, Error> {
        self.deal.hand(player)?;
        if self.is_complete() || player != self.expected_player() {
            return Ok(Hand::EMPTY);
        }
        Ok(self.deal.legal_cards(self.next, &self.current))
    }

    /// Play a card in turn
    ///
    /// Returns the winner of the trick if this card completes it, after
    /// which the winner is to lead.
    ///
    /// # Errors
    /// - [`Error::RoundAlreadyComplete`] after the 13th trick
    /// - [`Error::OutOfTurn`] if another player is to act
    /// - Any error from [`Deal::play_card`]
    ///
    /// The round is unchanged on error.
    pub fn play(&mut self, player: &str, card: Card) -> Result<Option<String>, Error> {
        let result = self.advance(player, card);
        if let Err(error) = &result {
            tracing::debug!(player, card = %card, %error, "play rejected");
        }
        result
    }

    fn advance(&mut self, player: &str, card: Card) -> Result<Option<String>, Error> {
        if self.is_complete() {
            return Err(Error::RoundAlreadyComplete);
        }
        if player != self.expected_player() {
            return Err(Error::OutOfTurn {
                player: player.to_owned(),
                expected: self.expected_player().to_owned(),
            });
        }

        let seat = self.deal.play_card(player, card, &mut self.current)?;
        self.next = seat + Wrapping(1);

        if !self.current.is_complete() {
            return Ok(None);
        }

        let winner = self.current.winner(self.trump).ok_or(Error::NoTrickWinner)?;
        self.deal.record_seat(winner);
        self.completed.push(core::mem::take(&mut self.current));
        self.leader = winner;
        self.next = winner;

        let name = self.deal.table()[winner].to_owned();
        tracing::info!(winner = %name, seat = %winner, trick = self.completed.len(), "trick resolved");

        if self.is_complete() {
            let points = self.deal.partnership_points();
            tracing::info!(
                north_south = points.north_south,
                east_west = points.east_west,
                "round complete"
            );
        }
        Ok(Some(name))
    }

    /// Play the rest of the current trick from a card for each player
    ///
    /// Cards are taken from `plays` for each player to act, in turn order,
    /// until the trick completes.  Entries for players not to act are ignored.
    /// Returns the winner of the trick.
    ///
    /// # Errors
    /// - [`Error::MissingPlayerInTrickInput`] if a player to act has no card
    /// - Any error from [`Round::play`]
    ///
    /// The round is unchanged on error, even if some cards were legal.
    pub fn play_trick(&mut self, plays: &HashMap<String, Card>) -> Result<String, Error> {
        if self.is_complete() {
            return Err(Error::RoundAlreadyComplete);
        }

        let mut scratch = self.clone();
        let winner = loop {
            let player = scratch.expected_player().to_owned();
            let card = *plays
                .get(&player)
                .ok_or_else(|| Error::MissingPlayerInTrickInput(player.clone()))?;
            if let Some(winner) = scratch.play(&player, card)? {
                break winner;
            }
        };

        *self = scratch;
        Ok(winner)
    }

    /// Points for each partnership
    ///
    /// # Errors
    /// [`Error::RoundNotComplete`] until all 13 tricks have been played
    pub fn score(&self) -> Result<Partnerships<u8>, Error> {
        if !self.is_complete() {
            return Err(Error::RoundNotComplete {
                tricks_played: self.completed.len(),
            });
        }
        Ok(self.deal.partnership_points())
    }

    /// Snapshot of the progress
    #[must_use]
    pub fn state(&self) -> RoundState {
        RoundState {
            leader: self.leader().to_owned(),
            next_player: self.expected_player().to_owned(),
            tricks_played: self.completed.len(),
            tricks_remaining: TRICKS_PER_DEAL - self.completed.len(),
            trump: self.trump,
            phase: self.phase(),
        }
    }

    /// Cards left in all hands, plus cards in the current trick
    ///
    /// Always the full deck; a round never loses or duplicates a card.
    #[must_use]
    pub fn cards_accounted(&self) -> usize {
        let held: usize = Seat::ALL.iter().map(|&seat| self.deal[seat].len()).sum();
        held + self.deal.played().len()
    }
}
