#[cfg(test)]
mod test;

use crate::card::Strain;
use crate::deal::Deal;
use crate::deck::Deck;
use crate::error::Error;
use crate::round::{Round, TrumpPolicy};
use crate::table::{Partnerships, Table};
use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_MATCH_ID: AtomicU64 = AtomicU64::new(0);

/// Handle of a game started by a [`Match`]
///
/// A handle is only valid for the match that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameId {
    match_id: u64,
    index: usize,
}

impl GameId {
    /// Position of the game in its match, starting from 0
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "game {} of match {}", self.index, self.match_id)
    }
}

#[derive(Debug)]
struct Game {
    round: Round,
    recorded: bool,
}

/// A series of deals between the same four players
///
/// Each game is a [`Round`] started by the match.  Points of a finished game
/// are added to the running totals once it is recorded.
#[derive(Debug)]
pub struct Match {
    id: u64,
    table: Table,
    games: Vec<Game>,
    totals: Partnerships<u32>,
}

impl Match {
    /// Seat four players for a match
    ///
    /// # Errors
    /// [`Error::InvalidPlayerCount`] or [`Error::DuplicatePlayerName`] from
    /// [`Table::new`]
    pub fn new<I>(players: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Ok(Self {
            id: NEXT_MATCH_ID.fetch_add(1, Ordering::Relaxed),
            table: Table::new(players)?,
            games: Vec::new(),
            totals: Partnerships::default(),
        })
    }

    /// The players of the match
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Deal a new game
    ///
    /// The trump is the suit of the last card dealt unless `trump` pins it.
    ///
    /// # Errors
    /// [`Error::DealingInvariantViolated`] from [`Deal::new`]
    pub fn start_game(
        &mut self,
        trump: Option<Strain>,
        rng: &mut (impl rand::Rng + ?Sized),
    ) -> Result<GameId, Error> {
        let round = Round::new(self.table.clone(), TrumpPolicy::from(trump), rng)?;
        Ok(self.track(round))
    }

    /// Deal a new game from a deck in its given order
    ///
    /// # Errors
    /// [`Error::DealingInvariantViolated`] from [`Deal::with_deck`]
    pub fn start_game_with_deck(
        &mut self,
        deck: Deck,
        trump: Option<Strain>,
    ) -> Result<GameId, Error> {
        let deal = Deal::with_deck(self.table.clone(), deck)?;
        Ok(self.track(Round::with_deal(deal, TrumpPolicy::from(trump))))
    }

    fn track(&mut self, round: Round) -> GameId {
        let id = GameId {
            match_id: self.id,
            index: self.games.len(),
        };
        tracing::debug!(game = %id, trump = %round.trump(), "game started");
        self.games.push(Game {
            round,
            recorded: false,
        });
        id
    }

    fn get(&self, id: GameId) -> Result<&Game, Error> {
        if id.match_id != self.id {
            return Err(Error::GameNotTracked);
        }
        self.games.get(id.index).ok_or(Error::GameNotTracked)
    }

    /// A game of this match
    ///
    /// # Errors
    /// [`Error::GameNotTracked`] if the game was started by another match
    pub fn game(&self, id: GameId) -> Result<&Round, Error> {
        self.get(id).map(|game| &game.round)
    }

    /// A game of this match, to play cards in
    ///
    /// # Errors
    /// [`Error::GameNotTracked`] if the game was started by another match
    pub fn game_mut(&mut self, id: GameId) -> Result<&mut Round, Error> {
        self.get(id)?;
        Ok(&mut self.games[id.index].round)
    }

    /// Games in the order they were started
    pub fn games(&self) -> impl Iterator<Item = (GameId, &Round)> {
        let match_id = self.id;
        self.games
            .iter()
            .enumerate()
            .map(move |(index, game)| (GameId { match_id, index }, &game.round))
    }

    /// Whether the points of a game are in the totals
    ///
    /// # Errors
    /// [`Error::GameNotTracked`] if the game was started by another match
    pub fn is_recorded(&self, id: GameId) -> Result<bool, Error> {
        self.get(id).map(|game| game.recorded)
    }

    /// Add the points of a finished game to the totals
    ///
    /// Returns the points of the game.
    ///
    /// # Errors
    /// - [`Error::GameNotTracked`] if the game was started by another match
    /// - [`Error::RoundNotComplete`] if the game is still being played
    /// - [`Error::GameAlreadyRecorded`] if the points are already counted
    pub fn record_game(&mut self, id: GameId) -> Result<Partnerships<u8>, Error> {
        let game = self.get(id)?;
        let points = game.round.score()?;
        if game.recorded {
            return Err(Error::GameAlreadyRecorded);
        }

        self.games[id.index].recorded = true;
        self.totals += points.map(u32::from);
        tracing::info!(
            game = %id,
            north_south = points.north_south,
            east_west = points.east_west,
            total_north_south = self.totals.north_south,
            total_east_west = self.totals.east_west,
            "game recorded"
        );
        Ok(points)
    }

    /// Running totals of recorded games
    #[must_use]
    pub fn total_score(&self) -> Partnerships<u32> {
        self.totals
    }
}
