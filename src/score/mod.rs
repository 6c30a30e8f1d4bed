#[cfg(test)]
mod test;

use crate::error::Error;
use crate::table::{Partnership, Partnerships, Seat, Table, PLAYERS};
use core::ops::Index;

/// Tricks a partnership must take before scoring
pub const BOOK: u8 = 6;

/// Points for the tricks a partnership took in a deal
///
/// Each odd trick, i.e. a trick beyond the book of six, is worth one point.
#[must_use]
pub const fn points(tricks: u8) -> u8 {
    tricks.saturating_sub(BOOK)
}

/// Tricks won by each player of a deal
///
/// Counters saturate instead of overflowing.  Points saturate at
/// [`u8::MAX`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    table: Table,
    tricks: [u32; PLAYERS],
}

impl Scoreboard {
    /// A scoreboard with no tricks taken
    #[must_use]
    pub fn new(table: Table) -> Self {
        Self {
            table,
            tricks: [0; PLAYERS],
        }
    }

    /// Credit a trick to a player
    ///
    /// # Errors
    /// [`Error::UnregisteredWinner`] if the player is not at the table
    pub fn record_trick(&mut self, winner: &str) -> Result<Seat, Error> {
        let seat = self
            .table
            .seat_of(winner)
            .ok_or_else(|| Error::UnregisteredWinner(winner.to_owned()))?;
        self.record_seat(seat);
        Ok(seat)
    }

    /// Credit a trick to a seat
    pub fn record_seat(&mut self, seat: Seat) {
        let count = &mut self.tricks[seat as usize];
        *count = count.saturating_add(1);
    }

    /// Tricks taken by a player, [`None`] if not at the table
    #[must_use]
    pub fn tricks_won(&self, player: &str) -> Option<u32> {
        self.table.seat_of(player).map(|seat| self[seat])
    }

    /// Total tricks taken so far
    #[must_use]
    pub fn total(&self) -> u32 {
        self.tricks.iter().fold(0, |acc, &count| acc.saturating_add(count))
    }

    /// Tricks taken by each partnership
    #[must_use]
    pub fn partnership_tricks(&self) -> Partnerships<u32> {
        let mut tricks = Partnerships::default();
        for partnership in Partnership::ALL {
            tricks[partnership] = partnership
                .seats()
                .seats()
                .fold(0, |acc: u32, seat| acc.saturating_add(self[seat]));
        }
        tricks
    }

    /// Points earned by each partnership
    #[must_use]
    pub fn partnership_points(&self) -> Partnerships<u8> {
        self.partnership_tricks()
            .map(|tricks| points(u8::try_from(tricks).unwrap_or(u8::MAX)))
    }
}

impl Index<Seat> for Scoreboard {
    type Output = u32;

    fn index(&self, seat: Seat) -> &u32 {
        &self.tricks[seat as usize]
    }
}
