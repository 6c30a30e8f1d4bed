
use crate::error::Error;
use core::fmt;
use core::num::Wrapping;
use core::ops::{Add, AddAssign, Index, IndexMut, Sub};
use serde::{Deserialize, Serialize};

/// Number of players at a Whist table
pub const PLAYERS: usize = 4;

/// Position at the table
///
/// Seats are listed in the playing order, which is clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Seat {
    /// First seat, partner of [`Seat::South`]
    North,
    /// Second seat, partner of [`Seat::West`]
    East,
    /// Third seat, partner of [`Seat::North`]
    South,
    /// Fourth seat, partner of [`Seat::East`]
    West,
}

impl Seat {
    /// Seats in the playing order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The partnership this seat plays for
    #[must_use]
    pub const fn partnership(self) -> Partnership {
        match self {
            Self::North | Self::South => Partnership::NorthSouth,
            Self::East | Self::West => Partnership::EastWest,
        }
    }

    /// The seat across the table
    #[must_use]
    pub fn partner(self) -> Self {
        self + Wrapping(2)
    }
}

impl Add<Wrapping<u8>> for Seat {
    type Output = Self;

    fn add(self, rhs: Wrapping<u8>) -> Self {
        Self::ALL[usize::from((Wrapping(self as u8) + rhs).0 & 3)]
    }
}

impl Sub<Wrapping<u8>> for Seat {
    type Output = Self;

    fn sub(self, rhs: Wrapping<u8>) -> Self {
        Self::ALL[usize::from((Wrapping(self as u8) - rhs).0 & 3)]
    }
}

impl From<Seat> for char {
    fn from(seat: Seat) -> Self {
        match seat {
            Seat::North => 'N',
            Seat::East => 'E',
            Seat::South => 'S',
            Seat::West => 'W',
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use fmt::Write;
        f.write_char(char::from(*self))
    }
}

bitflags::bitflags! {
    /// A set of seats
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SeatFlags: u8 {
        /// The empty set
        const EMPTY = 0;
        /// The set containing all seats
        const ALL = 0b1111;
        /// The set containing [`Seat::North`]
        const NORTH = 0b0001;
        /// The set containing [`Seat::East`]
        const EAST = 0b0010;
        /// The set containing [`Seat::South`]
        const SOUTH = 0b0100;
        /// The set containing [`Seat::West`]
        const WEST = 0b1000;
        /// The set containing the north-south pair
        const NS = Self::NORTH.bits() | Self::SOUTH.bits();
        /// The set containing the east-west pair
        const EW = Self::EAST.bits() | Self::WEST.bits();
    }
}

const _: () = assert!(matches!(SeatFlags::all(), SeatFlags::ALL));
const _: () = assert!(matches!(SeatFlags::NS.union(SeatFlags::EW), SeatFlags::ALL));
const _: () = assert!(matches!(SeatFlags::NS.intersection(SeatFlags::EW), SeatFlags::EMPTY));

impl From<Seat> for SeatFlags {
    fn from(seat: Seat) -> Self {
        Self::from_bits_retain(1 << seat as u8)
    }
}

impl SeatFlags {
    /// Iterate over the seats in the set, in the playing order
    pub fn seats(self) -> impl Iterator<Item = Seat> {
        Seat::ALL
            .into_iter()
            .filter(move |&seat| self.contains(SeatFlags::from(seat)))
    }
}

/// One of the two pairs of partners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Partnership {
    /// Seats 0 and 2
    NorthSouth,
    /// Seats 1 and 3
    EastWest,
}

impl Partnership {
    /// Both partnerships
    pub const ALL: [Self; 2] = [Self::NorthSouth, Self::EastWest];

    /// The seats of the partnership
    #[must_use]
    pub const fn seats(self) -> SeatFlags {
        match self {
            Self::NorthSouth => SeatFlags::NS,
            Self::EastWest => SeatFlags::EW,
        }
    }

    /// The other partnership
    #[must_use]
    pub const fn opponents(self) -> Self {
        match self {
            Self::NorthSouth => Self::EastWest,
            Self::EastWest => Self::NorthSouth,
        }
    }
}

/// A value for each partnership, such as tricks or points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Partnerships<T> {
    /// The value for [`Partnership::NorthSouth`]
    pub north_south: T,
    /// The value for [`Partnership::EastWest`]
    pub east_west: T,
}

impl<T> Partnerships<T> {
    /// Create from the values of both partnerships
    pub const fn new(north_south: T, east_west: T) -> Self {
        Self {
            north_south,
            east_west,
        }
    }

    /// Apply a function to both values
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Partnerships<U> {
        Partnerships {
            north_south: f(self.north_south),
            east_west: f(self.east_west),
        }
    }
}

impl<T> Index<Partnership> for Partnerships<T> {
    type Output = T;

    fn index(&self, partnership: Partnership) -> &T {
        match partnership {
            Partnership::NorthSouth => &self.north_south,
            Partnership::EastWest => &self.east_west,
        }
    }
}

impl<T> IndexMut<Partnership> for Partnerships<T> {
    fn index_mut(&mut self, partnership: Partnership) -> &mut T {
        match partnership {
            Partnership::NorthSouth => &mut self.north_south,
            Partnership::EastWest => &mut self.east_west,
        }
    }
}

impl<T: AddAssign> AddAssign for Partnerships<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.north_south += rhs.north_south;
        self.east_west += rhs.east_west;
    }
}

/// The names of the four players, seated in the playing order
///
/// Player names are opaque to the engine; they only have to be distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table([String; PLAYERS]);

impl Table {
    /// Seat players in the given order, starting from [`Seat::North`]
    ///
    /// # Errors
    /// - [`Error::InvalidPlayerCount`] unless exactly four names are given
    /// - [`Error::DuplicatePlayerName`] if a name appears twice
    pub fn new<I>(players: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let names: Vec<String> = players.into_iter().map(Into::into).collect();
        let count = names.len();
        let names: [String; PLAYERS] = names
            .try_into()
            .map_err(|_| Error::InvalidPlayerCount(count))?;

        if let Some(name) = names
            .iter()
            .enumerate()
            .find_map(|(i, name)| names[..i].contains(name).then_some(name))
        {
            return Err(Error::DuplicatePlayerName(name.clone()));
        }

        Ok(Self(names))
    }

    /// The seat of a player
    #[must_use]
    pub fn seat_of(&self, player: &str) -> Option<Seat> {
        self.0
            .iter()
            .position(|name| name == player)
            .map(|i| Seat::ALL[i])
    }

    /// Iterate over the players in the playing order
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &str)> {
        Seat::ALL.into_iter().zip(self.0.iter().map(String::as_str))
    }
}

impl Index<Seat> for Table {
    type Output = str;

    fn index(&self, seat: Seat) -> &str {
        &self.0[seat as usize]
    }
}
