
use crate::card::{Card, Rank, Suit};
use core::fmt;
use core::ops::{BitAnd, BitOr, BitXor, Index, IndexMut, Not, Sub};
use core::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A bitset whose size is known at compile time
pub trait SmallSet<T>: Copy + Eq + BitAnd + BitOr + BitXor + Not + Sub {
    /// The empty set
    const EMPTY: Self;

    /// The set containing all possible values
    const ALL: Self;

    /// The number of elements in the set
    #[must_use]
    fn len(self) -> usize;

    /// Whether the set is empty
    #[must_use]
    fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    /// Whether the set contains a value
    fn contains(self, value: T) -> bool;

    /// Insert a value into the set
    fn insert(&mut self, value: T) -> bool;

    /// Remove a value from the set
    fn remove(&mut self, value: T) -> bool;
}

/// A set of cards of the same suit
///
/// Bit `n` stands for the rank with face value `n`, so only bits 2 to 14 are
/// ever set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Holding(u16);

impl SmallSet<Rank> for Holding {
    const EMPTY: Self = Self(0);
    const ALL: Self = Self(0x7FFC);

    fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    fn contains(self, rank: Rank) -> bool {
        self.0 & 1 << rank as u8 != 0
    }

    fn insert(&mut self, rank: Rank) -> bool {
        let inserted = !self.contains(rank);
        self.0 |= 1 << rank as u8;
        inserted
    }

    fn remove(&mut self, rank: Rank) -> bool {
        let removed = self.contains(rank);
        self.0 &= !(1 << rank as u8);
        removed
    }
}

impl Holding {
    /// As a bitset of ranks
    #[must_use]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Create a holding from a bitset of ranks
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Iterate over the ranks in the ascending order
    pub fn iter(self) -> impl DoubleEndedIterator<Item = Rank> {
        Rank::ASC
            .into_iter()
            .filter(move |&rank| self.contains(rank))
    }

    /// The highest rank in the holding
    #[must_use]
    pub fn highest(self) -> Option<Rank> {
        self.iter().next_back()
    }
}

impl BitAnd for Holding {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for Holding {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitXor for Holding {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Not for Holding {
    type Output = Self;

    fn not(self) -> Self {
        Self::ALL ^ self
    }
}

impl Sub for Holding {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self & !rhs
    }
}

impl fmt::Display for Holding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use fmt::Write;
        self.iter().rev().try_for_each(|rank| f.write_char(rank.letter()))
    }
}

/// Error raised when a holding, hand, or deal cannot be parsed
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseHandError {
    /// Ranks are not written from the highest to the lowest without repeats
    #[error("Ranks in a holding must be distinct and descending, e.g. AKT2")]
    InvalidHolding,

    /// A hand is not made of four dot-separated holdings
    #[error("A hand must contain four suits separated by dots")]
    NotFourSuits,
}

static HOLDING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)A?K?Q?J?(?:T|10)?9?8?7?6?5?4?3?2?$").expect("holding pattern is valid")
});

impl FromStr for Holding {
    type Err = ParseHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !HOLDING.is_match(s) {
            return Err(ParseHandError::InvalidHolding);
        }

        let ranks = s.replace("10", "T");
        ranks.chars().try_fold(Self::EMPTY, |mut holding, c| {
            let rank = Rank::ASC
                .into_iter()
                .find(|rank| rank.letter() == c.to_ascii_uppercase())
                .ok_or(ParseHandError::InvalidHolding)?;
            holding.insert(rank);
            Ok(holding)
        })
    }
}

/// A hand of playing cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hand(pub [Holding; 4]);

impl Index<Suit> for Hand {
    type Output = Holding;

    fn index(&self, suit: Suit) -> &Holding {
        &self.0[suit as usize]
    }
}

impl IndexMut<Suit> for Hand {
    fn index_mut(&mut self, suit: Suit) -> &mut Holding {
        &mut self.0[suit as usize]
    }
}

impl Hand {
    /// As a bitset of cards, 16 bits per suit from clubs to spades
    #[must_use]
    pub const fn to_bits(self) -> u64 {
        self.0[0].0 as u64
            | (self.0[1].0 as u64) << 16
            | (self.0[2].0 as u64) << 32
            | (self.0[3].0 as u64) << 48
    }

    /// Create a hand from a bitset of cards
    ///
    /// This function removes invalid cards.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_bits(bits: u64) -> Self {
        Self([
            Holding::from_bits(bits as u16),
            Holding::from_bits((bits >> 16) as u16),
            Holding::from_bits((bits >> 32) as u16),
            Holding::from_bits((bits >> 48) as u16),
        ])
    }

    /// Iterate over the cards, clubs first, each suit in the ascending order
    pub fn iter(self) -> impl Iterator<Item = Card> {
        Suit::ASC
            .into_iter()
            .flat_map(move |suit| self[suit].iter().map(move |rank| Card::new(suit, rank)))
    }

    /// Whether the hand holds any card of a suit
    #[must_use]
    pub fn has_suit(self, suit: Suit) -> bool {
        !self[suit].is_empty()
    }
}

impl SmallSet<Card> for Hand {
    const EMPTY: Self = Self([Holding::EMPTY; 4]);
    const ALL: Self = Self([Holding::ALL; 4]);

    fn len(self) -> usize {
        self.to_bits().count_ones() as usize
    }

    fn contains(self, card: Card) -> bool {
        self[card.suit()].contains(card.rank())
    }

    fn insert(&mut self, card: Card) -> bool {
        self[card.suit()].insert(card.rank())
    }

    fn remove(&mut self, card: Card) -> bool {
        self[card.suit()].remove(card.rank())
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, |mut hand, card| {
            hand.insert(card);
            hand
        })
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [spades, hearts, diamonds, clubs] = Suit::DESC.map(|suit| self[suit]);
        write!(f, "{spades}.{hearts}.{diamonds}.{clubs}")
    }
}

impl FromStr for Hand {
    type Err = ParseHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "-" {
            return Ok(Self::EMPTY);
        }

        let holdings: Vec<&str> = s.split('.').collect();
        let &[spades, hearts, diamonds, clubs] = holdings.as_slice() else {
            return Err(ParseHandError::NotFourSuits);
        };

        Ok(Self([
            clubs.parse()?,
            diamonds.parse()?,
            hearts.parse()?,
            spades.parse()?,
        ]))
    }
}

impl BitAnd for Hand {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::from_bits(self.to_bits() & rhs.to_bits())
    }
}

impl BitOr for Hand {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from_bits(self.to_bits() | rhs.to_bits())
    }
}

impl BitXor for Hand {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self::from_bits(self.to_bits() ^ rhs.to_bits())
    }
}

impl Not for Hand {
    type Output = Self;

    fn not(self) -> Self {
        Self::ALL ^ self
    }
}

impl Sub for Hand {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self & !rhs
    }
}

impl Serialize for Hand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
