#[cfg(test)]
mod test;

use core::cmp::Ordering;
use core::fmt;
use core::num::NonZeroU8;
use core::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A suit of playing cards
///
/// Suits are convertible to [`Strain`]s since suits form a subset of strains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    /// ♣, convertible to [`Strain::Clubs`]
    Clubs,
    /// ♦, convertible to [`Strain::Diamonds`]
    Diamonds,
    /// ♥, convertible to [`Strain::Hearts`]
    Hearts,
    /// ♠, convertible to [`Strain::Spades`]
    Spades,
}

impl Suit {
    /// Suits in the ascending order, the order in this crate
    pub const ASC: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Suits in the descending order, the order of a written hand
    pub const DESC: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// The ASCII letter of the suit
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }

    /// The card symbol of the suit
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' | '♣' => Some(Self::Clubs),
            'D' | '♦' => Some(Self::Diamonds),
            'H' | '♥' => Some(Self::Hearts),
            'S' | '♠' => Some(Self::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use fmt::Write;
        f.write_char(self.symbol())
    }
}

/// Rank of a playing card
///
/// The discriminant is the conventional face value, 2 to 14.  Comparison does
/// not rely on it: [`Rank::strength`] is the single source of rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    /// 2
    Two = 2,
    /// 3
    Three,
    /// 4
    Four,
    /// 5
    Five,
    /// 6
    Six,
    /// 7
    Seven,
    /// 8
    Eight,
    /// 9
    Nine,
    /// 10, written `T`
    Ten,
    /// J
    Jack,
    /// Q
    Queen,
    /// K
    King,
    /// A, the highest rank
    Ace,
}

impl Rank {
    /// Ranks from the lowest to the highest
    pub const ASC: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Trick-taking strength, 1 for the deuce up to 13 for the ace
    #[must_use]
    pub const fn strength(self) -> u8 {
        match self {
            Self::Two => 1,
            Self::Three => 2,
            Self::Four => 3,
            Self::Five => 4,
            Self::Six => 5,
            Self::Seven => 6,
            Self::Eight => 7,
            Self::Nine => 8,
            Self::Ten => 9,
            Self::Jack => 10,
            Self::Queen => 11,
            Self::King => 12,
            Self::Ace => 13,
        }
    }

    /// Whether this rank beats another rank of the same suit
    #[must_use]
    pub const fn beats(self, other: Self) -> bool {
        self.strength() > other.strength()
    }

    /// The single character written for this rank
    #[must_use]
    pub const fn letter(self) -> char {
        b"23456789TJQKA"[self.strength() as usize - 1] as char
    }

    /// Look up a rank from its face value, 2 to 14
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            2..=14 => Some(Self::ASC[value as usize - 2]),
            _ => None,
        }
    }

    fn from_text(text: &str) -> Option<Self> {
        match text {
            "10" => Some(Self::Ten),
            _ => {
                let mut chars = text.chars();
                let c = chars.next()?.to_ascii_uppercase();
                if chars.next().is_some() {
                    return None;
                }
                Self::ASC.into_iter().find(|rank| rank.letter() == c)
            }
        }
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength().cmp(&other.strength())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use fmt::Write;
        f.write_char(self.letter())
    }
}

/// Denomination of a deal, a trump suit or notrump
///
/// We choose this representation over `Option<Suit>` so that "no trump" is a
/// named case rather than an absent value.  The derived order is clubs,
/// diamonds, hearts, spades, notrump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Strain {
    /// ♣
    Clubs,
    /// ♦
    Diamonds,
    /// ♥
    Hearts,
    /// ♠
    Spades,
    /// NT, the strain not proposing a trump suit
    Notrump,
}

impl Strain {
    /// Whether this strain is a suit
    #[must_use]
    pub const fn is_suit(self) -> bool {
        !matches!(self, Self::Notrump)
    }

    /// Whether this strain is notrump
    #[must_use]
    pub const fn is_notrump(self) -> bool {
        matches!(self, Self::Notrump)
    }

    /// The trump suit, if any
    #[must_use]
    pub const fn suit(self) -> Option<Suit> {
        match self {
            Self::Clubs => Some(Suit::Clubs),
            Self::Diamonds => Some(Suit::Diamonds),
            Self::Hearts => Some(Suit::Hearts),
            Self::Spades => Some(Suit::Spades),
            Self::Notrump => None,
        }
    }

    /// Helper constant for iteration over all strains
    pub const ALL: [Self; 5] = [
        Self::Clubs,
        Self::Diamonds,
        Self::Hearts,
        Self::Spades,
        Self::Notrump,
    ];
}

impl From<Suit> for Strain {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Clubs => Self::Clubs,
            Suit::Diamonds => Self::Diamonds,
            Suit::Hearts => Self::Hearts,
            Suit::Spades => Self::Spades,
        }
    }
}

/// Error raised when converting [`Strain::Notrump`] to a suit
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Notrump is not a suit")]
pub struct SuitFromNotrumpError;

impl TryFrom<Strain> for Suit {
    type Error = SuitFromNotrumpError;

    fn try_from(strain: Strain) -> Result<Self, Self::Error> {
        strain.suit().ok_or(SuitFromNotrumpError)
    }
}

impl fmt::Display for Strain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.suit() {
            Some(suit) => suit.fmt(f),
            None => f.write_str("NT"),
        }
    }
}

/// A playing card
///
/// Packed into one byte as `rank << 2 | suit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card(NonZeroU8);

impl Card {
    /// Create a card from suit and rank
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        match NonZeroU8::new((rank as u8) << 2 | suit as u8) {
            Some(bits) => Self(bits),
            // Every rank is at least 2, so the packed byte is never zero
            None => unreachable!(),
        }
    }

    /// The suit of the card
    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::ASC[(self.0.get() & 3) as usize]
    }

    /// The rank of the card
    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank::ASC[(self.0.get() >> 2) as usize - 2]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank().letter(), self.suit().letter())
    }
}

/// Error raised when a card cannot be parsed from text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid card {0:?}, expected rank and suit such as \"KC\" or \"10♥\"")]
pub struct ParseCardError(pub String);

static CARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(10|[2-9TJQKA])([CDHS♣♦♥♠])$").expect("card pattern is valid")
});

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseCardError(s.to_owned());
        let captures = CARD.captures(s.trim()).ok_or_else(error)?;
        let rank = Rank::from_text(&captures[1]).ok_or_else(error)?;
        let suit = captures[2]
            .chars()
            .next()
            .and_then(Suit::from_char)
            .ok_or_else(error)?;
        Ok(Self::new(suit, rank))
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
