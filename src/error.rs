use crate::card::{Card, Suit};
use crate::table::Seat;
use thiserror::Error;

/// How a host should treat an [`enum@Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The game could not be set up, e.g. a wrong number of players
    Setup,
    /// An illegal play by a player; re-prompt the same player
    Legality,
    /// The host drove the engine out of protocol; this is a bug in the host
    Misuse,
    /// An internal invariant broke; this is a bug in the engine
    Invariant,
}

impl ErrorKind {
    /// Whether re-prompting the player can recover from the error
    #[must_use]
    pub const fn is_recoverable(self) -> bool {
        matches!(self, Self::Legality)
    }
}

/// Rejection of an operation on the engine
///
/// Every operation returning this error leaves the state it was called on
/// unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Whist is played by exactly four players
    #[error("Whist expects four players, got {0}")]
    InvalidPlayerCount(usize),

    /// Two seats were given the same player name
    #[error("Player {0:?} is seated more than once")]
    DuplicatePlayerName(String),

    /// Dealing did not end with an empty deck and four 13-card hands
    #[error("Dealing invariant violated: {0}")]
    DealingInvariantViolated(&'static str),

    /// The deck has fewer cards than requested
    #[error("Cannot deal {requested} cards from a deck of {remaining}")]
    NotEnoughCards {
        /// Number of cards asked for
        requested: usize,
        /// Number of cards left in the deck
        remaining: usize,
    },

    /// A player tried to play when it is someone else's turn
    #[error("{player} played out of turn, {expected} is to play")]
    OutOfTurn {
        /// The player who tried to play
        player: String,
        /// The player whose turn it is
        expected: String,
    },

    /// A player tried to play a card they do not hold
    #[error("{player} does not hold {card}")]
    CardNotInHand {
        /// The player who tried to play
        player: String,
        /// The card that is not in their hand
        card: Card,
    },

    /// A player tried to discard while holding a card of the lead suit
    #[error("{player} must follow {lead} instead of playing {card}")]
    MustFollowSuit {
        /// The player who tried to play
        player: String,
        /// The card that does not follow suit
        card: Card,
        /// The suit led to the trick
        lead: Suit,
    },

    /// A seat has already played to the trick
    #[error("{0} has already played to this trick")]
    DuplicatePlayer(Seat),

    /// The trick already has four cards
    #[error("The trick already has four cards")]
    TrickFull,

    /// All 13 tricks of the round have been played
    #[error("The round is already complete")]
    RoundAlreadyComplete,

    /// The round is scored only after all 13 tricks
    #[error("The round is not complete, {tricks_played} of 13 tricks played")]
    RoundNotComplete {
        /// Number of tricks completed so far
        tricks_played: usize,
    },

    /// A trick was credited to someone not playing this deal
    #[error("{0:?} is not a player of this deal")]
    UnregisteredWinner(String),

    /// The game was not started by this match
    #[error("The game is not tracked by this match")]
    GameNotTracked,

    /// The game has already been added to the match score
    #[error("The game has already been recorded")]
    GameAlreadyRecorded,

    /// A full trick was submitted without a card for the player to act
    #[error("No card given for {0}, who is to play")]
    MissingPlayerInTrickInput(String),

    /// A name that is not seated at the table
    #[error("{0:?} is not a player of this deal")]
    UnknownPlayer(String),

    /// A complete trick resolved to no winner
    #[error("A complete trick has no winner")]
    NoTrickWinner,
}

impl Error {
    /// The policy class of the error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPlayerCount(_)
            | Self::DuplicatePlayerName(_)
            | Self::DealingInvariantViolated(_)
            | Self::NotEnoughCards { .. } => ErrorKind::Setup,

            Self::OutOfTurn { .. }
            | Self::CardNotInHand { .. }
            | Self::MustFollowSuit { .. }
            | Self::DuplicatePlayer(_)
            | Self::TrickFull => ErrorKind::Legality,

            Self::RoundAlreadyComplete
            | Self::RoundNotComplete { .. }
            | Self::UnregisteredWinner(_)
            | Self::GameNotTracked
            | Self::GameAlreadyRecorded
            | Self::MissingPlayerInTrickInput(_)
            | Self::UnknownPlayer(_) => ErrorKind::Misuse,

            Self::NoTrickWinner => ErrorKind::Invariant,
        }
    }

    /// Whether the error reveals a defect rather than a rejected request
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::DealingInvariantViolated(_) | Self::NoTrickWinner)
    }
}
