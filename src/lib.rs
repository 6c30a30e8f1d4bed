//! Rules engine for four-player Whist
//!
//! A [`Match`] seats four players and starts games.  Each game is a
//! [`Round`] of 13 tricks over a [`Deal`], where the last card dealt sets the
//! trump suit unless the game pins one.  Players must follow the suit led
//! when they can, and each trick goes to the highest trump, or else to the
//! highest card of the suit led.  A partnership scores a point for every
//! trick beyond six.
//!
//! Every rejected operation returns an [`Error`] and leaves the state as it
//! was, so a host can re-prompt the player.
#![warn(missing_docs)]

mod card;
mod deal;
mod deck;
mod error;
mod game;
mod hand;
mod round;
mod score;
mod table;
mod test;
mod trick;

pub use card::*;
pub use deal::*;
pub use deck::*;
pub use error::*;
pub use game::*;
pub use hand::*;
pub use round::*;
pub use score::*;
pub use table::*;
pub use trick::*;
