//! Error types for the Pontifex library.

use thiserror::Error;

use crate::card::{Card, N_SYMBOLS};

/// Reasons a key cannot be turned into a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Key does not hold exactly one card per deck position.
    #[error("key holds {found} cards, expected {}", N_SYMBOLS)]
    WrongSize { found: usize },

    /// The same card was given twice, so some other card is missing.
    #[error("card {0} appears more than once in the key")]
    Duplicate(Card),

    /// Token that names no card or joker.
    #[error("unrecognized card `{0}`")]
    UnknownToken(String),

    /// Permutation index at or above 54!.
    #[error("key number {0} is out of range")]
    OutOfRange(String),
}

/// Errors produced by the Pontifex library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Key is not a permutation of the 54 symbols.
    #[error("invalid key: {0}")]
    InvalidKey(#[from] KeyError),

    /// Negative keystream length.
    #[error("keystream length must not be negative, got {0}")]
    InvalidLength(i64),

    /// Deck kept landing on a joker as output card.
    #[error("keystream stalled after {rounds} rounds without output")]
    KeystreamStalled { rounds: usize },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
