use core::fmt;
use core::str::FromStr;

use crate::card::{Card, N_RANKS, N_SUITS};
use crate::deck::Deck;
use crate::error::{KeyError, Result};
use crate::letter::Letter;

// bridge order, which is also the order of the card values
pub const SYMBOLS: [&str; N_SUITS as usize] = ["♣", "♦", "♥", "♠"];
pub const SUITS: [&str; N_SUITS as usize] = ["C", "D", "H", "S"];
pub const NUMBERS: [&str; N_RANKS as usize] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// Prints a card the way a player reads it, e.g. `10♥`, with `JA`/`JB` for jokers.
pub struct CardName(pub Card);

impl fmt::Display for CardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Card::JOKER_A => write!(f, "JA"),
            Card::JOKER_B => write!(f, "JB"),
            c => {
                let (rank, suit) = c.split();
                write!(f, "{}{}", NUMBERS[rank as usize], SYMBOLS[suit as usize])
            }
        }
    }
}

// numeric form, which is also what parse_key reads back
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::JOKER_A => write!(f, "A"),
            Self::JOKER_B => write!(f, "B"),
            c => write!(f, "{}", c.value()),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Card {
    type Err = KeyError;

    #[allow(clippy::cast_possible_truncation)]
    fn from_str(token: &str) -> Result<Self, KeyError> {
        let unknown = || KeyError::UnknownToken(token.to_string());
        let upper = token.trim().to_ascii_uppercase();

        match upper.as_str() {
            "A" | "JA" => return Ok(Self::JOKER_A),
            "B" | "JB" => return Ok(Self::JOKER_B),
            _ => {}
        }

        if let Ok(value) = upper.parse::<u8>() {
            return Self::from_value(value)
                .filter(|c| !c.is_joker())
                .ok_or_else(unknown);
        }

        // card name: rank followed by a one letter suit
        let split = upper
            .len()
            .checked_sub(1)
            .filter(|&i| upper.is_char_boundary(i))
            .ok_or_else(unknown)?;
        let (rank, suit) = upper.split_at(split);
        let rank = NUMBERS.iter().position(|&n| n == rank).ok_or_else(unknown)?;
        let suit = SUITS.iter().position(|&s| s == suit).ok_or_else(unknown)?;

        Ok(Self::new(rank as u8, suit as u8))
    }
}

/// Reads a key written as 54 cards separated by whitespace or commas.
pub fn parse_key(text: &str) -> Result<Deck> {
    let cards = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<Card>, KeyError>>()?;
    Deck::from_key(&cards)
}
