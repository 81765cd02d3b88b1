use rand::prelude::*;
use uint::construct_uint;

use crate::card::{Card, N_SYMBOLS};
use crate::deck::{CardDeck, Deck};
use crate::error::{KeyError, Result};
use crate::letter::Letter;

construct_uint! {
    pub struct U256(4);
}

#[must_use]
pub fn identity() -> CardDeck {
    *Deck::default().cards()
}

#[must_use]
pub fn default_shuffle(seed: u64) -> CardDeck {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut cards = identity();
    cards.shuffle(&mut rng);
    cards
}

/// Keys the deck from a passphrase the way the hand cipher does it: one
/// round per letter, followed by an extra count cut by the letter value.
/// Anything that is not a letter is ignored.
#[must_use]
pub fn passphrase_shuffle(passphrase: &str) -> CardDeck {
    *Deck::from_passphrase(passphrase).cards()
}

fn factorial(n: u8) -> U256 {
    (2..=n).fold(U256::one(), |acc, k| acc * k)
}

/// Number of distinct keys, `54!`.
#[must_use]
pub fn n_keys() -> U256 {
    factorial(N_SYMBOLS)
}

/// Deck with the given index in the factorial number system, `0` being the
/// unkeyed deck. Digit `j` of place `i` moves the card `j` slots above `i`
/// down to `i`, so all zero digits leave the deck untouched.
#[must_use]
pub fn exact_shuffle(mut seed: U256) -> Option<CardDeck> {
    if seed >= n_keys() {
        return None;
    }
    let mut cards = identity();

    for i in 1..N_SYMBOLS as usize {
        let j = (seed % U256::from(i + 1)).as_usize();
        seed /= (i + 1) as u128;
        cards.swap(i, i - j);
    }

    Some(cards)
}

/// Inverse of [`exact_shuffle`].
#[must_use]
pub fn encode_shuffle(mut cards: CardDeck) -> U256 {
    let mut encode = U256::zero();
    for i in (1..N_SYMBOLS as usize).rev() {
        let card = Card::from_index(i);
        let pos = cards[..=i]
            .iter()
            .position(|c| c == &card)
            .expect("cards form a permutation");
        encode = encode * (i + 1) + (i - pos);
        cards.swap(pos, i);
    }
    encode
}

impl Deck {
    pub fn from_number(number: U256) -> Result<Self> {
        let cards =
            exact_shuffle(number).ok_or_else(|| KeyError::OutOfRange(number.to_string()))?;
        Self::from_key(&cards)
    }

    #[must_use]
    pub fn number(&self) -> U256 {
        encode_shuffle(*self.cards())
    }

    #[must_use]
    pub fn from_passphrase(passphrase: &str) -> Self {
        let mut deck = Self::default();
        for letter in passphrase
            .bytes()
            .filter_map(|b| Letter::from_ascii(b.to_ascii_uppercase()))
        {
            deck.round();
            deck.count_cut_by(letter.value());
        }
        deck
    }
}
