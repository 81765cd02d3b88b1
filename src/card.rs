use static_assertions::const_assert;

use crate::letter::Letter;

pub const N_SUITS: u8 = 4;
pub const N_RANKS: u8 = 13;
pub const N_CARDS: u8 = N_SUITS * N_RANKS;
pub const N_JOKERS: u8 = 2;
pub const N_SYMBOLS: u8 = N_CARDS + N_JOKERS;

// both jokers count as the same value when cutting or reading the output card
pub const JOKER_VALUE: u8 = N_CARDS + 1;

// the permutation check packs every symbol into one bit of a u64
const_assert!((N_SYMBOLS as u32) <= u64::BITS);

pub(crate) const FULL_MASK: u64 = (1u64 << N_SYMBOLS) - 1;

/// One symbol of the Solitaire deck.
///
/// Cards are numbered `1..=52` in bridge order (clubs, diamonds, hearts,
/// spades), the two jokers take `53` and `54`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub const JOKER_A: Self = Self(N_CARDS + 1);
    pub const JOKER_B: Self = Self(N_CARDS + 2);

    #[must_use]
    pub const fn new(rank: u8, suit: u8) -> Self {
        debug_assert!(rank < N_RANKS && suit < N_SUITS);
        Self(suit * N_RANKS + rank + 1)
    }

    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if value >= 1 && value <= N_SYMBOLS {
            Some(Self(value))
        } else {
            None
        }
    }

    // index is the 0-based position of the card in the unkeyed deck
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_index(index: usize) -> Self {
        debug_assert!(index < N_SYMBOLS as usize);
        Self(index as u8 + 1)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_joker(self) -> bool {
        self.0 > N_CARDS
    }

    /// Value used by the count cut and the output step.
    #[must_use]
    pub const fn count(self) -> u8 {
        if self.is_joker() {
            JOKER_VALUE
        } else {
            self.0
        }
    }

    // only meaningful for non-joker cards
    #[must_use]
    pub const fn rank(self) -> u8 {
        (self.0 - 1) % N_RANKS
    }

    #[must_use]
    pub const fn suit(self) -> u8 {
        (self.0 - 1) / N_RANKS
    }

    #[must_use]
    pub const fn split(self) -> (u8, u8) {
        (self.rank(), self.suit())
    }

    /// Letter this card yields as keystream output, `None` for a joker.
    #[must_use]
    pub const fn letter(self) -> Option<Letter> {
        if self.is_joker() {
            None
        } else {
            Some(Letter::from_card_value(self.0))
        }
    }

    #[must_use]
    pub(crate) const fn mask(self) -> u64 {
        1u64 << (self.0 - 1)
    }
}
