use arrayvec::ArrayVec;

use crate::card::{Card, FULL_MASK, N_SYMBOLS};
use crate::error::{KeyError, Result};
use crate::letter::Letter;

pub const DECK_SIZE: usize = N_SYMBOLS as usize;

pub type CardDeck = [Card; DECK_SIZE];

/// The 54 symbols of a Solitaire deck, top card first.
///
/// Every card appears exactly once. The deck is only rearranged in place by
/// the Solitaire moves, so the permutation can never be broken once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: CardDeck,
}

impl Default for Deck {
    /// Cards `1..=52` in order followed by joker A and joker B.
    fn default() -> Self {
        Self {
            cards: core::array::from_fn(Card::from_index),
        }
    }
}

impl Deck {
    pub fn new(key: Option<&[Card]>) -> Result<Self> {
        match key {
            Some(key) => Self::from_key(key),
            None => Ok(Self::default()),
        }
    }

    pub fn from_key(key: &[Card]) -> Result<Self> {
        let cards: CardDeck = key
            .try_into()
            .map_err(|_| KeyError::WrongSize { found: key.len() })?;

        let mut seen = 0u64;
        for c in &cards {
            if seen & c.mask() != 0 {
                return Err(KeyError::Duplicate(*c).into());
            }
            seen |= c.mask();
        }
        debug_assert_eq!(seen, FULL_MASK);

        Ok(Self { cards })
    }

    #[must_use]
    pub const fn cards(&self) -> &CardDeck {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn size(&self) -> usize {
        DECK_SIZE
    }

    #[must_use]
    pub fn position(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    fn index_of(&self, card: Card) -> usize {
        self.position(card).expect("deck holds every card")
    }

    fn move_down(&mut self, index: usize) {
        if index + 1 == DECK_SIZE {
            // the bottom card goes just below the top card, not on top
            self.cards[1..].rotate_right(1);
        } else {
            self.cards.swap(index, index + 1);
        }
    }

    pub fn move_joker_a(&mut self) {
        self.move_down(self.index_of(Card::JOKER_A));
    }

    pub fn move_joker_b(&mut self) {
        for _ in 0..2 {
            self.move_down(self.index_of(Card::JOKER_B));
        }
    }

    /// Swaps the cards above the upper joker with the cards below the lower
    /// joker. The jokers and whatever lies between them keep their place
    /// relative to each other.
    pub fn triple_cut(&mut self) {
        let a = self.index_of(Card::JOKER_A);
        let b = self.index_of(Card::JOKER_B);
        let (top, bottom) = if a < b { (a, b) } else { (b, a) };

        let mut cut = ArrayVec::<Card, DECK_SIZE>::new();
        cut.extend(self.cards[bottom + 1..].iter().copied());
        cut.extend(self.cards[top..=bottom].iter().copied());
        cut.extend(self.cards[..top].iter().copied());
        self.cards.copy_from_slice(&cut);
    }

    pub fn count_cut(&mut self) {
        self.count_cut_by(self.cards[DECK_SIZE - 1].count());
    }

    /// Moves the top `n` cards to sit just above the bottom card, which
    /// stays where it is.
    pub fn count_cut_by(&mut self, n: u8) {
        let n = usize::from(n) % (DECK_SIZE - 1);
        self.cards[..DECK_SIZE - 1].rotate_left(n);
    }

    /// Looks past as many cards as the top card counts and reads the next one.
    /// A joker there gives no output.
    #[must_use]
    pub fn output_letter(&self) -> Option<Letter> {
        let n = usize::from(self.cards[0].count());
        self.cards[n].letter()
    }

    /// Moves both jokers and cuts, without reading an output.
    pub fn round(&mut self) {
        self.move_joker_a();
        self.move_joker_b();
        self.triple_cut();
        self.count_cut();
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use super::*;
    use crate::error::Error;
    use crate::shuffler::default_shuffle;

    fn card(value: u8) -> Card {
        Card::from_value(value).unwrap()
    }

    fn values(deck: &Deck) -> Vec<u8> {
        deck.iter().map(|c| c.value()).collect()
    }

    fn is_permutation(deck: &Deck) -> bool {
        deck.iter().fold(0u64, |m, c| m | c.mask()) == FULL_MASK
    }

    // deck with the given cards placed first, the rest in ascending order
    fn deck_starting_with(head: &[u8]) -> Deck {
        let mut cards: Vec<Card> = head.iter().map(|&v| card(v)).collect();
        cards.extend((1..=N_SYMBOLS).filter(|v| !head.contains(v)).map(card));
        Deck::from_key(&cards).unwrap()
    }

    #[test]
    fn test_default_order() {
        let deck = Deck::default();
        assert_eq!(deck.size(), 54);
        assert_eq!(deck.card_at(0), Some(card(1)));
        assert_eq!(deck.card_at(51), Some(card(52)));
        assert_eq!(deck.card_at(52), Some(Card::JOKER_A));
        assert_eq!(deck.card_at(53), Some(Card::JOKER_B));
        assert_eq!(deck.card_at(54), None);
        assert_eq!(Deck::new(None).unwrap(), deck);
    }

    #[test]
    fn test_rejects_bad_keys() {
        let short: Vec<Card> = Deck::default().iter().copied().take(53).collect();
        assert_eq!(
            Deck::from_key(&short),
            Err(Error::InvalidKey(KeyError::WrongSize { found: 53 }))
        );

        let mut dup = *Deck::default().cards();
        dup[53] = Card::JOKER_A;
        assert_eq!(
            Deck::new(Some(&dup)),
            Err(Error::InvalidKey(KeyError::Duplicate(Card::JOKER_A)))
        );
    }

    #[test]
    fn test_move_joker_a() {
        let mut deck = Deck::default();
        deck.move_joker_a();
        assert_eq!(deck.card_at(53), Some(Card::JOKER_A));
        assert_eq!(deck.card_at(52), Some(Card::JOKER_B));

        // from the bottom it wraps below the top card
        deck.move_joker_a();
        assert_eq!(deck.position(Card::JOKER_A), Some(1));
        assert_eq!(deck.card_at(0), Some(card(1)));
        assert_eq!(deck.card_at(2), Some(card(2)));
        assert_eq!(deck.card_at(53), Some(Card::JOKER_B));
        assert!(is_permutation(&deck));
    }

    #[test]
    fn test_move_joker_b() {
        let mut deck = Deck::default();
        deck.move_joker_a();
        // B sits at 52 so the first step hits the bottom, the second wraps
        deck.move_joker_b();
        assert_eq!(deck.position(Card::JOKER_B), Some(1));
        assert_eq!(deck.card_at(53), Some(Card::JOKER_A));

        // wraps on the first step, then keeps going
        let mut deck = Deck::default();
        deck.move_joker_b();
        assert_eq!(deck.position(Card::JOKER_B), Some(2));
        assert_eq!(deck.card_at(1), Some(card(2)));
        assert_eq!(deck.card_at(53), Some(Card::JOKER_A));

        let mut deck = deck_starting_with(&[54, 1, 2, 3]);
        deck.move_joker_b();
        assert_eq!(values(&deck)[..4], [1, 2, 54, 3]);
    }

    #[test]
    fn test_triple_cut() {
        let mut deck = deck_starting_with(&[1, 2, 53, 3, 4, 54, 5, 6]);
        deck.triple_cut();
        let v = values(&deck);
        // cards below the lower joker come first
        assert_eq!(v[0..3], [5, 6, 7]);
        assert_eq!(v[48..], [53, 3, 4, 54, 1, 2]);
    }

    #[test]
    fn test_triple_cut_joker_order() {
        // jokers in reverse order and one of them on top
        let mut deck = deck_starting_with(&[54, 1, 53]);
        deck.triple_cut();
        let v = values(&deck);
        assert_eq!(v[0], 2);
        assert_eq!(v[51..], [54, 1, 53]);

        // no cards outside the jokers span on either side
        let mut cards: Vec<Card> = vec![Card::JOKER_B];
        cards.extend((1..=52).map(card));
        cards.push(Card::JOKER_A);
        let mut deck = Deck::from_key(&cards).unwrap();
        let before = deck.clone();
        deck.triple_cut();
        assert_eq!(deck, before);
    }

    #[test]
    fn test_count_cut() {
        let mut deck = Deck::default();
        deck.count_cut();
        // joker at the bottom counts 53, which leaves the deck as it was
        assert_eq!(deck, Deck::default());

        let mut cards = *Deck::default().cards();
        cards.swap(3, 53);
        let mut deck = Deck::from_key(&cards).unwrap();
        deck.count_cut();
        let v = values(&deck);
        assert_eq!(v[..3], [5, 6, 7]);
        assert_eq!(v[48..], [53, 1, 2, 3, 54, 4]);
    }

    #[test]
    fn test_output_letter() {
        // top card 1 reads the second card
        let deck = deck_starting_with(&[1, 28]);
        assert_eq!(deck.output_letter(), Letter::new(2));

        let deck = deck_starting_with(&[2, 30, 5]);
        assert_eq!(deck.output_letter(), Letter::new(5));

        let deck = deck_starting_with(&[1, 53]);
        assert_eq!(deck.output_letter(), None);

        // a joker on top reads the bottom card
        let mut cards = *Deck::default().cards();
        cards.swap(0, 52);
        let deck = Deck::from_key(&cards).unwrap();
        assert_eq!(deck.card_at(53), Some(Card::JOKER_B));
        assert_eq!(deck.output_letter(), None);
    }

    #[test]
    fn test_first_round() {
        let mut deck = Deck::default();
        deck.round();
        let mut expected: Vec<u8> = (2..=54).collect();
        expected.push(1);
        assert_eq!(values(&deck), expected);
        assert_eq!(deck.output_letter(), Letter::new(4));
    }

    #[test]
    fn test_random_invariants() {
        let mut rng = StdRng::seed_from_u64(14);

        for _ in 0..200 {
            let mut deck = Deck::from_key(&default_shuffle(rng.gen())).unwrap();
            for _ in 0..50 {
                let bottom = deck.card_at(53);
                match rng.gen_range(0..5) {
                    0 => deck.move_joker_a(),
                    1 => deck.move_joker_b(),
                    2 => deck.triple_cut(),
                    3 => {
                        deck.count_cut();
                        assert_eq!(deck.card_at(53), bottom);
                    }
                    _ => deck.round(),
                }
                assert!(is_permutation(&deck));
            }
        }
    }
}
