use tracing::trace;

use crate::deck::Deck;
use crate::error::{Error, Result};
use crate::letter::Letter;

// consecutive rounds without output before the generator gives up
pub const MAX_SKIPPED_ROUNDS: usize = 1024;

/// A source of keystream letters.
pub trait KeyStream {
    /// Returns exactly `length` letters, continuing from the current state.
    fn generate(&mut self, length: usize) -> Result<Vec<Letter>>;

    /// Goes back to the state the stream was keyed with.
    fn reset(&mut self);
}

pub fn requested_length(length: i64) -> Result<usize> {
    usize::try_from(length).map_err(|_| Error::InvalidLength(length))
}

/// The Pontifex keystream: a deck of cards stepped one round per attempt.
#[derive(Debug, Clone, Default)]
pub struct Solitaire {
    key: Deck,
    deck: Deck,
}

impl Solitaire {
    #[must_use]
    pub fn new(key: Deck) -> Self {
        Self {
            deck: key.clone(),
            key,
        }
    }

    #[must_use]
    pub const fn key(&self) -> &Deck {
        &self.key
    }

    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Runs one round and reads the output card, `None` if it was a joker.
    pub fn step(&mut self) -> Option<Letter> {
        self.deck.round();
        self.deck.output_letter()
    }

    // first letter within `max_skipped + 1` rounds
    pub(crate) fn step_within(&mut self, max_skipped: usize) -> Option<Letter> {
        (0..=max_skipped).find_map(|_| self.step())
    }

    pub(crate) fn generate_with_limit(
        &mut self,
        length: usize,
        max_skipped: usize,
    ) -> Result<Vec<Letter>> {
        let mut stream = Vec::with_capacity(length);
        let mut skipped = 0;

        while stream.len() < length {
            if let Some(letter) = self.step() {
                stream.push(letter);
                skipped = 0;
            } else {
                skipped += 1;
                trace!(skipped, produced = stream.len(), "joker output, round skipped");
                if skipped >= max_skipped {
                    return Err(Error::KeystreamStalled { rounds: skipped });
                }
            }
        }
        Ok(stream)
    }
}

impl KeyStream for Solitaire {
    fn generate(&mut self, length: usize) -> Result<Vec<Letter>> {
        self.generate_with_limit(length, MAX_SKIPPED_ROUNDS)
    }

    fn reset(&mut self) {
        self.deck.clone_from(&self.key);
    }
}

impl Iterator for Solitaire {
    type Item = Letter;

    // never ends for a real key
    fn next(&mut self) -> Option<Letter> {
        self.step_within(MAX_SKIPPED_ROUNDS - 1)
    }
}
