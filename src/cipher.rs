use core::num::NonZeroU8;

use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::Result;
use crate::keystream::{KeyStream, Solitaire};
use crate::letter::Letter;

pub const DEFAULT_BLOCK_SIZE: NonZeroU8 = match NonZeroU8::new(5) {
    Some(n) => n,
    None => panic!("block size must be positive"),
};

/// What happens to the deck between two calls on the same cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeckPolicy {
    /// Every call starts again from the key deck.
    #[default]
    Reset,
    /// Every call picks up the deck where the previous call left it.
    Continue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherConfig {
    pub block_size: NonZeroU8,
    pub policy: DeckPolicy,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            policy: DeckPolicy::default(),
        }
    }
}

impl CipherConfig {
    #[must_use]
    pub const fn with_block_size(self, block_size: NonZeroU8) -> Self {
        Self { block_size, ..self }
    }

    #[must_use]
    pub const fn with_policy(self, policy: DeckPolicy) -> Self {
        Self { policy, ..self }
    }
}

/// Uppercases, drops everything but `A..=Z` and pads with `X` to a whole
/// number of blocks.
#[must_use]
pub fn sanitize(s: &str, block_size: NonZeroU8) -> String {
    let letters: String = s
        .to_uppercase()
        .chars()
        .filter(char::is_ascii_uppercase)
        .collect();
    pad(&letters, block_size)
}

#[must_use]
pub fn pad(s: &str, block_size: NonZeroU8) -> String {
    let block = usize::from(block_size.get());
    let len = s.chars().count();
    let mut padded = String::with_capacity(s.len() + block);
    padded.push_str(s);
    padded.extend(core::iter::repeat('X').take(len.next_multiple_of(block) - len));
    padded
}

/// Splits into space separated groups of `block_size`, the last group may be
/// shorter.
#[must_use]
pub fn crack(s: &str, block_size: NonZeroU8) -> String {
    let chars: Vec<char> = s.chars().collect();
    chars
        .chunks(usize::from(block_size.get()))
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Mixes a keystream into messages.
///
/// Encoding adds the keystream letter by letter, decoding subtracts it. A
/// cipher owns its keystream outright, so two messages can only be processed
/// at the same time by two ciphers.
#[derive(Debug, Clone)]
pub struct Cipher<K: KeyStream = Solitaire> {
    keystream: K,
    config: CipherConfig,
}

impl Cipher<Solitaire> {
    /// Solitaire cipher keyed with `key`, or with the unkeyed deck.
    pub fn new(key: Option<&[Card]>, config: CipherConfig) -> Result<Self> {
        Ok(Self::from_deck(Deck::new(key)?, config))
    }

    #[must_use]
    pub fn from_deck(deck: Deck, config: CipherConfig) -> Self {
        Self::with_keystream(Solitaire::new(deck), config)
    }
}

impl Default for Cipher<Solitaire> {
    fn default() -> Self {
        Self::from_deck(Deck::default(), CipherConfig::default())
    }
}

impl<K: KeyStream> Cipher<K> {
    #[must_use]
    pub fn with_keystream(keystream: K, config: CipherConfig) -> Self {
        debug!(
            block_size = config.block_size.get(),
            policy = ?config.policy,
            "cipher ready"
        );
        Self { keystream, config }
    }

    #[must_use]
    pub const fn config(&self) -> &CipherConfig {
        &self.config
    }

    #[must_use]
    pub const fn keystream(&self) -> &K {
        &self.keystream
    }

    pub fn reset(&mut self) {
        debug!("cipher reset to key");
        self.keystream.reset();
    }

    pub fn encode(&mut self, plaintext: &str) -> Result<String> {
        self.run(plaintext, Letter::encipher)
    }

    pub fn decode(&mut self, ciphertext: &str) -> Result<String> {
        self.run(ciphertext, Letter::decipher)
    }

    fn run(&mut self, text: &str, op: fn(Letter, Letter) -> Letter) -> Result<String> {
        if self.config.policy == DeckPolicy::Reset {
            self.keystream.reset();
        }
        let message: Vec<Letter> = sanitize(text, self.config.block_size)
            .bytes()
            .filter_map(Letter::from_ascii)
            .collect();
        debug!(length = message.len(), "combining with keystream");

        let combined = self.combine(&message, op)?;
        Ok(crack(&combined, self.config.block_size))
    }

    fn combine(
        &mut self,
        message: &[Letter],
        op: fn(Letter, Letter) -> Letter,
    ) -> Result<String> {
        let stream = self.keystream.generate(message.len())?;
        Ok(message
            .iter()
            .zip(stream)
            .map(|(&m, k)| char::from(op(m, k)))
            .collect())
    }
}
