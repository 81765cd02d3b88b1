pub mod card;
pub mod cipher;
pub mod deck;
pub mod error;
pub mod formatter;
pub mod keystream;
pub mod letter;
pub mod shuffler;

pub use cipher::{Cipher, CipherConfig, DeckPolicy};
pub use deck::Deck;
pub use error::{Error, Result};
pub use keystream::{KeyStream, Solitaire};
