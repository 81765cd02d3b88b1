mod tui;

use std::num::NonZeroU8;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pontifex::cipher::{Cipher, CipherConfig, DeckPolicy, DEFAULT_BLOCK_SIZE};
use pontifex::deck::Deck;
use pontifex::formatter::parse_key;
use pontifex::keystream::{requested_length, KeyStream, Solitaire};
use pontifex::shuffler::{self, U256};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::tui::print_deck;

#[derive(Args, Clone)]
#[group(multiple = false)]
pub struct KeySource {
    /// Key deck as 54 cards: numbers 1-52 or names like QH, jokers A and B
    #[arg(long)]
    key: Option<String>,

    /// Key the deck from a passphrase
    #[arg(long)]
    passphrase: Option<String>,

    /// Shuffle the deck from a random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Pick the deck by its permutation index
    #[arg(long)]
    number: Option<String>,
}

impl KeySource {
    pub fn deck(&self) -> Result<Deck> {
        if let Some(key) = &self.key {
            return parse_key(key).context("can't read --key");
        }
        if let Some(passphrase) = &self.passphrase {
            return Ok(Deck::from_passphrase(passphrase));
        }
        if let Some(seed) = self.seed {
            return Ok(Deck::from_key(&shuffler::default_shuffle(seed))?);
        }
        if let Some(number) = &self.number {
            let number = U256::from_dec_str(number)
                .map_err(|e| anyhow::anyhow!("{e:?}"))
                .context("--number is not a decimal integer")?;
            return Deck::from_number(number).context("can't use --number");
        }
        Ok(Deck::default())
    }
}

#[derive(Args, Clone)]
pub struct Options {
    #[command(flatten)]
    key: KeySource,

    /// Letters per output group
    #[arg(long, short, default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: NonZeroU8,

    /// Keep the deck state from one message to the next
    #[arg(long = "continue")]
    keep_going: bool,
}

impl Options {
    fn cipher(&self) -> Result<Cipher> {
        let policy = if self.keep_going {
            DeckPolicy::Continue
        } else {
            DeckPolicy::Reset
        };
        let config = CipherConfig::default()
            .with_block_size(self.block_size)
            .with_policy(policy);
        Ok(Cipher::from_deck(self.key.deck()?, config))
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt each message
    Encode {
        #[arg(required = true)]
        texts: Vec<String>,

        #[command(flatten)]
        options: Options,
    },

    /// Decrypt each message
    Decode {
        #[arg(required = true)]
        texts: Vec<String>,

        #[command(flatten)]
        options: Options,
    },

    /// Print the raw keystream
    Keystream {
        #[arg(allow_negative_numbers = true)]
        length: i64,

        #[command(flatten)]
        key: KeySource,
    },

    /// Show the key deck
    Deck {
        #[command(flatten)]
        key: KeySource,
    },

    /// Print the permutation index of the key deck
    KeyNumber {
        #[command(flatten)]
        key: KeySource,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let args = Cli::parse().command;

    match &args {
        Commands::Encode { texts, options } => {
            let mut cipher = options.cipher()?;
            for text in texts {
                println!("{}", cipher.encode(text)?);
            }
        }
        Commands::Decode { texts, options } => {
            let mut cipher = options.cipher()?;
            for text in texts {
                println!("{}", cipher.decode(text)?);
            }
        }
        Commands::Keystream { length, key } => {
            let length = requested_length(*length)?;
            let stream = Solitaire::new(key.deck()?).generate(length)?;
            info!(length, "keystream generated");
            let text: String = stream.into_iter().map(char::from).collect();
            println!("{text}");
        }
        Commands::Deck { key } => {
            let deck = key.deck()?;
            print_deck(&deck);
            println!("{deck}");
        }
        Commands::KeyNumber { key } => {
            println!("{}", key.deck()?.number());
        }
    }
    Ok(())
}
