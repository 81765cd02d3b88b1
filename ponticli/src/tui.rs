use core::fmt;

use pontifex::card::{Card, N_SUITS};
use pontifex::deck::Deck;
use pontifex::formatter::CardName;

use colored::{Color, Colorize};

// bridge order: clubs, diamonds, hearts, spades
pub(crate) const COLOR: [Color; N_SUITS as usize] =
    [Color::Black, Color::Red, Color::Red, Color::Black];

// cards shown per printed row
const ROW: usize = 13;

pub(crate) struct ColoredCard(Card);

impl fmt::Display for ColoredCard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = CardName(self.0).to_string();
        if self.0.is_joker() {
            write!(f, "{:>3}", name.bright_yellow().on_black())
        } else {
            let color = COLOR[self.0.suit() as usize];
            write!(f, "{:>3}", name.on_white().color(color))
        }
    }
}

pub(crate) fn print_deck(deck: &Deck) {
    for (pos, card) in deck.iter().enumerate() {
        let s = format!("{pos:>2}.");
        print!("{} {} ", s.bright_black(), ColoredCard(*card));
        if (pos + 1) % ROW == 0 {
            println!();
        }
    }
    println!();
}
