use crate::card::N_CARDS;

pub const N_LETTERS: u8 = 26;

/// A letter of the message or keystream, valued `1..=26` for `A..=Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    pub const A: Self = Self(1);
    // filler used to pad a message up to a whole block
    pub const X: Self = Self(24);
    pub const Z: Self = Self(N_LETTERS);

    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= N_LETTERS {
            Some(Self(value))
        } else {
            None
        }
    }

    #[must_use]
    pub(crate) const fn from_card_value(value: u8) -> Self {
        debug_assert!(value >= 1 && value <= N_CARDS);
        if value > N_LETTERS {
            Self(value - N_LETTERS)
        } else {
            Self(value)
        }
    }

    /// Accepts uppercase ASCII letters only.
    #[must_use]
    pub const fn from_ascii(b: u8) -> Option<Self> {
        if b.is_ascii_uppercase() {
            Some(Self(b - b'A' + 1))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn to_ascii(self) -> u8 {
        self.0 + b'A' - 1
    }

    /// Adds the keystream letter, wrapping Z back to A.
    #[must_use]
    pub const fn encipher(self, key: Self) -> Self {
        Self((self.0 + key.0 - 1) % N_LETTERS + 1)
    }

    /// Inverse of [`Letter::encipher`].
    #[must_use]
    pub const fn decipher(self, key: Self) -> Self {
        Self((self.0 + N_LETTERS - key.0 - 1) % N_LETTERS + 1)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        char::from(letter.to_ascii())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: u8) -> Letter {
        Letter::from_ascii(c).unwrap()
    }

    // the byte rules of the hand cipher: add then fold above 'Z', subtract then fold below 'A'
    fn byte_add(x: u8, y: u8) -> u8 {
        let s = u16::from(x) + u16::from(y);
        (if s > 154 { s - 90 } else { s - 64 }) as u8
    }

    fn byte_sub(x: u8, y: u8) -> u8 {
        let d = i16::from(x) - i16::from(y);
        (if d < 1 { d + 90 } else { d + 64 }) as u8
    }

    #[test]
    fn test_ascii() {
        assert_eq!(letter(b'A'), Letter::A);
        assert_eq!(letter(b'X'), Letter::X);
        assert_eq!(letter(b'Z'), Letter::Z);
        assert_eq!(Letter::from_ascii(b'a'), None);
        assert_eq!(Letter::from_ascii(b'@'), None);
        assert_eq!(Letter::from_ascii(b'['), None);
        assert_eq!(char::from(Letter::X), 'X');
    }

    #[test]
    fn test_matches_byte_rules() {
        for x in b'A'..=b'Z' {
            for y in b'A'..=b'Z' {
                assert_eq!(letter(x).encipher(letter(y)).to_ascii(), byte_add(x, y));
                assert_eq!(letter(x).decipher(letter(y)).to_ascii(), byte_sub(x, y));
            }
        }
    }

    #[test]
    fn test_decipher_inverts() {
        for x in 1..=N_LETTERS {
            for k in 1..=N_LETTERS {
                let (x, k) = (Letter::new(x).unwrap(), Letter::new(k).unwrap());
                assert_eq!(x.encipher(k).decipher(k), x);
            }
        }
    }

    #[test]
    fn test_wrap() {
        assert_eq!(Letter::Z.encipher(Letter::A), Letter::A);
        assert_eq!(Letter::Z.encipher(Letter::Z), Letter::Z);
        assert_eq!(Letter::A.decipher(Letter::A), Letter::Z);
        assert_eq!(letter(b'C').decipher(letter(b'D')), letter(b'Y'));
    }
}
