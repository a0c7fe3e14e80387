//! Morse Text Encoder
//!
//! Converts text into the symbol sequence the beacon sends. Elements of a
//! letter follow each other directly, one [`Symbol::Space`] separates
//! letters and a word break adds a second one.

use core::fmt;

use heapless::Vec;

use crate::types::Symbol;

/// Capacity of an encoded message in symbols
pub const MAX_SYMBOLS: usize = 256;

/// Encoded message buffer
pub type Symbols = Vec<Symbol, MAX_SYMBOLS>;

/// Reasons text cannot be encoded
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// Character has no Morse code
    Unsupported(char),
    /// Encoded message exceeds [`MAX_SYMBOLS`]
    TooLong,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(c) => write!(f, "no Morse code for {c:?}"),
            Self::TooLong => write!(f, "message longer than {MAX_SYMBOLS} symbols"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for EncodeError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Unsupported(c) => defmt::write!(f, "Unsupported({})", c),
            Self::TooLong => defmt::write!(f, "TooLong"),
        }
    }
}

/// Encode `text` as a symbol sequence
///
/// Blanks only separate words: leading, trailing and repeated blanks do
/// not add gaps.
pub fn encode(text: &str) -> Result<Symbols, EncodeError> {
    let mut symbols = Symbols::new();

    for (index, word) in text.split_whitespace().enumerate() {
        if index > 0 {
            push_n(&mut symbols, Symbol::Space, 2)?;
        }

        for (position, c) in word.chars().enumerate() {
            let pattern = char_to_morse(c).ok_or(EncodeError::Unsupported(c))?;
            if position > 0 {
                push_n(&mut symbols, Symbol::Space, 1)?;
            }
            for element in pattern.bytes() {
                let symbol = if element == b'-' {
                    Symbol::Dash
                } else {
                    Symbol::Dot
                };
                push_n(&mut symbols, symbol, 1)?;
            }
        }
    }

    Ok(symbols)
}

/// Morse pattern of `c`, case-insensitive
const fn char_to_morse(c: char) -> Option<&'static str> {
    match c.to_ascii_uppercase() {
        'A' => Some(".-"),
        'B' => Some("-..."),
        'C' => Some("-.-."),
        'D' => Some("-.."),
        'E' => Some("."),
        'F' => Some("..-."),
        'G' => Some("--."),
        'H' => Some("...."),
        'I' => Some(".."),
        'J' => Some(".---"),
        'K' => Some("-.-"),
        'L' => Some(".-.."),
        'M' => Some("--"),
        'N' => Some("-."),
        'O' => Some("---"),
        'P' => Some(".--."),
        'Q' => Some("--.-"),
        'R' => Some(".-."),
        'S' => Some("..."),
        'T' => Some("-"),
        'U' => Some("..-"),
        'V' => Some("...-"),
        'W' => Some(".--"),
        'X' => Some("-..-"),
        'Y' => Some("-.--"),
        'Z' => Some("--.."),
        '0' => Some("-----"),
        '1' => Some(".----"),
        '2' => Some("..---"),
        '3' => Some("...--"),
        '4' => Some("....-"),
        '5' => Some("....."),
        '6' => Some("-...."),
        '7' => Some("--..."),
        '8' => Some("---.."),
        '9' => Some("----."),
        '.' => Some(".-.-.-"),
        ',' => Some("--..--"),
        '?' => Some("..--.."),
        '/' => Some("-..-."),
        '=' => Some("-...-"),
        _ => None,
    }
}

fn push_n(symbols: &mut Symbols, symbol: Symbol, count: usize) -> Result<(), EncodeError> {
    for _ in 0..count {
        symbols.push(symbol).map_err(|_| EncodeError::TooLong)?;
    }
    Ok(())
}
