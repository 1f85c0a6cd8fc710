//! The Morse symbol table.

use crate::error::{MorseError, MorseResult};
use std::collections::HashMap;
use std::sync::LazyLock;

/// The token for a space between words.
pub const WORD_SPACE: &str = " ";

/// Prosigns in the table, each sent as its letters run together.
pub const PROSIGNS: [&str; 6] = ["BT", "SK", "AR", "BK", "KN", "CL"];

/// One element of a character's Morse representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Dot,
    Dash,
    /// The silence standing for a space between words.
    WordSpace,
}

const CHARACTERS: [(&str, &str); 39] = [
    ("A", ".-"),
    ("B", "-..."),
    ("C", "-.-."),
    ("D", "-.."),
    ("E", "."),
    ("F", "..-."),
    ("G", "--."),
    ("H", "...."),
    ("I", ".."),
    ("J", ".---"),
    ("K", "-.-"),
    ("L", ".-.."),
    ("M", "--"),
    ("N", "-."),
    ("O", "---"),
    ("P", ".--."),
    ("Q", "--.-"),
    ("R", ".-."),
    ("S", "..."),
    ("T", "-"),
    ("U", "..-"),
    ("V", "...-"),
    ("W", ".--"),
    ("X", "-..-"),
    ("Y", "-.--"),
    ("Z", "--.."),
    ("1", ".----"),
    ("2", "..---"),
    ("3", "...--"),
    ("4", "....-"),
    ("5", "....."),
    ("6", "-...."),
    ("7", "--..."),
    ("8", "---.."),
    ("9", "----."),
    ("0", "-----"),
    (".", ".-.-.-"),
    (",", "--..--"),
    ("?", "..--.."),
];

static STANDARD: LazyLock<SymbolTable> = LazyLock::new(SymbolTable::build);

/// Immutable mapping from tokens to their Morse symbols.
///
/// Tokens are single characters (`"A"`, `"7"`, `"?"`, `" "`) or prosign names
/// (`"AR"`). Lookups are exact; text is expected in upper case.
///
/// # Examples
///
/// ```
/// use koch::{Symbol, SymbolTable};
///
/// let table = SymbolTable::standard();
/// assert_eq!(table.lookup("A").unwrap(), &[Symbol::Dot, Symbol::Dash]);
/// assert!(table.lookup("a").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: HashMap<&'static str, Vec<Symbol>>,
}

impl SymbolTable {
    /// Builds the table of letters, digits, punctuation, space and prosigns.
    pub fn build() -> Self {
        let mut symbols: HashMap<&'static str, Vec<Symbol>> = CHARACTERS
            .iter()
            .map(|&(token, code)| (token, parse_code(code)))
            .collect();
        symbols.insert(WORD_SPACE, vec![Symbol::WordSpace]);

        for prosign in PROSIGNS {
            // Every prosign letter is in CHARACTERS
            let fused: Vec<Symbol> = prosign
                .char_indices()
                .flat_map(|(i, c)| {
                    let letter = &prosign[i..i + c.len_utf8()];
                    symbols.get(letter).cloned().unwrap_or_default()
                })
                .collect();
            symbols.insert(prosign, fused);
        }

        Self { symbols }
    }

    /// The shared table, built on first use.
    pub fn standard() -> &'static SymbolTable {
        &STANDARD
    }

    /// The symbols for `token`, or `None` if it is not in the table.
    pub fn get(&self, token: &str) -> Option<&[Symbol]> {
        self.symbols.get(token).map(Vec::as_slice)
    }

    /// The symbols for `token`.
    ///
    /// # Errors
    ///
    /// Returns [`MorseError::UnknownToken`] if the token is not in the table.
    pub fn lookup(&self, token: &str) -> MorseResult<&[Symbol]> {
        self.get(token)
            .ok_or_else(|| MorseError::unknown_token(token))
    }

    /// Whether `token` is in the table.
    pub fn contains(&self, token: &str) -> bool {
        self.symbols.contains_key(token)
    }

    /// Checks every token, failing on the first unknown one.
    pub fn validate<'t>(&self, tokens: impl IntoIterator<Item = &'t str>) -> MorseResult<usize> {
        let mut count = 0;
        for token in tokens {
            self.lookup(token)?;
            count += 1;
        }
        Ok(count)
    }

    /// All tokens in the table, in no particular order.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.symbols.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

fn parse_code(code: &str) -> Vec<Symbol> {
    code.chars()
        .map(|c| if c == '.' { Symbol::Dot } else { Symbol::Dash })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::{Dash, Dot};

    #[test]
    fn test_table_size() {
        // 26 letters, 10 digits, 3 punctuation marks, space, 6 prosigns
        assert_eq!(SymbolTable::standard().len(), 46);
    }

    #[test]
    fn test_letters_and_digits() {
        let table = SymbolTable::standard();
        assert_eq!(table.lookup("E").unwrap(), &[Dot]);
        assert_eq!(table.lookup("T").unwrap(), &[Dash]);
        assert_eq!(table.lookup("Q").unwrap(), &[Dash, Dash, Dot, Dash]);
        assert_eq!(table.lookup("0").unwrap(), &[Dash; 5]);
        assert_eq!(table.lookup("?").unwrap(), &[Dot, Dot, Dash, Dash, Dot, Dot]);
    }

    #[test]
    fn test_space_is_word_space() {
        assert_eq!(
            SymbolTable::standard().lookup(WORD_SPACE).unwrap(),
            &[Symbol::WordSpace]
        );
    }

    #[test]
    fn test_prosigns_concatenate_letters() {
        let table = SymbolTable::standard();
        for prosign in PROSIGNS {
            let mut expected = Vec::new();
            for letter in prosign.chars() {
                expected.extend_from_slice(table.lookup(&letter.to_string()).unwrap());
            }
            assert_eq!(table.lookup(prosign).unwrap(), expected.as_slice(), "{}", prosign);
        }
        assert_eq!(
            table.lookup("AR").unwrap(),
            &[Dot, Dash, Dot, Dash, Dot]
        );
    }

    #[test]
    fn test_unknown_token() {
        let table = SymbolTable::standard();
        assert_eq!(
            table.lookup("#"),
            Err(MorseError::UnknownToken {
                token: "#".to_string()
            })
        );
        assert!(!table.contains("XY"));
    }

    #[test]
    fn test_validate_stops_at_first_unknown() {
        let table = SymbolTable::standard();
        assert_eq!(table.validate(["S", "O", "S"]), Ok(3));
        assert_eq!(
            table.validate(["S", "%", "&"]),
            Err(MorseError::unknown_token("%"))
        );
    }
}
