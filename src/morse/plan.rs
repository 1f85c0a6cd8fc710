//! Turning tokens into a sequence of keyed and silent segments.

use super::symbols::{Symbol, SymbolTable, WORD_SPACE};
use crate::error::MorseResult;
use std::iter::Peekable;

/// One keyed or silent interval of Morse audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Dot,
    Dash,
    /// Gap between elements of the same character.
    InterSymbolSilence,
    /// Gap between characters of the same word.
    InterLetterSilence,
    /// A space between words.
    Space,
}

impl Segment {
    /// Whether this segment is keyed (produces a tone).
    pub fn is_tone(self) -> bool {
        matches!(self, Segment::Dot | Segment::Dash)
    }
}

impl From<Symbol> for Segment {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::Dot => Segment::Dot,
            Symbol::Dash => Segment::Dash,
            Symbol::WordSpace => Segment::Space,
        }
    }
}

/// Callback receiving each token as its segments start.
pub type Echo<'a> = Box<dyn FnMut(&str) + 'a>;

/// Splits text into single-character tokens.
pub fn characters(text: &str) -> Characters<'_> {
    Characters {
        text,
        chars: text.char_indices(),
    }
}

/// Iterator over the single-character tokens of a string.
#[derive(Debug, Clone)]
pub struct Characters<'a> {
    text: &'a str,
    chars: std::str::CharIndices<'a>,
}

impl<'a> Iterator for Characters<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let (start, c) = self.chars.next()?;
        Some(&self.text[start..start + c.len_utf8()])
    }
}

/// Plans the segments of `text`, one character per token.
///
/// # Errors
///
/// Fails with [`MorseError::UnknownToken`](crate::MorseError::UnknownToken)
/// before planning anything if a character is not in `table`.
///
/// # Examples
///
/// ```
/// use koch::{Segment, SymbolTable, plan};
///
/// let segments: Vec<Segment> = plan(SymbolTable::standard(), "A", false).unwrap().collect();
/// assert_eq!(segments, [Segment::Dot, Segment::InterSymbolSilence, Segment::Dash]);
/// ```
pub fn plan<'a>(
    table: &'a SymbolTable,
    text: &'a str,
    suffix_space: bool,
) -> MorseResult<SegmentPlan<'a, Characters<'a>>> {
    plan_tokens(table, characters(text), suffix_space)
}

/// Plans the segments of pre-segmented tokens, such as prosigns.
///
/// The tokens are checked against `table` before the plan is returned.
pub fn plan_tokens<'a, I>(
    table: &'a SymbolTable,
    tokens: I,
    suffix_space: bool,
) -> MorseResult<SegmentPlan<'a, I::IntoIter>>
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: Clone,
{
    let tokens = tokens.into_iter();
    table.validate(tokens.clone())?;
    Ok(SegmentPlan::new(table, tokens, suffix_space))
}

/// Lazily expands tokens into segments.
///
/// Elements of a token are separated by `InterSymbolSilence`; tokens are
/// separated by `InterLetterSilence` unless either side is a word space, which
/// carries its own gap. Nothing follows the final token except the optional
/// suffix gap.
pub struct SegmentPlan<'a, I: Iterator<Item = &'a str>> {
    table: &'a SymbolTable,
    tokens: Peekable<I>,
    symbols: std::slice::Iter<'a, Symbol>,
    // An element of the current token has been emitted
    gap_pending: bool,
    separator: Option<Segment>,
    suffix_space: bool,
    started: bool,
    echo: Option<Echo<'a>>,
}

impl<'a, I: Iterator<Item = &'a str>> SegmentPlan<'a, I> {
    fn new(table: &'a SymbolTable, tokens: I, suffix_space: bool) -> Self {
        Self {
            table,
            tokens: tokens.peekable(),
            symbols: Default::default(),
            gap_pending: false,
            separator: None,
            suffix_space,
            started: false,
            echo: None,
        }
    }

    /// Reports each token to `echo` as its first segment is produced.
    pub fn with_echo(self, echo: impl FnMut(&str) + 'a) -> Self {
        self.with_boxed_echo(Box::new(echo))
    }

    pub(crate) fn with_boxed_echo(mut self, echo: Echo<'a>) -> Self {
        self.echo = Some(echo);
        self
    }

    fn start(&mut self, token: &'a str) {
        if let Some(echo) = self.echo.as_mut() {
            echo(token);
        }
        self.started = true;
        self.symbols = self.table.get(token).unwrap_or_default().iter();
        self.gap_pending = false;
        self.separator = match self.tokens.peek() {
            Some(&next) if token != WORD_SPACE && next != WORD_SPACE => {
                Some(Segment::InterLetterSilence)
            }
            _ => None,
        };
    }
}

impl<'a, I: Iterator<Item = &'a str>> Iterator for SegmentPlan<'a, I> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            if let Some(&symbol) = self.symbols.as_slice().first() {
                if self.gap_pending {
                    self.gap_pending = false;
                    return Some(Segment::InterSymbolSilence);
                }
                self.symbols.next();
                self.gap_pending = true;
                return Some(symbol.into());
            }

            if let Some(separator) = self.separator.take() {
                return Some(separator);
            }

            match self.tokens.next() {
                Some(token) => self.start(token),
                None => {
                    let suffix = self.started && self.suffix_space;
                    self.suffix_space = false;
                    return suffix.then_some(Segment::InterSymbolSilence);
                }
            }
        }
    }
}
