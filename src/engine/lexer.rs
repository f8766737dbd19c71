use std::ops::Range;

use logos::{Logos, SpannedIter};

use crate::error::ParseError;

/// Represents a lexical token of an expression.
///
/// Signs are not part of numeric literals here; whether a `-` is a binary
/// operator or the sign of the following literal depends on what precedes it,
/// which only the evaluator knows.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `5.`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens; variable or constant names such as `x` or `rate_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Whitespace.
    #[regex(r"[ \t\n\r\f\x0B]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value. Out-of-range literals become infinite.
/// - `None`: If the slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts input the lexer could not match into the matching error.
///
/// `rest` is the source from the start of `span` onward. Anything that looks
/// like the start of a number is reported as a malformed literal, everything
/// else as an invalid character.
fn lexing_error(rest: &str, span: &Range<usize>) -> ParseError {
    match rest.chars().next() {
        Some(c) if c.is_ascii_digit() || c == '.' => {
            let literal = rest.get(..span.len()).unwrap_or(rest);
            ParseError::MalformedNumericLiteral { literal: literal.to_owned(),
                                                  index:   span.start, }
        },
        _ => invalid_character(rest, span.start),
    }
}

/// Reports the first character of `text` as invalid at `index`.
pub(crate) fn invalid_character(text: &str, index: usize) -> ParseError {
    text.chars()
        .next()
        .map_or(ParseError::EmptyExpression { index }, |character| {
            ParseError::InvalidCharacter { character, index }
        })
}

/// A token paired with its byte range in the full source string.
pub type Spanned = (Token, Range<usize>);

/// A stream of tokens over one region of a source string.
///
/// Spans are reported relative to the full string, so an assignment can lex
/// its right-hand side while errors keep pointing into the caller's input.
pub struct TokenStream<'src> {
    source: &'src str,
    region: Range<usize>,
    tokens: SpannedIter<'src, Token>,
}

impl<'src> TokenStream<'src> {
    /// Creates a stream over the whole of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::over(source, 0..source.len())
    }

    /// Creates a stream over `source[region]`.
    ///
    /// # Panics
    /// Panics if `region` is out of bounds or does not fall on `char`
    /// boundaries.
    #[must_use]
    pub fn over(source: &'src str, region: Range<usize>) -> Self {
        let tokens = Token::lexer(&source[region.clone()]).spanned();
        Self { source,
               region,
               tokens }
    }

    /// The byte offset just past the end of the region.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.region.end
    }

    /// Returns the text covered by `span`.
    #[must_use]
    pub fn slice(&self, span: &Range<usize>) -> &'src str {
        &self.source[span.clone()]
    }

    /// Consumes the next token.
    ///
    /// Returns `None` once the region is exhausted, and a [`ParseError`] if
    /// the next slice of input is not a token.
    pub fn next_token(&mut self) -> Option<Result<Spanned, ParseError>> {
        let (token, span) = self.tokens.next()?;
        let start = self.region.start;
        let span = span.start + start..span.end + start;

        Some(match token {
                 Ok(token) => Ok((token, span)),
                 Err(()) => Err(lexing_error(&self.source[span.start..], &span)),
             })
    }
}
