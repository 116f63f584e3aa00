use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::builtin::{Constant, Function, Name, longest_name},
};

/// A single-character arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `^`
    Caret,
}

impl Operator {
    /// Returns the character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
            Self::Percent => '%',
            Self::Caret => '^',
        }
    }
}

/// Represents a lexical token of an expression.
///
/// A token is the smallest meaningful unit of an expression. Tokens are
/// produced once per call to [`tokenize`] and consumed in order by the parser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal such as `42`, `3.14` or `1.25e+09`.
    Number(f64),
    /// One of `+ - * / % ^`.
    Operator(Operator),
    /// A builtin function name such as `sin`.
    Function(Function),
    /// A named constant such as `pi`.
    Constant(Constant),
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{}", op.symbol()),
            Self::Function(function) => write!(f, "{function}"),
            Self::Constant(constant) => write!(f, "{constant}"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
        }
    }
}

/// Raw lexemes recognised by the generated lexer.
///
/// Letter runs are matched as a whole and split into builtin names afterwards,
/// so the set of names lives only in the builtin table.
#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\n]+")]
enum Lexeme {
    /// Integer or decimal literal; the exponent is consumed by [`lex_number`].
    #[regex(r"[0-9]+(\.[0-9]*)?", lex_number)]
    Number(f64),
    /// A run of letters, such as `sin` or `pie`.
    #[regex(r"[a-zA-Z]+")]
    Word,
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
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Converts an expression into its sequence of tokens.
///
/// Whitespace (spaces, tabs and newlines) is skipped. Letter runs are split
/// into the longest builtin names they start with, so `pie` becomes `pi`
/// followed by `e`.
///
/// # Errors
/// Returns [`ParseError::InvalidCharacter`] for the first character that
/// starts no token.
///
/// # Example
/// ```
/// use exprcalc::interpreter::{
///     builtin::Function,
///     lexer::{Operator, Token, tokenize},
/// };
///
/// let tokens = tokenize("2 * sin(1e-3)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(2.0),
///                 Token::Operator(Operator::Star),
///                 Token::Function(Function::Sin),
///                 Token::LParen,
///                 Token::Number(1e-3),
///                 Token::RParen]);
///
/// assert!(tokenize("2 # 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let token = match lexeme {
            Ok(Lexeme::Number(value)) => Token::Number(value),
            Ok(Lexeme::Word) => {
                split_word(lexer.slice(), &mut tokens)?;
                continue;
            },
            Ok(Lexeme::Plus) => Token::Operator(Operator::Plus),
            Ok(Lexeme::Minus) => Token::Operator(Operator::Minus),
            Ok(Lexeme::Star) => Token::Operator(Operator::Star),
            Ok(Lexeme::Slash) => Token::Operator(Operator::Slash),
            Ok(Lexeme::Percent) => Token::Operator(Operator::Percent),
            Ok(Lexeme::Caret) => Token::Operator(Operator::Caret),
            Ok(Lexeme::LParen) => Token::LParen,
            Ok(Lexeme::RParen) => Token::RParen,
            Err(()) => return Err(invalid_character(&source[lexer.span().start..])),
        };
        tokens.push(token);
    }

    trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

/// Finishes a numeric literal by consuming an optional exponent.
///
/// The exponent `[eE][+-]?[0-9]+` is only taken when at least one digit
/// follows; in `2e` the `e` is left for the next token.
fn lex_number(lex: &mut logos::Lexer<Lexeme>) -> Option<f64> {
    let exponent = exponent_len(lex.remainder());
    lex.bump(exponent);
    lex.slice().parse().ok()
}

/// Returns the byte length of the exponent suffix at the start of `rest`, or
/// zero when there is none.
fn exponent_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }

    let sign = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    let digits = bytes[1 + sign..].iter()
                                  .take_while(|b| b.is_ascii_digit())
                                  .count();

    if digits == 0 { 0 } else { 1 + sign + digits }
}

/// Splits a run of letters into builtin function and constant tokens,
/// longest name first.
fn split_word(word: &str, tokens: &mut Vec<Token>) -> Result<(), ParseError> {
    let mut rest = word;

    while !rest.is_empty() {
        let (name, len) = longest_name(rest).ok_or_else(|| invalid_character(rest))?;
        tokens.push(match name {
                        Name::Function(function) => Token::Function(function),
                        Name::Constant(constant) => Token::Constant(constant),
                    });
        rest = &rest[len..];
    }

    Ok(())
}

fn invalid_character(rest: &str) -> ParseError {
    rest.chars()
        .next()
        .map_or(ParseError::UnexpectedEndOfExpression, ParseError::InvalidCharacter)
}
