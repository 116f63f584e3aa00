use std::{iter::Peekable, slice};

use tracing::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Default limit on how deeply groups, calls, negations and powers may nest.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Turns expression text into a syntax tree.
///
/// A parser only holds configuration. Every call to [`Parser::parse`] creates
/// its own cursor, so calls are independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    max_depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Creates a parser with the default nesting limit.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }

    /// Creates a parser that rejects expressions nested deeper than
    /// `max_depth`.
    ///
    /// Each nesting level costs a few stack frames while parsing. Limits in the
    /// low thousands fit a default 2 MiB thread; larger ones need a bigger
    /// stack.
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Returns the nesting limit.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parses a complete expression.
    ///
    /// The text is tokenized and then parsed by recursive descent:
    ///
    /// ```text
    ///     expression := term (("+" | "-") term)*
    ///     term       := factor (("*" | "/" | "%") factor)*
    ///     factor     := power ("^" factor)?
    ///     power      := "-" power | atom
    ///     atom       := NUMBER | CONSTANT | FUNCTION "(" expression ")"
    ///                 | "(" expression ")"
    /// ```
    ///
    /// Unary minus binds tighter than `^`, so `-2^2` is `(-2)^2`. Every token
    /// must be consumed.
    ///
    /// # Errors
    /// Returns a `ParseError` if tokenizing fails, an operand or parenthesis
    /// is missing, tokens are left over, or nesting exceeds the limit.
    ///
    /// # Example
    /// ```
    /// use exprcalc::{ast::Expr, interpreter::parser::Parser};
    ///
    /// let parser = Parser::new();
    /// assert_eq!(parser.parse("42").unwrap(), Expr::Number(42.0));
    /// assert!(parser.parse("2 +").is_err());
    /// assert!(parser.parse("(1))").is_err());
    /// ```
    pub fn parse(&self, source: &str) -> ParseResult<Expr> {
        let tokens = tokenize(source)?;
        let mut cursor = Cursor::new(&tokens, self.max_depth);

        let expr = parse_expression(&mut cursor)?;
        if let Some(token) = cursor.peek() {
            return Err(ParseError::TrailingToken { token: token.to_string() });
        }

        trace!(%expr, "parsed expression");
        Ok(expr)
    }
}

/// Position of the parser within one token sequence.
///
/// Provides one token of lookahead and counts how deeply the rules that
/// recurse into themselves are currently nested.
pub struct Cursor<'a> {
    tokens:    Peekable<slice::Iter<'a, Token>>,
    depth:     usize,
    max_depth: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub fn new(tokens: &'a [Token], max_depth: usize) -> Self {
        Self { tokens: tokens.iter().peekable(),
               depth: 0,
               max_depth }
    }

    /// Returns the current token without consuming it.
    pub fn peek(&mut self) -> Option<&'a Token> {
        self.tokens.peek().copied()
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        self.tokens.next()
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] when the limit is already
    /// reached, otherwise whatever `rule` returns.
    pub fn nested<T>(&mut self, rule: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth });
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }
}

/// Parses a full expression.
///
/// This is the entry point for the rule hierarchy. It begins at the
/// lowest-precedence level, addition, and descends from there.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `cursor`: Cursor positioned at the first token of the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    parse_additive(cursor)
}
