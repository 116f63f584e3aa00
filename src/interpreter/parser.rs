/// Parser entry point and token cursor.
///
/// Contains the [`core::Parser`] type, the cursor that tracks lookahead and
/// nesting depth, and the top-level expression rule.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles prefix negation, numbers, constants, function calls and
/// parenthesised groups.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the additive, multiplicative and power rules, including their
/// associativity.
pub mod binary;

pub use self::core::{DEFAULT_MAX_DEPTH, ParseResult, Parser};
