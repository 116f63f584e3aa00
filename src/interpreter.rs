/// The builtin function and constant tables.
///
/// One table drives both the lexer, which recognises the names, and the
/// evaluator, which matches on the generated enum.
pub mod builtin;
/// The evaluator module computes the value of a syntax tree.
///
/// The evaluator walks the AST, applies arithmetic operators and builtin
/// functions, converts angles and reports domain and range errors.
///
/// # Responsibilities
/// - Evaluates every AST node kind.
/// - Applies the configured angle unit to trigonometric functions.
/// - Reports errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes expression text for parsing.
///
/// The lexer reads the raw text and produces a flat sequence of tokens:
/// numbers, operators, function names, constants and parentheses.
///
/// # Responsibilities
/// - Converts the input characters into tokens.
/// - Splits letter runs into builtin names, longest first.
/// - Reports the first character that starts no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence by recursive descent and
/// constructs an AST that encodes precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Validates parentheses and function arguments.
/// - Bounds nesting depth and rejects leftover tokens.
pub mod parser;
