use std::fmt;

/// Defines the builtin functions by generating the [`Function`] enum and the
/// name table the lexer matches against.
///
/// Each entry provides:
/// - the source name of the function,
/// - the enum variant it maps to.
///
/// The macro produces:
/// - `Function` (one variant per entry),
/// - `FUNCTIONS` (static `(name, Function)` table for lookup),
/// - `Function::name` (reverse mapping used for display).
///
/// The evaluator matches on `Function` exhaustively, so an entry added here
/// without an evaluation rule is a compile error rather than a runtime gap.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $variant:ident
        ),* $(,)?
    ) => {
        /// A builtin function of one argument.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Function {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        /// Every builtin function paired with its source name.
        pub const FUNCTIONS: &[(&str, Function)] = &[
            $(($name, Function::$variant),)*
        ];

        impl Function {
            /// Returns the name this function is written as in source text.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }
    };
}

builtin_functions! {
    "sin"    => Sin,
    "cos"    => Cos,
    "tg"     => Tg,
    "ctg"    => Ctg,
    "ln"     => Ln,
    "exp"    => Exp,
    "sqrt"   => Sqrt,
    "arctan" => Arctan,
}

/// A named mathematical constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// `pi`, the ratio of a circle's circumference to its diameter.
    Pi,
    /// `e`, Euler's number.
    E,
}

/// Every constant paired with its source name.
pub const CONSTANTS: &[(&str, Constant)] = &[("pi", Constant::Pi), ("e", Constant::E)];

impl Constant {
    /// Returns the numeric value of the constant.
    ///
    /// # Example
    /// ```
    /// use exprcalc::interpreter::builtin::Constant;
    ///
    /// assert_eq!(Constant::Pi.value(), std::f64::consts::PI);
    /// ```
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }

    /// Returns the name this constant is written as in source text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A builtin name recognised by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Name {
    /// A function name such as `sin`.
    Function(Function),
    /// A constant name such as `pi`.
    Constant(Constant),
}

/// Finds the longest builtin name that `text` starts with.
///
/// Functions and constants are searched together so that, for example, `exp`
/// is preferred over the constant `e`.
///
/// # Returns
/// The matched name and its length in bytes, or `None` when `text` does not
/// start with any builtin name.
///
/// # Example
/// ```
/// use exprcalc::interpreter::builtin::{Constant, Function, Name, longest_name};
///
/// assert_eq!(longest_name("exp(1)"), Some((Name::Function(Function::Exp), 3)));
/// assert_eq!(longest_name("e"), Some((Name::Constant(Constant::E), 1)));
/// assert_eq!(longest_name("x"), None);
/// ```
#[must_use]
pub fn longest_name(text: &str) -> Option<(Name, usize)> {
    let functions = FUNCTIONS.iter()
                             .map(|(name, function)| (*name, Name::Function(*function)));
    let constants = CONSTANTS.iter()
                             .map(|(name, constant)| (*name, Name::Constant(*constant)));

    functions.chain(constants)
             .filter(|(name, _)| text.starts_with(name))
             .max_by_key(|(name, _)| name.len())
             .map(|(name, found)| (found, name.len()))
}
