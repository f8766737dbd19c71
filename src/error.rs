/// Syntax errors.
///
/// Defines every error that can occur while tokenizing and evaluating the
/// structure of an expression: unknown characters, malformed literals, missing
/// operands or operators, unbalanced parentheses, resource limits and the
/// shape of an assignment.
pub mod parse_error;
/// Binding errors.
///
/// Contains the errors raised while validating a binding set or resolving an
/// identifier against it, including writes to unknown or immutable targets.
pub mod binding_error;

pub use binding_error::BindingError;
pub use parse_error::ParseError;

/// Result type used throughout the crate.
pub type EvalResult<T> = Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
/// Any error that can abort an evaluation or assignment.
pub enum Error {
    /// The expression itself is malformed or exceeds a configured limit.
    Parse(ParseError),
    /// The binding set is invalid or an identifier could not be resolved.
    Binding(BindingError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<BindingError> for Error {
    fn from(error: BindingError) -> Self {
        Self::Binding(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Binding(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Binding(e) => Some(e),
        }
    }
}
