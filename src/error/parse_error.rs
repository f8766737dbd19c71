#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors caused by the text of an expression.
///
/// Every `index` is a byte offset into the string handed to the entry point.
pub enum ParseError {
    /// Found a character that cannot start any token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where the character was found.
        index:     usize,
    },
    /// A numeric literal, or a `-` sign in front of one, could not be parsed.
    MalformedNumericLiteral {
        /// The text that failed to parse.
        literal: String,
        /// Where the literal starts.
        index:   usize,
    },
    /// A binary operator or the end of a group was reached where a value was
    /// expected.
    MissingOperand {
        /// Where the value was expected.
        index: usize,
    },
    /// Two values followed each other without an operator in between.
    MissingOperator {
        /// Where the second value starts.
        index: usize,
    },
    /// A `(` was never closed, or a `)` was never opened.
    UnbalancedParenthesis {
        /// Where the unmatched parenthesis is.
        index: usize,
    },
    /// The expression, or a parenthesized group, contains nothing to evaluate.
    EmptyExpression {
        /// Where the empty expression ends.
        index: usize,
    },
    /// Parentheses are nested deeper than the configured limit.
    NestingTooDeep {
        /// The configured nesting limit.
        limit: usize,
    },
    /// An operand or operator stack grew past the configured limit.
    ExpressionTooComplex {
        /// The configured stack limit.
        limit: usize,
    },
    /// An assignment contained no `=`.
    NoAssignmentOperator,
    /// An assignment contained more than one `=`.
    MultipleAssignmentOperators {
        /// Where the second `=` is.
        index: usize,
    },
    /// The left-hand side of an assignment is empty.
    MissingAssignmentTarget,
    /// The left-hand side of an assignment names more than one identifier.
    MultipleAssignmentTargets {
        /// Where the second identifier starts.
        index: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => {
                write!(f, "Error at {index}: Invalid character '{character}'.")
            },
            Self::MalformedNumericLiteral { literal, index } => {
                write!(f, "Error at {index}: Malformed numeric literal '{literal}'.")
            },
            Self::MissingOperand { index } => {
                write!(f, "Error at {index}: Expected a value but found none.")
            },
            Self::MissingOperator { index } => write!(f,
                                                      "Error at {index}: Expected an operator between two values."),
            Self::UnbalancedParenthesis { index } => {
                write!(f, "Error at {index}: Unbalanced parenthesis.")
            },
            Self::EmptyExpression { index } => {
                write!(f, "Error at {index}: Expression is empty.")
            },
            Self::NestingTooDeep { limit } => write!(f,
                                                     "Parentheses are nested deeper than the limit of {limit}."),
            Self::ExpressionTooComplex { limit } => write!(f,
                                                           "Expression needs more than {limit} pending values or operators."),
            Self::NoAssignmentOperator => write!(f, "Assignment is missing '='."),
            Self::MultipleAssignmentOperators { index } => {
                write!(f, "Error at {index}: Assignment contains more than one '='.")
            },
            Self::MissingAssignmentTarget => {
                write!(f, "Assignment has no target before '='.")
            },
            Self::MultipleAssignmentTargets { index } => write!(f,
                                                                "Error at {index}: Assignment has more than one target before '='."),
        }
    }
}

impl std::error::Error for ParseError {}
