/// Evaluator configuration and entry points.
///
/// Declares [`core::Evaluator`] and its [`core::Limits`], and the methods that
/// evaluate an expression with or without a binding set.
pub mod core;

/// The shunting-yard evaluation of one expression.
///
/// Walks the token stream once, keeping a small operand stack and operator
/// stack per parenthesis level and recursing into each group.
pub mod expression;

/// The `name = expression` form.
///
/// Splits the text at its `=`, checks the target, evaluates the right-hand
/// side and writes the result through the target's slot.
pub mod assignment;

/// Tokenizes expression text.
///
/// Produces numbers, identifiers, the four operators and parentheses, each
/// with its byte range in the caller's string, and reports characters that
/// start no token.
pub mod lexer;

/// The binary operators, their precedence and their arithmetic.
pub mod operator;

/// Bounded operand and operator stacks.
pub mod stack;
