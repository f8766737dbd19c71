//! # infix-eval
//!
//! infix-eval is an embeddable evaluator for arithmetic expressions written in
//! Rust. It evaluates numeric literals, the operators `+ - * /`, parentheses
//! and, optionally, caller-supplied variables and constants to a single `f64`,
//! and supports assignments that write a result back into a variable.
//!
//! ```
//! use infix_eval::{assign, binding::Binding, evaluate, evaluate_with};
//!
//! assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
//! assert_eq!(evaluate("2(3 + 4)").unwrap(), 14.0);
//!
//! let mut x = 4.0;
//! let mut bindings = [Binding::variable("x", &mut x), Binding::constant("two", 2.0)];
//! assert_eq!(evaluate_with("x * two + 1", &bindings).unwrap(), 9.0);
//!
//! assign("x = x / two", &mut bindings).unwrap();
//! assert_eq!(x, 2.0);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{binding::Binding, engine::core::Evaluator, error::EvalResult};

/// Resolves identifiers against caller-supplied bindings.
///
/// This module declares the `Binding` type that associates a name with either
/// a constant or a mutable slot owned by the caller, and the functions that
/// validate a binding set and look names up in it.
///
/// # Responsibilities
/// - Validates binding names against the identifier syntax.
/// - Resolves a name to its binding for reading.
/// - Resolves a name to a writable variable for assignments.
pub mod binding;
/// Evaluates expressions and assignments.
///
/// This module ties together tokenizing, operator-precedence evaluation,
/// recursive evaluation of parenthesized groups and identifier resolution.
///
/// # Responsibilities
/// - Converts expression text into tokens with source positions.
/// - Evaluates operators by precedence, left to right within a precedence.
/// - Enforces nesting and stack limits.
/// - Implements the assignment form.
pub mod engine;
/// Provides the error types for evaluation and assignment.
///
/// Every failure aborts the whole call and is reported as an [`error::Error`]
/// carrying the offending position or name.
pub mod error;

/// Evaluates an expression made of numbers, `+ - * /` and parentheses.
///
/// Identifiers are not allowed; use [`evaluate_with`] for those.
///
/// # Errors
/// Returns an error if the expression is malformed, for example because of an
/// unknown character, a missing operand or an unbalanced parenthesis.
///
/// # Examples
/// ```
/// use infix_eval::{
///     error::{Error, ParseError},
///     evaluate,
/// };
///
/// assert_eq!(evaluate("10 / 2 / 5").unwrap(), 1.0);
/// assert_eq!(evaluate("-5 + 2").unwrap(), -3.0);
///
/// let err = evaluate("2 $ 3").unwrap_err();
/// assert_eq!(err,
///            Error::Parse(ParseError::InvalidCharacter { character: '$',
///                                                        index:     2, }));
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    Evaluator::new().eval(expression)
}

/// Evaluates an expression, resolving identifiers against `bindings`.
///
/// # Errors
/// Returns an error if a binding name is not a valid identifier, an
/// identifier matches no binding, or the expression is malformed.
///
/// # Examples
/// ```
/// use infix_eval::{binding::Binding, evaluate_with};
///
/// let mut x = 4.0;
/// let bindings = [Binding::variable("x", &mut x), Binding::constant("y", 9.0)];
///
/// assert_eq!(evaluate_with("x + 1", &bindings).unwrap(), 5.0);
/// assert_eq!(evaluate_with("y", &bindings).unwrap(), 9.0);
/// assert!(evaluate_with("z", &bindings).is_err());
/// ```
pub fn evaluate_with(expression: &str, bindings: &[Binding<'_>]) -> EvalResult<f64> {
    Evaluator::new().eval_with(expression, bindings)
}

/// Evaluates `name = expression` and stores the result in the variable `name`.
///
/// Returns the stored value.
///
/// # Errors
/// Returns an error if the assignment is malformed, the target is unknown or
/// a constant, or the right-hand side fails to evaluate. On error no variable
/// is modified.
///
/// # Examples
/// ```
/// use infix_eval::{
///     assign,
///     binding::Binding,
///     error::{BindingError, Error},
/// };
///
/// let mut x = 0.0;
/// assign("x = 3 * 4", &mut [Binding::variable("x", &mut x)]).unwrap();
/// assert_eq!(x, 12.0);
///
/// let err = assign("x = 1", &mut [Binding::constant("x", 1.0)]).unwrap_err();
/// assert_eq!(err,
///            Error::Binding(BindingError::ImmutableTarget { name: "x".to_string() }));
/// ```
pub fn assign(expression: &str, bindings: &mut [Binding<'_>]) -> EvalResult<f64> {
    Evaluator::new().assign(expression, bindings)
}
