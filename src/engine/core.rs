use crate::{
    binding::{self, Binding},
    error::EvalResult,
};

/// Default limit on parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;
/// Default limit on the entries of each operand or operator stack.
pub const DEFAULT_MAX_STACK: usize = 64;

/// Resource limits applied to every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Deepest parenthesis nesting accepted before failing with
    /// `NestingTooDeep`.
    pub max_depth: usize,
    /// Most entries a single frame's operand or operator stack may hold before
    /// failing with `ExpressionTooComplex`.
    pub max_stack: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH,
               max_stack: DEFAULT_MAX_STACK, }
    }
}

/// Evaluates arithmetic expressions under a set of [`Limits`].
///
/// An `Evaluator` holds configuration only. Every call tokenizes and evaluates
/// its input from scratch, so one evaluator can be shared freely, including
/// across threads.
///
/// ## Usage
///
/// The free functions [`crate::evaluate`], [`crate::evaluate_with`] and
/// [`crate::assign`] use an evaluator with default limits. Construct one
/// directly to tighten or relax them.
///
/// ```
/// use infix_eval::engine::core::{Evaluator, Limits};
///
/// let strict = Evaluator::with_limits(Limits { max_depth: 1,
///                                              ..Limits::default() });
///
/// assert_eq!(strict.eval("2 * (3 + 4)").unwrap(), 14.0);
/// assert!(strict.eval("((1))").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    /// Limits enforced on every call.
    pub limits: Limits,
}

impl Evaluator {
    /// Creates an evaluator with the default limits.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_limits(Limits { max_depth: DEFAULT_MAX_DEPTH,
                                   max_stack: DEFAULT_MAX_STACK, })
    }

    /// Creates an evaluator with the given limits.
    #[must_use]
    pub const fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }

    /// Evaluates an expression that contains no identifiers.
    ///
    /// # Errors
    /// Returns an error if the expression is malformed or exceeds a limit. A
    /// letter or underscore is an invalid character here.
    pub fn eval(&self, source: &str) -> EvalResult<f64> {
        self.eval_region(source, 0..source.len(), None)
    }

    /// Evaluates an expression, resolving identifiers against `bindings`.
    ///
    /// # Errors
    /// Returns an error if a binding name is invalid, an identifier is
    /// unknown, or the expression is malformed or exceeds a limit.
    pub fn eval_with(&self, source: &str, bindings: &[Binding<'_>]) -> EvalResult<f64> {
        binding::validate(bindings)?;
        self.eval_region(source, 0..source.len(), Some(bindings))
    }
}
