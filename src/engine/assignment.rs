use crate::{
    binding::{self, Binding},
    engine::{
        core::Evaluator,
        lexer::{Token, TokenStream, invalid_character},
    },
    error::{EvalResult, ParseError},
};

impl Evaluator {
    /// Evaluates an assignment of the form `name = expression` and writes the
    /// result into the variable `name`.
    ///
    /// The target is checked before the right-hand side is evaluated; if
    /// anything fails, no slot is written.
    ///
    /// # Parameters
    /// - `source`: The assignment text. Whitespace around both sides is
    ///   ignored.
    /// - `bindings`: Binding set used for the target and for identifiers on the
    ///   right-hand side.
    ///
    /// # Returns
    /// The value that was stored.
    ///
    /// # Errors
    /// Returns an error if a binding name is invalid, the text does not contain
    /// exactly one `=`, the left-hand side is not exactly one identifier, the
    /// target is unknown or a constant, or the right-hand side fails to
    /// evaluate.
    ///
    /// # Example
    /// ```
    /// use infix_eval::{binding::Binding, engine::core::Evaluator};
    ///
    /// let mut total = 0.0;
    /// let mut bindings = [Binding::variable("total", &mut total), Binding::constant("rate", 0.5)];
    ///
    /// let stored = Evaluator::new().assign("total = 10 * rate", &mut bindings).unwrap();
    /// assert_eq!(stored, 5.0);
    /// assert_eq!(bindings[0].value(), 5.0);
    /// ```
    pub fn assign(&self, source: &str, bindings: &mut [Binding<'_>]) -> EvalResult<f64> {
        binding::validate(bindings)?;

        let equals = assignment_operator(source)?;
        let name = assignment_target(source, equals)?;
        binding::resolve_mutable(name, bindings)?;

        let value = self.eval_region(source, equals + 1..source.len(), Some(&*bindings))?;
        binding::resolve_mutable(name, bindings)?.store(value)?;

        tracing::debug!(variable = name, value, "assigned variable");
        Ok(value)
    }
}

/// Returns the position of the only `=` in `source`.
fn assignment_operator(source: &str) -> Result<usize, ParseError> {
    let mut positions = source.match_indices('=').map(|(index, _)| index);
    let equals = positions.next().ok_or(ParseError::NoAssignmentOperator)?;

    if let Some(index) = positions.next() {
        return Err(ParseError::MultipleAssignmentOperators { index });
    }
    Ok(equals)
}

/// Returns the single identifier in front of the `=` at `equals`.
fn assignment_target(source: &str, equals: usize) -> Result<&str, ParseError> {
    let mut tokens = TokenStream::over(source, 0..equals);
    let mut target = None;

    while let Some(next) = tokens.next_token() {
        let (token, span) = next?;
        match token {
            Token::Identifier if target.is_none() => target = Some(tokens.slice(&span)),
            Token::Identifier => {
                return Err(ParseError::MultipleAssignmentTargets { index: span.start });
            },
            _ => return Err(invalid_character(tokens.slice(&span), span.start)),
        }
    }

    target.ok_or(ParseError::MissingAssignmentTarget)
}
