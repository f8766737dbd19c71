use std::ops::Range;

use crate::{
    binding::{self, Binding},
    engine::{
        core::Evaluator,
        lexer::{Token, TokenStream, invalid_character},
        operator::BinaryOperator,
        stack::{OperandStack, OperatorStack},
    },
    error::{BindingError, EvalResult, ParseError},
};

/// Working state of one parenthesis level.
///
/// `expects_value` is true at the start of the level and after every binary
/// operator; that is where a `-` signs the following literal.
struct Frame {
    operands:      OperandStack,
    operators:     OperatorStack,
    expects_value: bool,
}

impl Frame {
    fn new(limit: usize) -> Self {
        Self { operands:      OperandStack::new(limit),
               operators:     OperatorStack::new(limit),
               expects_value: true, }
    }

    fn push_value(&mut self, value: f64, index: usize) -> Result<(), ParseError> {
        if !self.expects_value {
            return Err(ParseError::MissingOperator { index });
        }
        self.operands.push(value)?;
        self.expects_value = false;
        Ok(())
    }

    /// Pushes `op` once every pending operator of equal or higher precedence
    /// has been applied.
    fn push_operator(&mut self, op: BinaryOperator, index: usize) -> Result<(), ParseError> {
        if self.expects_value {
            return Err(ParseError::MissingOperand { index });
        }
        while let Some(&top) = self.operators.last()
              && op.precedence() <= top.precedence()
        {
            self.apply_top(index)?;
        }
        self.operators.push(op)?;
        self.expects_value = true;
        Ok(())
    }

    fn apply_top(&mut self, index: usize) -> Result<(), ParseError> {
        let (Some(op), Some(right), Some(left)) =
            (self.operators.pop(), self.operands.pop(), self.operands.pop())
        else {
            return Err(ParseError::MissingOperand { index });
        };

        let result = op.apply(left, right);
        tracing::trace!(%op, left, right, result, "applied operator");
        self.operands.push(result)
    }

    /// Multiplies the most recent value by `factor`, binding tighter than any
    /// pending operator.
    fn multiply_last(&mut self, factor: f64) {
        if let Some(last) = self.operands.last_mut() {
            *last *= factor;
        }
    }

    /// Drains the operator stack and returns the single remaining value.
    fn finish(mut self, index: usize) -> Result<f64, ParseError> {
        if self.expects_value {
            return Err(if self.operands.is_empty() && self.operators.is_empty() {
                           ParseError::EmptyExpression { index }
                       } else {
                           ParseError::MissingOperand { index }
                       });
        }
        while !self.operators.is_empty() {
            self.apply_top(index)?;
        }
        match self.operands.pop() {
            Some(result) if self.operands.is_empty() => Ok(result),
            _ => Err(ParseError::MissingOperator { index }),
        }
    }
}

impl Evaluator {
    /// Evaluates `source[region]`. Error positions refer to `source`.
    pub(crate) fn eval_region(&self,
                              source: &str,
                              region: Range<usize>,
                              bindings: Option<&[Binding<'_>]>)
                              -> EvalResult<f64> {
        let mut tokens = TokenStream::over(source, region);
        self.eval_group(&mut tokens, bindings, 0, None)
    }

    /// Evaluates one parenthesis level.
    ///
    /// The top level is entered with `open == None` and ends at the end of
    /// input. A nested level is entered right after its `(`, whose position is
    /// `open`, and returns once it consumes the matching `)`; the caller then
    /// resumes after it.
    ///
    /// Values are pushed as they are read. An incoming operator first applies
    /// every pending operator of equal or higher precedence, which makes
    /// same-precedence chains evaluate left to right. A `(` directly after a
    /// value multiplies that value by the group, so `48/2(9+3)` is
    /// `48/(2*(9+3))`.
    ///
    /// # Parameters
    /// - `tokens`: Token stream shared by all levels.
    /// - `bindings`: Binding set, or `None` if identifiers are not allowed.
    /// - `depth`: Nesting depth of this level.
    /// - `open`: Position of the `(` that opened this level.
    ///
    /// # Returns
    /// The value of the level.
    fn eval_group(&self,
                  tokens: &mut TokenStream<'_>,
                  bindings: Option<&[Binding<'_>]>,
                  depth: usize,
                  open: Option<usize>)
                  -> EvalResult<f64> {
        let mut frame = Frame::new(self.limits.max_stack);

        while let Some(next) = tokens.next_token() {
            let (token, span) = next?;

            match token {
                Token::Number(value) => frame.push_value(value, span.start)?,
                Token::Minus if frame.expects_value => {
                    let value = signed_literal(tokens, &span)?;
                    frame.push_value(value, span.start)?;
                },
                Token::Identifier => {
                    let name = tokens.slice(&span);
                    let Some(bindings) = bindings else {
                        return Err(invalid_character(name, span.start).into());
                    };
                    let binding = binding::resolve(name, bindings).ok_or_else(|| {
                                      BindingError::UnknownIdentifier { name:  name.to_owned(),
                                                                        index: span.start, }
                                  })?;
                    frame.push_value(binding.value(), span.start)?;
                },
                Token::LParen => {
                    if depth >= self.limits.max_depth {
                        return Err(ParseError::NestingTooDeep { limit: self.limits.max_depth }.into());
                    }
                    let value = self.eval_group(tokens, bindings, depth + 1, Some(span.start))?;
                    if frame.expects_value {
                        frame.push_value(value, span.start)?;
                    } else {
                        frame.multiply_last(value);
                    }
                },
                Token::RParen => {
                    if open.is_none() {
                        return Err(ParseError::UnbalancedParenthesis { index: span.start }.into());
                    }
                    return Ok(frame.finish(span.start)?);
                },
                other => {
                    // Whitespace is skipped by the lexer, so only operators get here.
                    if let Some(op) = BinaryOperator::from_token(&other) {
                        frame.push_operator(op, span.start)?;
                    }
                },
            }
        }

        if let Some(index) = open {
            return Err(ParseError::UnbalancedParenthesis { index }.into());
        }
        Ok(frame.finish(tokens.end())?)
    }
}

/// Reads the literal signed by the `-` at `sign`.
///
/// The literal must follow the sign directly: `-5` is a literal while `- 5`,
/// `-x` and `-(5)` are malformed.
fn signed_literal(tokens: &mut TokenStream<'_>, sign: &Range<usize>) -> Result<f64, ParseError> {
    let end = match tokens.next_token() {
        Some(Ok((Token::Number(value), span))) if span.start == sign.end => return Ok(-value),
        Some(Ok((_, span))) => span.end,
        Some(Err(_)) | None => sign.end,
    };

    Err(ParseError::MalformedNumericLiteral { literal: tokens.slice(&(sign.start..end))
                                                             .to_owned(),
                                              index:   sign.start, })
}
