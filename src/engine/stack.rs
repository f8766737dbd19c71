use smallvec::SmallVec;

use crate::{engine::operator::BinaryOperator, error::ParseError};

/// Entries kept inline before a stack spills to the heap.
const INLINE_CAPACITY: usize = 4;

/// A growable stack that refuses to grow past a fixed number of entries.
///
/// Each evaluation frame owns its own stacks; nothing is shared between
/// frames or calls.
#[derive(Debug)]
pub struct BoundedStack<T> {
    items: SmallVec<[T; INLINE_CAPACITY]>,
    limit: usize,
}

/// Pending values of one evaluation frame.
pub type OperandStack = BoundedStack<f64>;
/// Pending operators of one evaluation frame.
pub type OperatorStack = BoundedStack<BinaryOperator>;

impl<T> BoundedStack<T> {
    /// Creates an empty stack holding at most `limit` entries.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { items: SmallVec::new(),
               limit }
    }

    /// Pushes an entry.
    ///
    /// # Errors
    /// Returns [`ParseError::ExpressionTooComplex`] if the stack is full.
    pub fn push(&mut self, item: T) -> Result<(), ParseError> {
        if self.items.len() >= self.limit {
            return Err(ParseError::ExpressionTooComplex { limit: self.limit });
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the top entry.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top entry.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the top entry mutably.
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
