use crate::error::BindingError;

/// Distinguishes the two kinds of binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// A name bound to a caller-owned slot that assignments may overwrite.
    Variable,
    /// A name bound to a fixed value.
    Constant,
}

/// The value side of a [`Binding`].
#[derive(Debug, PartialEq)]
pub enum BindingValue<'a> {
    /// Borrowed slot owned by the caller. Reads see its current contents.
    Variable(&'a mut f64),
    /// Immutable value.
    Constant(f64),
}

/// A named association between an identifier and a value.
///
/// Binding sets are plain slices: `&[Binding]` is enough to evaluate, while
/// `&mut [Binding]` is required to assign. Names should be unique within a
/// set; on duplicates the first match wins and later entries are unreachable.
///
/// # Example
/// ```
/// use infix_eval::binding::{Binding, BindingKind};
///
/// let mut x = 4.0;
/// let bindings = [Binding::variable("x", &mut x), Binding::constant("half", 0.5)];
///
/// assert_eq!(bindings[0].kind(), BindingKind::Variable);
/// assert_eq!(bindings[0].value(), 4.0);
/// assert_eq!(bindings[1].value(), 0.5);
/// ```
#[derive(Debug, PartialEq)]
pub struct Binding<'a> {
    name:  &'a str,
    value: BindingValue<'a>,
}

impl<'a> Binding<'a> {
    /// Binds `name` to a mutable slot owned by the caller.
    #[must_use]
    pub const fn variable(name: &'a str, slot: &'a mut f64) -> Self {
        Self { name,
               value: BindingValue::Variable(slot) }
    }

    /// Binds `name` to a fixed value.
    #[must_use]
    pub const fn constant(name: &'a str, value: f64) -> Self {
        Self { name,
               value: BindingValue::Constant(value) }
    }

    /// The bound name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Whether this binding is a variable or a constant.
    #[must_use]
    pub const fn kind(&self) -> BindingKind {
        match self.value {
            BindingValue::Variable(_) => BindingKind::Variable,
            BindingValue::Constant(_) => BindingKind::Constant,
        }
    }

    /// Reads the bound value. For a variable this is the current contents of
    /// its slot.
    #[must_use]
    pub fn value(&self) -> f64 {
        match &self.value {
            BindingValue::Variable(slot) => **slot,
            BindingValue::Constant(value) => *value,
        }
    }

    /// Overwrites the slot of a variable.
    ///
    /// # Errors
    /// Returns [`BindingError::ImmutableTarget`] if the binding is a constant.
    pub fn store(&mut self, value: f64) -> Result<(), BindingError> {
        match &mut self.value {
            BindingValue::Variable(slot) => {
                **slot = value;
                Ok(())
            },
            BindingValue::Constant(_) => {
                Err(BindingError::ImmutableTarget { name: self.name.to_owned() })
            },
        }
    }
}

/// Checks whether `name` matches `[A-Za-z_][A-Za-z0-9_]*`.
///
/// # Example
/// ```
/// use infix_eval::binding::is_valid_identifier;
///
/// assert!(is_valid_identifier("_tmp1"));
/// assert!(!is_valid_identifier("1st"));
/// assert!(!is_valid_identifier(""));
/// ```
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next()
         .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validates every name in a binding set.
///
/// All invalid names are reported through `tracing`; the returned error names
/// the first one.
///
/// # Errors
/// Returns [`BindingError::InvalidBindingName`] if any name is not a valid
/// identifier.
pub fn validate(bindings: &[Binding<'_>]) -> Result<(), BindingError> {
    let mut first_invalid = None;

    for binding in bindings.iter().filter(|b| !is_valid_identifier(b.name)) {
        tracing::warn!(name = binding.name, "binding name is not a valid identifier");
        first_invalid.get_or_insert(binding.name);
    }

    first_invalid.map_or(Ok(()), |name| {
                     Err(BindingError::InvalidBindingName { name: name.to_owned() })
                 })
}

/// Finds the first binding whose name is exactly `name`.
///
/// The comparison is case-sensitive and covers the whole slice, so `x` never
/// matches a binding named `xy`.
#[must_use]
pub fn resolve<'b, 'a>(name: &str, bindings: &'b [Binding<'a>]) -> Option<&'b Binding<'a>> {
    bindings.iter().find(|binding| binding.name == name)
}

/// Finds the first binding named `name` and checks that it can be written.
///
/// # Errors
/// - [`BindingError::UnknownTarget`] if no binding has that name.
/// - [`BindingError::ImmutableTarget`] if the first match is a constant.
pub fn resolve_mutable<'b, 'a>(name: &str,
                               bindings: &'b mut [Binding<'a>])
                               -> Result<&'b mut Binding<'a>, BindingError> {
    let binding = bindings.iter_mut()
                          .find(|binding| binding.name == name)
                          .ok_or_else(|| BindingError::UnknownTarget { name: name.to_owned() })?;

    if binding.kind() == BindingKind::Constant {
        return Err(BindingError::ImmutableTarget { name: name.to_owned() });
    }

    Ok(binding)
}
