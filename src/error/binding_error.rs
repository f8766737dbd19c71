#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that involve the caller's binding set.
pub enum BindingError {
    /// A binding's name is not a valid identifier.
    InvalidBindingName {
        /// The rejected name.
        name: String,
    },
    /// An identifier in the expression matched no binding.
    UnknownIdentifier {
        /// The name of the identifier.
        name:  String,
        /// Where the identifier starts.
        index: usize,
    },
    /// The target of an assignment matched no binding.
    UnknownTarget {
        /// The name of the target.
        name: String,
    },
    /// The target of an assignment is a constant.
    ImmutableTarget {
        /// The name of the constant.
        name: String,
    },
}

impl std::fmt::Display for BindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBindingName { name } => {
                write!(f, "Binding name '{name}' is not a valid identifier.")
            },
            Self::UnknownIdentifier { name, index } => {
                write!(f, "Error at {index}: Unknown identifier '{name}'.")
            },
            Self::UnknownTarget { name } => {
                write!(f, "Cannot assign to unknown variable '{name}'.")
            },
            Self::ImmutableTarget { name } => {
                write!(f, "Cannot assign to constant '{name}'.")
            },
        }
    }
}

impl std::error::Error for BindingError {}
