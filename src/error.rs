use miette::Diagnostic;
use thiserror::Error;

/// Result type for swiftspec operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("function '{name}': {message}")]
    #[diagnostic(
        code(swiftspec::invalid_state),
        help("the failed call performed no mutation; adjust the generator code driving the builder")
    )]
    InvalidState { name: String, message: String },
}

impl Error {
    /// Create an invalid state error for a grammar-constraint violation
    pub fn invalid_state(name: impl Into<String>, message: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidState {
            name: name.into(),
            message: message.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_state_display() {
        let err = Error::invalid_state("save", "observers cannot have modifiers");
        assert_eq!(
            err.to_string(),
            "function 'save': observers cannot have modifiers"
        );
    }
}
