//! Errors raised while assembling a GraphQL document.

use thiserror::Error;

/// Error returned when a GraphQL document cannot be assembled.
///
/// These errors are raised before any request is sent and are never retried.
///
/// # Example
///
/// ```rust
/// use pipefy_api::query::{Document, InvalidQueryError};
///
/// let result = Document::builder("{ card(id: ${id}) { id } }").build();
/// assert!(matches!(
///     result,
///     Err(InvalidQueryError::MissingParameter { ref name }) if name == "id"
/// ));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidQueryError {
    /// The template names a parameter that was not supplied.
    #[error("No value supplied for query parameter '{name}'.")]
    MissingParameter {
        /// The placeholder name.
        name: String,
    },

    /// A `${` placeholder opener has no closing `}`.
    #[error("Unterminated placeholder starting at byte {offset}.")]
    UnterminatedPlaceholder {
        /// Byte offset of the `${` opener in the template.
        offset: usize,
    },

    /// The assembled document does not close every brace, bracket, or parenthesis.
    #[error("GraphQL document is not closed: {document}")]
    UnbalancedBraces {
        /// The offending document text.
        document: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_message_names_parameter() {
        let error = InvalidQueryError::MissingParameter {
            name: "card_id".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No value supplied for query parameter 'card_id'."
        );
    }

    #[test]
    fn test_unbalanced_message_includes_document() {
        let error = InvalidQueryError::UnbalancedBraces {
            document: "mutation { x".to_string(),
        };
        assert!(error.to_string().contains("mutation { x"));
    }
}
