//! Comment operations.

use std::collections::HashMap;

use serde_json::Value;

use crate::client::PipefyClient;
use crate::clients::PipefyError;
use crate::query::{templates, templates::fields, Document, DocumentBuilder, Param};

pub(crate) fn create_comment_document(
    card_id: Value,
    text: &str,
    response_fields: Option<&str>,
) -> DocumentBuilder {
    Document::builder(templates::CREATE_COMMENT)
        .param("card_id", Param::Literal(card_id))
        .param("text", Param::literal(text))
        .param(
            "response_fields",
            Param::selection(response_fields.unwrap_or(fields::CREATE_COMMENT)),
        )
}

impl PipefyClient {
    /// Adds a comment to a card.
    ///
    /// Returns `data.createComment.comment`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`PipefyError`] of the final attempt.
    pub async fn create_comment(
        &self,
        card_id: impl Into<Value>,
        text: &str,
        response_fields: Option<&str>,
        headers: Option<HashMap<String, String>>,
    ) -> Result<Value, PipefyError> {
        let builder = create_comment_document(card_id.into(), text, response_fields);
        self.fetch(builder, &["createComment", "comment"], headers)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_comment_document() {
        let document = create_comment_document(json!("c1"), "Looks good", None)
            .build()
            .unwrap();
        assert_eq!(
            document.as_str(),
            r#"mutation { createComment(input: { card_id: "c1" text: "Looks good" }) { comment { id text } } }"#
        );
    }

    #[test]
    fn test_create_comment_text_is_escaped() {
        let document = create_comment_document(json!(1), "line one\n\"quoted\" }", None)
            .build()
            .unwrap();
        assert!(document
            .as_str()
            .contains(r#"text: "line one\n\"quoted\" }""#));
    }
}
