//! Pipe operations.

use std::collections::HashMap;

use serde_json::Value;

use crate::client::PipefyClient;
use crate::clients::PipefyError;
use crate::query::{templates, templates::fields, Document, DocumentBuilder, Param};

pub(crate) fn pipe_document(id: Value, response_fields: Option<&str>) -> DocumentBuilder {
    Document::builder(templates::PIPE)
        .param("id", Param::Literal(id))
        .param(
            "response_fields",
            Param::selection(response_fields.unwrap_or(fields::PIPE)),
        )
}

impl PipefyClient {
    /// Fetches a pipe.
    ///
    /// The default selection includes the start form fields, labels and
    /// phases with their first five cards. Returns `data.pipe`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`PipefyError`] of the final attempt.
    pub async fn pipe(
        &self,
        id: impl Into<Value>,
        response_fields: Option<&str>,
        headers: Option<HashMap<String, String>>,
    ) -> Result<Value, PipefyError> {
        let builder = pipe_document(id.into(), response_fields);
        self.fetch(builder, &["pipe"], headers).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pipe_document() {
        let document = pipe_document(json!(301), Some("id name")).build().unwrap();
        assert_eq!(document.as_str(), "{ pipe (id: 301) { id name } }");
    }

    #[test]
    fn test_pipe_document_default_selection() {
        let document = pipe_document(json!("301"), None).build().unwrap();
        assert!(document
            .as_str()
            .starts_with(r#"{ pipe (id: "301") { id name start_form_fields { label id }"#));
    }
}
