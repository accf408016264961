//! Phase operations.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::client::PipefyClient;
use crate::clients::PipefyError;
use crate::query::templates::{self, fields};
use crate::query::{Document, DocumentBuilder, Param};

/// Attributes sent by [`PipefyClient::update_phase_field`].
///
/// Every attribute is always sent, so build the input from the field's
/// current state and change only what should change.
///
/// # Example
///
/// ```rust
/// use pipefy_api::resources::UpdatePhaseFieldInput;
///
/// let input = UpdatePhaseFieldInput::new("priority", "Priority")
///     .options(["Low", "High"])
///     .required(true);
///
/// assert!(input.editable);
/// assert_eq!(input.options, vec!["Low", "High"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdatePhaseFieldInput {
    /// The phase field to update.
    pub id: Value,
    /// Field label.
    pub label: String,
    /// Choices offered by select-type fields.
    pub options: Vec<String>,
    /// Whether the field must be filled.
    pub required: bool,
    /// Whether the field can be edited.
    pub editable: bool,
}

impl UpdatePhaseFieldInput {
    /// Creates an input with no options, not required and editable.
    #[must_use]
    pub fn new(id: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            options: Vec::new(),
            required: false,
            editable: true,
        }
    }

    /// Sets the options.
    #[must_use]
    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Sets whether the field is required.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets whether the field is editable.
    #[must_use]
    pub const fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }
}

pub(crate) fn phase_document(
    id: Value,
    count: u32,
    search: Option<&Value>,
    response_fields: Option<&str>,
    card_fields: Option<&str>,
) -> DocumentBuilder {
    let search = search.cloned().unwrap_or_else(|| Value::Object(Map::new()));
    Document::builder(templates::PHASE)
        .param("id", Param::Literal(id))
        .param("count", Param::literal(count))
        .param("search", Param::Input(search))
        .param(
            "response_fields",
            Param::selection(response_fields.unwrap_or(fields::PHASE)),
        )
        .param(
            "card_fields",
            Param::selection(card_fields.unwrap_or(fields::PHASE_CARDS)),
        )
}

pub(crate) fn update_phase_field_document(
    input: &UpdatePhaseFieldInput,
    response_fields: Option<&str>,
) -> DocumentBuilder {
    Document::builder(templates::UPDATE_PHASE_FIELD)
        .param("id", Param::Literal(input.id.clone()))
        .param("label", Param::literal(input.label.as_str()))
        .param("options", Param::literal(input.options.clone()))
        .param("required", Param::literal(input.required))
        .param("editable", Param::literal(input.editable))
        .param(
            "response_fields",
            Param::selection(response_fields.unwrap_or(fields::UPDATE_PHASE_FIELD)),
        )
}

impl PipefyClient {
    /// Fetches a phase together with the first `count` of its cards.
    ///
    /// Pass [`DEFAULT_PHASE_CARD_COUNT`](crate::DEFAULT_PHASE_CARD_COUNT)
    /// for the usual page of 10 cards.
    /// `search` narrows the cards and is rendered as a GraphQL input object;
    /// `None` sends `{}`. `card_fields` is the selection applied to the
    /// card connection. Returns `data.phase`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use pipefy_api::DEFAULT_PHASE_CARD_COUNT;
    /// use serde_json::json;
    ///
    /// let search = json!({"title": "Lead"});
    /// let phase = client
    ///     .phase(42, DEFAULT_PHASE_CARD_COUNT, Some(&search), None, None, None)
    ///     .await?;
    /// println!("{} cards", phase["cards_count"]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the classified [`PipefyError`] of the final attempt.
    pub async fn phase(
        &self,
        id: impl Into<Value>,
        count: u32,
        search: Option<&Value>,
        response_fields: Option<&str>,
        card_fields: Option<&str>,
        headers: Option<HashMap<String, String>>,
    ) -> Result<Value, PipefyError> {
        let builder = phase_document(id.into(), count, search, response_fields, card_fields);
        self.fetch(builder, &["phase"], headers).await
    }

    /// Updates a phase field's label, options and flags.
    ///
    /// Returns `data.updatePhaseField.phase_field`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`PipefyError`] of the final attempt.
    pub async fn update_phase_field(
        &self,
        input: &UpdatePhaseFieldInput,
        response_fields: Option<&str>,
        headers: Option<HashMap<String, String>>,
    ) -> Result<Value, PipefyError> {
        let builder = update_phase_field_document(input, response_fields);
        self.fetch(builder, &["updatePhaseField", "phase_field"], headers)
            .await
    }
}
