//! Card operations.
//!
//! Cards are the records that move through a pipe's phases.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::client::PipefyClient;
use crate::clients::PipefyError;
use crate::query::{templates, templates::fields, Document, DocumentBuilder, Param};

/// Attributes sent by [`PipefyClient::update_card`].
///
/// `title` and `due_date` are sent as `null` when unset. The id lists are
/// always sent, so an empty list clears the card's assignees or labels.
///
/// # Example
///
/// ```rust
/// use pipefy_api::resources::UpdateCardInput;
///
/// let input = UpdateCardInput::new("123")
///     .title("Follow up")
///     .assignee_ids(["301", "302"]);
///
/// assert_eq!(input.assignee_ids.len(), 2);
/// assert!(input.label_ids.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateCardInput {
    /// The card to update.
    pub id: Value,
    /// New title.
    pub title: Option<String>,
    /// New due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Users assigned to the card.
    pub assignee_ids: Vec<Value>,
    /// Labels attached to the card.
    pub label_ids: Vec<Value>,
}

impl UpdateCardInput {
    /// Creates an input for the given card with every attribute unset.
    #[must_use]
    pub fn new(id: impl Into<Value>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the assignee ids.
    #[must_use]
    pub fn assignee_ids<I, V>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.assignee_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the label ids.
    #[must_use]
    pub fn label_ids<I, V>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.label_ids = ids.into_iter().map(Into::into).collect();
        self
    }
}

pub(crate) fn card_document(id: Value, response_fields: Option<&str>) -> DocumentBuilder {
    Document::builder(templates::CARD)
        .param("id", Param::Literal(id))
        .param(
            "response_fields",
            Param::selection(response_fields.unwrap_or(fields::CARD)),
        )
}

pub(crate) fn all_cards_document(
    pipe_id: Value,
    filter: Option<&Value>,
    response_fields: Option<&str>,
) -> DocumentBuilder {
    let filter = filter.cloned().unwrap_or_else(|| Value::Object(Map::new()));
    Document::builder(templates::ALL_CARDS)
        .param("pipe_id", Param::Literal(pipe_id))
        .param("filter", Param::Input(filter))
        .param(
            "response_fields",
            Param::selection(response_fields.unwrap_or(fields::ALL_CARDS)),
        )
}

pub(crate) fn move_card_to_phase_document(
    card_id: Value,
    destination_phase_id: Value,
    response_fields: Option<&str>,
) -> DocumentBuilder {
    Document::builder(templates::MOVE_CARD_TO_PHASE)
        .param("card_id", Param::Literal(card_id))
        .param("destination_phase_id", Param::Literal(destination_phase_id))
        .param(
            "response_fields",
            Param::selection(response_fields.unwrap_or(fields::MOVE_CARD_TO_PHASE)),
        )
}

pub(crate) fn update_card_document(
    input: &UpdateCardInput,
    response_fields: Option<&str>,
) -> DocumentBuilder {
    Document::builder(templates::UPDATE_CARD)
        .param("id", Param::Literal(input.id.clone()))
        .param("title", Param::literal(input.title.clone()))
        .param("due_date", Param::datetime(input.due_date))
        .param("assignee_ids", Param::List(input.assignee_ids.clone()))
        .param("label_ids", Param::List(input.label_ids.clone()))
        .param(
            "response_fields",
            Param::selection(response_fields.unwrap_or(fields::UPDATE_CARD)),
        )
}

pub(crate) fn update_card_field_document(
    card_id: Value,
    field_id: Value,
    new_value: Value,
    response_fields: Option<&str>,
) -> DocumentBuilder {
    Document::builder(templates::UPDATE_CARD_FIELD)
        .param("card_id", Param::Literal(card_id))
        .param("field_id", Param::Literal(field_id))
        .param("new_value", Param::Literal(new_value))
        .param(
            "response_fields",
            Param::selection(response_fields.unwrap_or(fields::UPDATE_CARD_FIELD)),
        )
}

pub(crate) fn delete_card_document(id: Value, response_fields: Option<&str>) -> DocumentBuilder {
    Document::builder(templates::DELETE_CARD)
        .param("id", Param::Literal(id))
        .param(
            "response_fields",
            Param::selection(response_fields.unwrap_or(fields::DELETE_CARD)),
        )
}

impl PipefyClient {
    /// Fetches a single card.
    ///
    /// Returns `data.card`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`PipefyError`] of the final attempt.
    pub async fn card(
        &self,
        id: impl Into<Value>,
        response_fields: Option<&str>,
        headers: Option<HashMap<String, String>>,
    ) -> Result<Value, PipefyError> {
        let builder = card_document(id.into(), response_fields);
        self.fetch(builder, &["card"], headers).await
    }

    /// Lists the cards of a pipe matching `filter`.
    ///
    /// `filter` is rendered as a GraphQL input object; `None` sends `{}`.
    /// Returns `data.allCards`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`PipefyError`] of the final attempt.
    pub async fn all_cards(
        &self,
        pipe_id: impl Into<Value>,
        filter: Option<&Value>,
        response_fields: Option<&str>,
        headers: Option<HashMap<String, String>>,
    ) -> Result<Value, PipefyError> {
        let builder = all_cards_document(pipe_id.into(), filter, response_fields);
        self.fetch(builder, &["allCards"], headers).await
    }

    /// Moves a card to another phase.
    ///
    /// Returns `data.moveCardToPhase.card`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`PipefyError`] of the final attempt.
    pub async fn move_card_to_phase(
        &self,
        card_id: impl Into<Value>,
        destination_phase_id: impl Into<Value>,
        response_fields: Option<&str>,
        headers: Option<HashMap<String, String>>,
    ) -> Result<Value, PipefyError> {
        let builder =
            move_card_to_phase_document(card_id.into(), destination_phase_id.into(), response_fields);
        self.fetch(builder, &["moveCardToPhase", "card"], headers)
            .await
    }

    /// Updates a card's title, due date, assignees and labels.
    ///
    /// Returns `data.updateCard.card`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`PipefyError`] of the final attempt.
    pub async fn update_card(
        &self,
        input: &UpdateCardInput,
        response_fields: Option<&str>,
        headers: Option<HashMap<String, String>>,
    ) -> Result<Value, PipefyError> {
        let builder = update_card_document(input, response_fields);
        self.fetch(builder, &["updateCard", "card"], headers).await
    }

    /// Sets one field value on a card.
    ///
    /// Returns `data.updateCardField.card`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`PipefyError`] of the final attempt.
    pub async fn update_card_field(
        &self,
        card_id: impl Into<Value>,
        field_id: impl Into<Value>,
        new_value: impl Into<Value>,
        response_fields: Option<&str>,
        headers: Option<HashMap<String, String>>,
    ) -> Result<Value, PipefyError> {
        let builder = update_card_field_document(
            card_id.into(),
            field_id.into(),
            new_value.into(),
            response_fields,
        );
        self.fetch(builder, &["updateCardField", "card"], headers)
            .await
    }

    /// Deletes a card.
    ///
    /// Returns `data.deleteCard`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`PipefyError`] of the final attempt.
    pub async fn delete_card(
        &self,
        id: impl Into<Value>,
        response_fields: Option<&str>,
        headers: Option<HashMap<String, String>>,
    ) -> Result<Value, PipefyError> {
        let builder = delete_card_document(id.into(), response_fields);
        self.fetch(builder, &["deleteCard"], headers).await
    }
}
