//! Document templates and default field selections for each Pipefy operation.
//!
//! Every template is a single line, mutations included. GraphQL treats line
//! breaks and indentation as insignificant, so a multi-line layout would
//! send the same operation; a single line reads better in debug logs.
//!
//! Reference: <https://developers.pipefy.com/reference/graphql-queries>

/// `card` query.
pub const CARD: &str = "{ card(id: ${id}) { ${response_fields}}}";

/// `allCards` query.
pub const ALL_CARDS: &str =
    "{ allCards(pipeId: ${pipe_id}, filter: ${filter}) { ${response_fields} } }";

/// `phase` query with a page of its cards.
pub const PHASE: &str = "{ phase(id: ${id} ) { ${response_fields} cards(first: ${count}, search: ${search}) { ${card_fields} } } }";

/// `pipe` query.
pub const PIPE: &str = "{ pipe (id: ${id}) { ${response_fields} } }";

/// `moveCardToPhase` mutation.
pub const MOVE_CARD_TO_PHASE: &str = "mutation { moveCardToPhase(input: { card_id: ${card_id} destination_phase_id: ${destination_phase_id} }) { ${response_fields} } }";

/// `updatePhaseField` mutation.
pub const UPDATE_PHASE_FIELD: &str = "mutation { updatePhaseField(input: { id: ${id} label: ${label} options: ${options} required: ${required} editable: ${editable} }) { ${response_fields} } }";

/// `updateCard` mutation.
pub const UPDATE_CARD: &str = "mutation { updateCard(input: { id: ${id} title: ${title} due_date: ${due_date} assignee_ids: [ ${assignee_ids} ] label_ids: [ ${label_ids} ] }) { ${response_fields} } }";

/// `updateCardField` mutation.
pub const UPDATE_CARD_FIELD: &str = "mutation { updateCardField(input: { card_id: ${card_id} field_id: ${field_id} new_value: ${new_value} }) { ${response_fields} } }";

/// `deleteCard` mutation.
pub const DELETE_CARD: &str =
    "mutation { deleteCard(input: { id: ${id} }) { ${response_fields} } }";

/// `createComment` mutation.
pub const CREATE_COMMENT: &str = "mutation { createComment(input: { card_id: ${card_id} text: ${text} }) { ${response_fields} } }";

/// Default page size for the cards fetched by
/// [`PipefyClient::phase`](crate::PipefyClient::phase).
pub const DEFAULT_PHASE_CARD_COUNT: u32 = 10;

/// Default selections used when the caller passes no `response_fields`.
pub mod fields {
    pub const CARD: &str = "id title";

    pub const ALL_CARDS: &str = "edges { node { id title assignees { id } comments { text } comments_count current_phase { name } done due_date fields { name value } labels { name } phases_history { phase { name } firstTimeIn lastTimeOut } url } }";

    pub const PHASE: &str = "id name cards_count";

    pub const PHASE_CARDS: &str = "edges { node { id title assignees { id name email} comments { text } comments_count current_phase { id name } createdAt done due_date fields { field{id type} name value array_value} labels { id name } phases_history { phase { id name } firstTimeIn lastTimeOut } url } }";

    pub const PIPE: &str = "id name start_form_fields { label id } labels { name id } phases { name fields { label id } cards(first: 5) { edges { node { id, title } } } }";

    pub const MOVE_CARD_TO_PHASE: &str = "card { id current_phase { name}}";

    pub const UPDATE_PHASE_FIELD: &str = "phase_field { id label }";

    pub const UPDATE_CARD: &str = "card { id title }";

    pub const UPDATE_CARD_FIELD: &str = "card{ id }";

    pub const DELETE_CARD: &str = "success";

    pub const CREATE_COMMENT: &str = "comment { id text }";
}
