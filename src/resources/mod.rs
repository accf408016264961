//! Per-operation methods of [`PipefyClient`](crate::PipefyClient).
//!
//! Each operation fills its document template, sends it through the retry
//! driver and returns the fragment of `data` that belongs to it. A fragment
//! that is missing or `null` comes back as an empty object.
//!
//! | Method | Returns |
//! |--------|---------|
//! | `card` | `data.card` |
//! | `all_cards` | `data.allCards` |
//! | `phase` | `data.phase` |
//! | `pipe` | `data.pipe` |
//! | `move_card_to_phase` | `data.moveCardToPhase.card` |
//! | `update_phase_field` | `data.updatePhaseField.phase_field` |
//! | `update_card` | `data.updateCard.card` |
//! | `update_card_field` | `data.updateCardField.card` |
//! | `delete_card` | `data.deleteCard` |
//! | `create_comment` | `data.createComment.comment` |
//!
//! Every method takes an optional `response_fields` selection replacing the
//! default one, and optional per-call headers.

mod cards;
mod comments;
mod phases;
mod pipes;

pub use cards::UpdateCardInput;
pub use phases::UpdatePhaseFieldInput;
