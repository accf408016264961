//! GraphQL document construction.
//!
//! Pipefy operations are sent as plain GraphQL text. This module turns
//! typed arguments into that text without any call site escaping values by
//! hand.
//!
//! # Overview
//!
//! - [`Document`]: A complete, closed GraphQL query or mutation
//! - [`DocumentBuilder`]: Fills a template's `${name}` placeholders
//! - [`Param`]: A typed argument value that renders itself
//! - [`templates`]: The per-operation templates and default field selections
//!
//! # Example
//!
//! ```rust
//! use pipefy_api::query::{templates, Document, Param};
//! use serde_json::json;
//!
//! let document = Document::builder(templates::PHASE)
//!     .param("id", Param::literal(42))
//!     .param("count", Param::literal(templates::DEFAULT_PHASE_CARD_COUNT))
//!     .param("search", Param::input(json!({"title": "Lead"})))
//!     .param("response_fields", Param::selection("id name"))
//!     .param("card_fields", Param::selection("edges { node { id } }"))
//!     .build()
//!     .unwrap();
//!
//! assert!(document.as_str().contains(r#"search: {title: "Lead"}"#));
//! ```

mod document;
mod errors;
mod render;
pub mod templates;

pub use document::{Document, DocumentBuilder, Param};
pub use errors::InvalidQueryError;
pub use render::{
    render_datetime, render_input_object, render_list, render_literal, DATETIME_FORMAT,
};
