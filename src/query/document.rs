//! GraphQL document assembly.
//!
//! This module provides the [`Document`] type and its builder, which fills a
//! template's `${name}` placeholders with typed [`Param`] values.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::query::errors::InvalidQueryError;
use crate::query::render::{render_datetime, render_input_object, render_list, render_literal};

const PLACEHOLDER_OPEN: &str = "${";
const BLOCK_QUOTE: &str = "\"\"\"";

/// A typed value substituted into a document template.
///
/// Each variant knows how to render itself, so call sites never escape
/// values by hand.
#[derive(Clone, Debug, PartialEq)]
pub enum Param {
    /// A JSON literal (`"123"`, `42`, `null`, `["a", "b"]`).
    Literal(Value),
    /// A GraphQL input object with unquoted keys (`{title: "x"}`).
    Input(Value),
    /// Comma-joined literals meant to sit inside brackets in the template.
    List(Vec<Value>),
    /// An optional UTC timestamp, rendered quoted or as `null`.
    DateTime(Option<DateTime<Utc>>),
    /// Text inserted verbatim, such as a response field selection.
    Selection(String),
}

impl Param {
    /// Creates a [`Param::Literal`].
    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Creates a [`Param::Input`].
    #[must_use]
    pub fn input(value: impl Into<Value>) -> Self {
        Self::Input(value.into())
    }

    /// Creates a [`Param::List`] from any iterator of JSON-convertible items.
    #[must_use]
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Creates a [`Param::DateTime`].
    #[must_use]
    pub const fn datetime(value: Option<DateTime<Utc>>) -> Self {
        Self::DateTime(value)
    }

    /// Creates a [`Param::Selection`].
    #[must_use]
    pub fn selection(text: impl Into<String>) -> Self {
        Self::Selection(text.into())
    }

    /// Renders the parameter as document text.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Literal(value) => render_literal(value),
            Self::Input(value) => render_input_object(value),
            Self::List(values) => render_list(values),
            Self::DateTime(value) => render_datetime(value.as_ref()),
            Self::Selection(text) => text.clone(),
        }
    }
}

/// A complete GraphQL query or mutation, ready to be sent.
///
/// A `Document` always closes every brace, bracket, and parenthesis it
/// opens outside string literals and comments.
///
/// # Example
///
/// ```rust
/// use pipefy_api::query::{Document, Param};
///
/// let document = Document::builder("{ card(id: ${id}) { ${fields}}}")
///     .param("id", Param::literal("123"))
///     .param("fields", Param::selection("id title"))
///     .build()
///     .unwrap();
///
/// assert_eq!(document.as_str(), r#"{ card(id: "123") { id title}}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document(String);

impl Document {
    /// Creates a new builder for the given template.
    #[must_use]
    pub fn builder(template: impl Into<String>) -> DocumentBuilder {
        DocumentBuilder::new(template)
    }

    /// Wraps caller-supplied document text after checking it is closed.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidQueryError::UnbalancedBraces`] if the text leaves a
    /// brace, bracket, or parenthesis open.
    pub fn new(text: impl Into<String>) -> Result<Self, InvalidQueryError> {
        let text = text.into();
        if !is_balanced(&text) {
            return Err(InvalidQueryError::UnbalancedBraces { document: text });
        }
        Ok(Self(text))
    }

    /// Returns the document text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the document, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builder for constructing [`Document`] instances from a template.
///
/// Placeholders are written `${name}`. GraphQL itself never places `{`
/// directly after `$`, so templates need no escaping.
#[derive(Debug)]
pub struct DocumentBuilder {
    template: String,
    params: HashMap<String, Param>,
}

impl DocumentBuilder {
    fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            params: HashMap::new(),
        }
    }

    /// Binds a value to the placeholder `name`.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: Param) -> Self {
        self.params.insert(name.into(), value);
        self
    }

    /// Substitutes every placeholder and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidQueryError`] if a placeholder is unterminated or has
    /// no bound value, or if the resulting document is not closed.
    pub fn build(self) -> Result<Document, InvalidQueryError> {
        let mut text = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();
        let mut consumed = 0;

        while let Some(start) = rest.find(PLACEHOLDER_OPEN) {
            text.push_str(&rest[..start]);
            let after_open = &rest[start + PLACEHOLDER_OPEN.len()..];
            let end = after_open
                .find('}')
                .ok_or(InvalidQueryError::UnterminatedPlaceholder {
                    offset: consumed + start,
                })?;

            let name = after_open[..end].trim();
            let param = self
                .params
                .get(name)
                .ok_or_else(|| InvalidQueryError::MissingParameter {
                    name: name.to_string(),
                })?;
            text.push_str(&param.render());

            let advance = start + PLACEHOLDER_OPEN.len() + end + 1;
            consumed += advance;
            rest = &rest[advance..];
        }
        text.push_str(rest);

        tracing::debug!(document = %text, "Assembled GraphQL document");
        Document::new(text)
    }
}

/// Checks that every opening delimiter is closed in order.
///
/// Delimiters inside string literals, `"""` block strings and `#` comments
/// are not counted.
fn is_balanced(text: &str) -> bool {
    let mut stack = Vec::new();
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if let Some(body) = rest.strip_prefix(BLOCK_QUOTE) {
            let Some(len) = block_string_len(body) else {
                return false;
            };
            rest = &body[len + BLOCK_QUOTE.len()..];
            continue;
        }

        match c {
            '#' => {
                rest = rest.find(['\n', '\r']).map_or("", |end| &rest[end..]);
                continue;
            }
            '"' => {
                let body = &rest[1..];
                let Some(len) = string_len(body) else {
                    return false;
                };
                rest = &body[len + 1..];
                continue;
            }
            '{' | '[' | '(' => stack.push(c),
            '}' | ']' | ')' => {
                let expected = match c {
                    '}' => '{',
                    ']' => '[',
                    _ => '(',
                };
                if stack.pop() != Some(expected) {
                    return false;
                }
            }
            _ => {}
        }
        rest = &rest[c.len_utf8()..];
    }

    stack.is_empty()
}

/// Length of a string literal's body up to its closing quote.
fn string_len(body: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in body.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return Some(i),
            _ => {}
        }
    }
    None
}

/// Length of a block string's body up to its closing `"""`. Only `\"""` is
/// an escape inside a block string.
fn block_string_len(body: &str) -> Option<usize> {
    let mut offset = 0;
    loop {
        let at = offset + body[offset..].find(BLOCK_QUOTE)?;
        if !body[..at].ends_with('\\') {
            return Some(at);
        }
        offset = at + BLOCK_QUOTE.len();
    }
}
