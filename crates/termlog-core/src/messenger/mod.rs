//! Renderable message payloads.
//!
//! Every variant renders a display string for an [`OutputFormat`] and an
//! ordered set of fields for the JSON log envelope.

mod document;
mod list;
mod table;

pub use document::{JsonDocument, TitledJsonDocument};
pub use list::List;
pub use table::{Row, Table};

use crate::error::Result;
use crate::format::{OutputFormat, RenderOptions};
use serde_json::Value;
use std::fmt;

pub(crate) const FIELD_MESSAGE: &str = "message";
pub(crate) const FIELD_DOC: &str = "doc";
pub(crate) const FIELD_TITLE: &str = "title";
pub(crate) const FIELD_DATA: &str = "data";
pub(crate) const FIELD_HEADERS: &str = "headers";

/// Ordered JSON envelope fields contributed by a message
pub type Payload = Vec<(&'static str, Value)>;

/// An error to display in the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    description: String,
}

impl ErrorMessage {
    pub fn new(err: impl fmt::Display) -> Self {
        Self {
            description: err.to_string(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Messenger {
    Text(String),
    Document(JsonDocument),
    TitledDocument(TitledJsonDocument),
    Error(ErrorMessage),
    List(List),
    Table(Table),
}

impl Messenger {
    pub fn message(&self, format: OutputFormat, options: RenderOptions) -> Result<String> {
        match self {
            Messenger::Text(text) => Ok(text.clone()),
            Messenger::Document(doc) => doc.message(format),
            Messenger::TitledDocument(doc) => doc.message(format, options),
            Messenger::Error(err) => Ok(err.description.clone()),
            Messenger::List(list) => Ok(list.message()),
            Messenger::Table(table) => table.message(options),
        }
    }

    pub fn payload(&self) -> Result<Payload> {
        match self {
            Messenger::Text(text) => Ok(message_field(text)),
            Messenger::Document(doc) => Ok(doc.payload()),
            Messenger::TitledDocument(doc) => Ok(doc.payload()),
            Messenger::Error(err) => Ok(message_field(&err.description)),
            Messenger::List(list) => Ok(list.payload()),
            Messenger::Table(table) => table.payload(),
        }
    }
}

fn message_field(message: &str) -> Payload {
    vec![(FIELD_MESSAGE, Value::String(message.to_string()))]
}

impl From<String> for Messenger {
    fn from(text: String) -> Self {
        Messenger::Text(text)
    }
}

impl From<&str> for Messenger {
    fn from(text: &str) -> Self {
        Messenger::Text(text.to_string())
    }
}

impl From<JsonDocument> for Messenger {
    fn from(doc: JsonDocument) -> Self {
        Messenger::Document(doc)
    }
}

impl From<TitledJsonDocument> for Messenger {
    fn from(doc: TitledJsonDocument) -> Self {
        Messenger::TitledDocument(doc)
    }
}

impl From<ErrorMessage> for Messenger {
    fn from(err: ErrorMessage) -> Self {
        Messenger::Error(err)
    }
}

impl From<List> for Messenger {
    fn from(list: List) -> Self {
        Messenger::List(list)
    }
}

impl From<Table> for Messenger {
    fn from(table: Table) -> Self {
        Messenger::Table(table)
    }
}
