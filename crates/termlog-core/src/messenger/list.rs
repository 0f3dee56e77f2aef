use super::{FIELD_DATA, FIELD_MESSAGE, Payload};
use crate::value::stringify;
use serde_json::Value;

const INDENT: &str = "  ";

/// A message followed by its supporting items
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    message: String,
    items: Vec<Value>,
}

impl List {
    pub fn new<I, V>(message: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            message: message.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Bare message for no items, `message: item` for one, and one indented
    /// line per item otherwise.
    pub fn message(&self) -> String {
        match self.items.as_slice() {
            [] => self.message.clone(),
            [item] => format!("{}: {}", self.message, stringify(item)),
            items => {
                let lines: Vec<String> = items
                    .iter()
                    .map(|item| format!("{}{}", INDENT, stringify(item)))
                    .collect();
                format!("{}\n{}", self.message, lines.join("\n"))
            }
        }
    }

    pub fn payload(&self) -> Payload {
        vec![
            (FIELD_MESSAGE, Value::String(self.message.clone())),
            (FIELD_DATA, Value::Array(self.items.clone())),
        ]
    }
}
