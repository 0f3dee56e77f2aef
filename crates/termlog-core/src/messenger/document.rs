use super::{FIELD_DOC, FIELD_TITLE, Payload};
use crate::error::{Error, Result};
use crate::format::{OutputFormat, RenderOptions};
use serde::Serialize;
use serde_json::{Map, Value};

/// A JSON object to display in the UI
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonDocument {
    data: Map<String, Value>,
}

impl JsonDocument {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// Build a document from any serializable value that maps to a JSON object
    pub fn from_serialize<T>(value: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(value)? {
            Value::Object(data) => Ok(Self { data }),
            other => {
                let reason = format!("expected a JSON object, found {}", kind_of(&other));
                Err(Error::Serialization(serde::ser::Error::custom(reason)))
            }
        }
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Pretty-printed with a 2-space indent in text mode, compact in JSON mode
    pub fn message(&self, format: OutputFormat) -> Result<String> {
        let rendered = match format {
            OutputFormat::Text => serde_json::to_string_pretty(&self.data)?,
            OutputFormat::Json => serde_json::to_string(&self.data)?,
        };
        Ok(rendered)
    }

    pub fn payload(&self) -> Payload {
        vec![(FIELD_DOC, Value::Object(self.data.clone()))]
    }
}

impl From<Map<String, Value>> for JsonDocument {
    fn from(data: Map<String, Value>) -> Self {
        Self::new(data)
    }
}

/// A JSON document preceded by a title
#[derive(Debug, Clone, PartialEq)]
pub struct TitledJsonDocument {
    title: String,
    document: JsonDocument,
}

impl TitledJsonDocument {
    pub fn new(title: impl Into<String>, document: JsonDocument) -> Self {
        Self {
            title: title.into(),
            document,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn document(&self) -> &JsonDocument {
        &self.document
    }

    /// In JSON mode the title is merged into the document; on a key clash the
    /// title replaces the document's field.
    pub fn message(&self, format: OutputFormat, options: RenderOptions) -> Result<String> {
        match format {
            OutputFormat::Text => {
                let doc = self.document.message(format)?;
                Ok(format!("{}\n---\n{}", options.bold(&self.title), doc))
            }
            OutputFormat::Json => {
                let mut merged = self.document.data.clone();
                merged.insert(FIELD_TITLE.to_string(), Value::String(self.title.clone()));
                Ok(serde_json::to_string(&merged)?)
            }
        }
    }

    pub fn payload(&self) -> Payload {
        let mut fields = vec![(FIELD_TITLE, Value::String(self.title.clone()))];
        fields.extend(self.document.payload());
        fields
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
