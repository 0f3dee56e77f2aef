use crate::error::Result;
use crate::format::{OutputFormat, RenderOptions};
use crate::level::Level;
use crate::messenger::{
    ErrorMessage, JsonDocument, List, Messenger, Payload, Table, TitledJsonDocument,
};
use chrono::{DateTime, FixedOffset, Local, SecondsFormat, TimeZone, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::fmt;

const FIELD_LEVEL: &str = "level";
const FIELD_TIME: &str = "time";

/// A leveled, timestamped message ready to be printed
#[derive(Debug, Clone, PartialEq)]
pub struct Log {
    level: Level,
    time: DateTime<Utc>,
    /// Zone used for the text-mode clock; `None` means the local zone
    offset: Option<FixedOffset>,
    messenger: Messenger,
}

impl Log {
    pub fn new(level: Level, messenger: impl Into<Messenger>) -> Self {
        Self {
            level,
            time: Utc::now(),
            offset: None,
            messenger: messenger.into(),
        }
    }

    pub fn text(message: impl Into<String>) -> Self {
        Self::new(Level::Info, Messenger::Text(message.into()))
    }

    pub fn json(data: Map<String, Value>) -> Self {
        Self::new(Level::Info, JsonDocument::new(data))
    }

    pub fn titled_json(title: impl Into<String>, data: Map<String, Value>) -> Self {
        Self::new(
            Level::Info,
            TitledJsonDocument::new(title, JsonDocument::new(data)),
        )
    }

    pub fn list(message: impl Into<String>, items: Vec<Value>) -> Self {
        Self::new(Level::Info, List::new(message, items))
    }

    pub fn table(table: Table) -> Self {
        Self::new(Level::Info, table)
    }

    pub fn error(err: impl fmt::Display) -> Self {
        Self::new(Level::Error, ErrorMessage::new(err))
    }

    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = time;
        self
    }

    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    pub fn messenger(&self) -> &Messenger {
        &self.messenger
    }

    /// Render the log line. Errors raised by the message are returned as-is.
    pub fn print(&self, format: OutputFormat, options: RenderOptions) -> Result<String> {
        match format {
            OutputFormat::Text => self.text_line(options),
            OutputFormat::Json => self.json_line(),
        }
    }

    /// Like [`Log::print`], for a format given by name
    pub fn print_named(&self, format: &str, options: RenderOptions) -> Result<String> {
        let format: OutputFormat = format.parse()?;
        self.print(format, options)
    }

    fn text_line(&self, options: RenderOptions) -> Result<String> {
        let message = self.messenger.message(OutputFormat::Text, options)?;
        Ok(format!(
            "{:<width$} {}: {}",
            self.level.label(),
            self.display_time().format("%H:%M:%S%.3f"),
            message,
            width = Level::label_width(),
        ))
    }

    fn json_line(&self) -> Result<String> {
        let fields = self.messenger.payload()?;
        let envelope = Envelope {
            level: self.level,
            time: self.time,
            fields: &fields,
        };
        Ok(serde_json::to_string(&envelope)?)
    }

    fn display_time(&self) -> DateTime<FixedOffset> {
        let offset = self
            .offset
            .unwrap_or_else(|| Local.offset_from_utc_datetime(&self.time.naive_utc()));
        self.time.with_timezone(&offset)
    }
}

/// JSON log line: `level`, `time`, then the message fields, in that order.
struct Envelope<'a> {
    level: Level,
    time: DateTime<Utc>,
    fields: &'a Payload,
}

impl Serialize for Envelope<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 2))?;
        map.serialize_entry(FIELD_LEVEL, &self.level)?;
        map.serialize_entry(
            FIELD_TIME,
            &self.time.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        )?;
        for (key, value) in self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
