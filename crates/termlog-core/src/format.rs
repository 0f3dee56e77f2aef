use crate::error::Error;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Terminal output format. Text and JSON are mutually exclusive per sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Text, OutputFormat::Json];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| Error::UnsupportedFormat(s.to_string()))
    }
}

/// Options threaded through every render call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub enable_color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { enable_color: true }
    }
}

impl RenderOptions {
    /// Options with ANSI styling turned off
    pub fn plain() -> Self {
        Self {
            enable_color: false,
        }
    }

    /// JSON output never carries ANSI styling, whatever the color setting says.
    pub fn resolve(format: OutputFormat, disable_colors: bool) -> Self {
        Self {
            enable_color: !disable_colors && !format.is_json(),
        }
    }

    pub(crate) fn bold(&self, text: &str) -> String {
        if self.enable_color {
            format!("{}", text.bold())
        } else {
            text.to_string()
        }
    }
}
