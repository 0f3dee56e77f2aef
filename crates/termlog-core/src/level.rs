use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

/// Severity of a terminal log. Decides the destination stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Error,
}

/// Width of the text-mode level column: the longest level name.
static LABEL_WIDTH: Lazy<usize> = Lazy::new(|| {
    Level::ALL
        .iter()
        .map(|level| level.as_str().len())
        .max()
        .unwrap_or(0)
});

impl Level {
    pub const ALL: [Level; 2] = [Level::Info, Level::Error];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Error => "error",
        }
    }

    /// Upper-cased label used in text output
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }

    pub fn label_width() -> usize {
        *LABEL_WIDTH
    }

    /// Error-class levels go to stderr
    pub fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
