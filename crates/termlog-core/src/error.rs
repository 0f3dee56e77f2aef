use std::fmt;

/// Result type for termlog-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering or printing logs
#[derive(Debug)]
pub enum Error {
    /// A message could not be converted to or from JSON
    Serialization(serde_json::Error),

    /// A table was rendered without any headers
    EmptyHeaders,

    /// The requested output format is not one of the supported formats
    UnsupportedFormat(String),

    /// Reading from or writing to a terminal stream failed
    Io(std::io::Error),

    /// The input stream ended before a prompt was answered
    PromptAborted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Serialization(err) => write!(f, "JSON error: {}", err),
            Error::EmptyHeaders => write!(f, "cannot create a table without headers"),
            Error::UnsupportedFormat(format) => {
                write!(f, "unsupported output format type: {}", format)
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::PromptAborted => write!(f, "prompt aborted: no answer was provided"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Serialization(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::EmptyHeaders | Error::UnsupportedFormat(_) | Error::PromptAborted => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
