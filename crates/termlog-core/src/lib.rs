//! # termlog-core
//!
//! Renders leveled log events for a terminal, either as human-readable text
//! or as one JSON object per line.
//!
//! ```text
//! [ caller ] --> Messenger --> Log { level, time } --> Ui::print ==(Info)==> stdout
//!                                                                ==(Error)=> stderr
//! ```
//!
//! ```no_run
//! use termlog_core::{Log, Table, Ui, UiConfig};
//! use serde_json::json;
//!
//! let mut ui = Ui::stdio(UiConfig::default());
//! let row = json!({"ID": "60f1a2", "Name": "api-key"});
//! let table = Table::new(["ID", "Name"]).with_rows(row.as_object().cloned());
//! ui.print([Log::text("Found secrets"), Log::table(table)])?;
//! # Ok::<(), termlog_core::Error>(())
//! ```

pub mod error;
pub mod format;
pub mod level;
pub mod log;
pub mod messenger;
pub mod prompt;
pub mod ui;
pub mod value;

pub use error::{Error, Result};
pub use format::{OutputFormat, RenderOptions};
pub use level::Level;
pub use log::Log;
pub use messenger::{
    ErrorMessage, JsonDocument, List, Messenger, Payload, Row, Table, TitledJsonDocument,
};
pub use prompt::{Confirm, Input, Prompt};
pub use ui::{Ui, UiConfig};
