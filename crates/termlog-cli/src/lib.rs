// NOTE: the CLI is a thin shell over termlog-core.
//
// Flags and environment are resolved into a `UiConfig` exactly once, in
// `config::resolve_ui_config`. Handlers only build messages and hand them
// to the UI sink; they never format output themselves.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;

pub use args::{Cli, Commands, LogLevel, OutputFormat};
pub use commands::run;
