use crate::args::Cli;
use std::ffi::OsString;
use termlog_core::UiConfig;

/// Build the UI configuration from parsed flags and the environment.
///
/// `NO_COLOR` set to any non-empty value disables color, as does
/// `--disable-colors`.
pub fn resolve_ui_config(cli: &Cli) -> UiConfig {
    resolve(
        cli.output_format.into(),
        cli.disable_colors,
        cli.output_target.clone(),
        std::env::var_os("NO_COLOR"),
    )
}

fn resolve(
    output_format: termlog_core::OutputFormat,
    disable_colors: bool,
    output_target: Option<String>,
    no_color: Option<OsString>,
) -> UiConfig {
    let no_color = no_color.is_some_and(|value| !value.is_empty());
    UiConfig {
        output_format,
        disable_colors: disable_colors || no_color,
        output_target,
    }
}
