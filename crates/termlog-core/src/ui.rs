use crate::error::Result;
use crate::format::{OutputFormat, RenderOptions};
use crate::log::Log;
use crate::prompt::Prompt;
use std::io::{self, BufRead, BufReader, Stderr, Stdin, Stdout, Write};

/// Terminal UI configuration, resolved once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiConfig {
    pub output_format: OutputFormat,
    pub disable_colors: bool,
    /// Where output is destined; carried for callers, not interpreted here
    pub output_target: Option<String>,
}

impl UiConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::resolve(self.output_format, self.disable_colors)
    }
}

/// Terminal UI sink.
///
/// Info logs are written to `out`, error logs to `err`. The color decision
/// is made once at construction and applied to every log it prints.
pub struct Ui<R, O, E> {
    config: UiConfig,
    options: RenderOptions,
    input: R,
    out: O,
    err: E,
}

impl Ui<BufReader<Stdin>, Stdout, Stderr> {
    /// A UI bound to the process's standard streams. Stdin is locked per read,
    /// not for the lifetime of the UI.
    pub fn stdio(config: UiConfig) -> Self {
        Self::new(
            config,
            BufReader::new(io::stdin()),
            io::stdout(),
            io::stderr(),
        )
    }
}

impl<R, O, E> Ui<R, O, E>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    pub fn new(config: UiConfig, input: R, out: O, err: E) -> Self {
        let options = config.render_options();
        tracing::debug!(
            format = %config.output_format,
            enable_color = options.enable_color,
            output_target = config.output_target.as_deref().unwrap_or("-"),
            "terminal ui configured"
        );
        Self {
            config,
            options,
            input,
            out,
            err,
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn render_options(&self) -> RenderOptions {
        self.options
    }

    /// Print logs in order, stopping at the first render or write failure.
    pub fn print<I>(&mut self, logs: I) -> Result<()>
    where
        I: IntoIterator<Item = Log>,
    {
        for log in logs {
            let line = log.print(self.config.output_format, self.options)?;
            let writer: &mut dyn Write = if log.level().is_error() {
                &mut self.err
            } else {
                &mut self.out
            };
            tracing::trace!(level = %log.level(), bytes = line.len(), "writing log");
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    /// Ask a single question on the UI's input.
    ///
    /// In JSON mode the prompt text goes to `err`, keeping `out` to one JSON
    /// object per line.
    pub fn ask_one<P: Prompt>(&mut self, prompt: &P) -> Result<P::Answer> {
        let output: &mut dyn Write = if self.config.output_format.is_json() {
            &mut self.err
        } else {
            &mut self.out
        };
        prompt.ask(&mut self.input, output)
    }

    pub fn into_parts(self) -> (R, O, E) {
        (self.input, self.out, self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::messenger::Table;
    use crate::prompt::Input;
    use chrono::{FixedOffset, TimeZone, Utc};
    use std::io::Cursor;

    type TestUi = Ui<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

    fn test_ui(config: UiConfig) -> TestUi {
        Ui::new(config, Cursor::new(Vec::new()), Vec::new(), Vec::new())
    }

    fn json_config() -> UiConfig {
        UiConfig {
            output_format: OutputFormat::Json,
            ..UiConfig::default()
        }
    }

    fn plain_config() -> UiConfig {
        UiConfig {
            disable_colors: true,
            ..UiConfig::default()
        }
    }

    fn stamp(log: Log) -> Log {
        log.with_time(Utc.with_ymd_and_hms(1989, 6, 22, 11, 54, 0).unwrap())
            .with_offset(FixedOffset::east_opt(0).unwrap())
    }

    fn outputs(ui: TestUi) -> (String, String) {
        let (_, out, err) = ui.into_parts();
        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        (out, err)
    }

    /// Rejects every write
    struct ClosedStream;

    impl Write for ClosedStream {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_routes_by_level() {
        let mut ui = test_ui(UiConfig::default());
        ui.print([
            stamp(Log::text("first")),
            stamp(Log::error("broken")),
            stamp(Log::text("second")),
        ])
        .unwrap();

        let (out, err) = outputs(ui);
        assert_eq!(
            out,
            "INFO  11:54:00.000: first\nINFO  11:54:00.000: second\n"
        );
        assert_eq!(err, "ERROR 11:54:00.000: broken\n");
    }

    #[test]
    fn test_json_mode_writes_json_lines() {
        let mut ui = test_ui(json_config());
        ui.print([stamp(Log::text("hi")), stamp(Log::error("bad"))])
            .unwrap();

        let (out, err) = outputs(ui);
        assert_eq!(
            out,
            "{\"level\":\"info\",\"time\":\"1989-06-22T11:54:00Z\",\"message\":\"hi\"}\n"
        );
        assert_eq!(
            err,
            "{\"level\":\"error\",\"time\":\"1989-06-22T11:54:00Z\",\"message\":\"bad\"}\n"
        );
    }

    #[test]
    fn test_color_decided_at_construction() {
        assert!(test_ui(UiConfig::default()).render_options().enable_color);
        assert!(!test_ui(plain_config()).render_options().enable_color);
        assert!(!test_ui(json_config()).render_options().enable_color);
    }

    #[test]
    fn test_disabled_colors_render_plain_tables() {
        let mut ui = test_ui(plain_config());
        ui.print([stamp(Log::table(Table::new(["ID", "Name"])))])
            .unwrap();
        let (out, _) = outputs(ui);
        assert_eq!(out, "INFO  11:54:00.000: \nID  Name\n--  ----\n");
    }

    #[test]
    fn test_stops_at_first_render_failure() {
        let mut ui = test_ui(UiConfig::default());
        let result = ui.print([
            stamp(Log::text("before")),
            stamp(Log::table(Table::new(Vec::<String>::new()))),
            stamp(Log::text("after")),
        ]);
        assert!(matches!(result, Err(Error::EmptyHeaders)));

        let (out, err) = outputs(ui);
        assert_eq!(out, "INFO  11:54:00.000: before\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_stops_at_first_write_failure() {
        let mut ui = Ui::new(
            UiConfig::default(),
            Cursor::new(Vec::new()),
            Vec::new(),
            ClosedStream,
        );
        let result = ui.print([stamp(Log::error("broken")), stamp(Log::text("after"))]);
        assert!(matches!(result, Err(Error::Io(_))));

        let (_, out, _) = ui.into_parts();
        assert!(out.is_empty());
    }

    #[test]
    fn test_ask_one_uses_ui_streams() {
        let mut ui = Ui::new(
            UiConfig::default(),
            Cursor::new(b"my-app\n".to_vec()),
            Vec::new(),
            Vec::new(),
        );
        let answer = ui.ask_one(&Input::new("App name")).unwrap();
        assert_eq!(answer, "my-app");

        let (out, err) = outputs(ui);
        assert_eq!(out, "? App name ");
        assert!(err.is_empty());
    }

    #[test]
    fn test_ask_one_in_json_mode_prompts_on_err() {
        let input = Cursor::new(b"my-app\n".to_vec());
        let mut ui = Ui::new(json_config(), input, Vec::new(), Vec::new());
        let answer = ui.ask_one(&Input::new("App name")).unwrap();
        ui.print([stamp(Log::list("App name", vec![answer.into()]))])
            .unwrap();

        let (out, err) = outputs(ui);
        assert_eq!(err, "? App name ");
        assert_eq!(
            out,
            "{\"level\":\"info\",\"time\":\"1989-06-22T11:54:00Z\",\"message\":\"App name\",\"data\":[\"my-app\"]}\n"
        );
    }

    #[test]
    fn test_stdio_ui_does_not_hold_stdin_lock() {
        let _ui = Ui::stdio(UiConfig::default());
        // Would deadlock if the UI kept stdin locked
        drop(io::stdin().lock());
    }
}
