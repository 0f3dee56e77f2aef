//! Table layout for text output.
//!
//! Columns grow to fit their widest cell, so nothing is truncated. A maximum
//! column width can be opted into, in which case overlong headers and cells
//! wrap by character onto extra physical lines.

use super::{FIELD_DATA, FIELD_HEADERS, Payload};
use crate::error::{Error, Result};
use crate::format::RenderOptions;
use crate::value::{display_width, pad_right, stringify};
use serde_json::{Map, Value};

/// Gap between table columns
const GUTTER: &str = "  ";

/// One table row, keyed by header
pub type Row = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
    max_column_width: Option<usize>,
}

impl Table {
    /// Headers are only validated when the table is rendered, so a table can
    /// be assembled incrementally.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            max_column_width: None,
        }
    }

    pub fn with_rows(mut self, rows: impl IntoIterator<Item = Row>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Cap every column at `width` characters and wrap longer values
    pub fn with_max_column_width(mut self, width: usize) -> Self {
        self.max_column_width = Some(width.max(1));
        self
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Width of every column, in header order
    pub fn column_widths(&self) -> Result<Vec<usize>> {
        self.validate()?;
        let cells = self.cells();
        let widths = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let natural = cells
                    .iter()
                    .map(|row| display_width(&row[i]))
                    .fold(display_width(header), usize::max);
                match self.max_column_width {
                    Some(max) => natural.min(max),
                    None => natural,
                }
            })
            .collect();
        Ok(widths)
    }

    pub fn message(&self, options: RenderOptions) -> Result<String> {
        let widths = self.column_widths()?;

        let header_lines = self.layout_line(&self.headers, &widths, |segment, width| {
            let padding = width.saturating_sub(display_width(segment));
            format!("{}{}", options.bold(segment), " ".repeat(padding))
        });
        let divider = widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join(GUTTER);

        let mut output = format!("\n{}\n{}", header_lines.join("\n"), divider);
        for row in self.cells() {
            for line in self.layout_line(&row, &widths, pad_right) {
                output.push('\n');
                output.push_str(&line);
            }
        }
        Ok(output)
    }

    pub fn payload(&self) -> Result<Payload> {
        self.validate()?;
        let headers = self
            .headers
            .iter()
            .map(|header| Value::String(header.clone()))
            .collect();
        let rows = self.rows.iter().cloned().map(Value::Object).collect();
        Ok(vec![
            (FIELD_HEADERS, Value::Array(headers)),
            (FIELD_DATA, Value::Array(rows)),
        ])
    }

    fn validate(&self) -> Result<()> {
        if self.headers.is_empty() {
            return Err(Error::EmptyHeaders);
        }
        Ok(())
    }

    /// Stringified cells in header order; missing entries are empty.
    fn cells(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .map(|header| row.get(header).map(stringify).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    /// Lay out one logical line as one or more physical lines.
    fn layout_line<F>(&self, cells: &[String], widths: &[usize], format_segment: F) -> Vec<String>
    where
        F: Fn(&str, usize) -> String,
    {
        let wrapped: Vec<Vec<String>> = cells
            .iter()
            .map(|cell| wrap(cell, self.max_column_width))
            .collect();
        let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

        (0..height)
            .map(|line| {
                wrapped
                    .iter()
                    .zip(widths)
                    .map(|(segments, width)| {
                        let segment = segments.get(line).map(String::as_str).unwrap_or("");
                        format_segment(segment, *width)
                    })
                    .collect::<Vec<_>>()
                    .join(GUTTER)
            })
            .collect()
    }
}

fn wrap(text: &str, max_width: Option<usize>) -> Vec<String> {
    let Some(width) = max_width else {
        return vec![text.to_string()];
    };
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => panic!("row fixture must be an object"),
        }
    }

    fn secrets_table() -> Table {
        Table::new(["ID", "Name"]).with_rows([
            row(json!({"ID": "60f1a2", "Name": "api-key"})),
            row(json!({"ID": "60f1a3", "Name": "db-password-long"})),
        ])
    }

    #[test]
    fn test_empty_headers_fail_regardless_of_rows() {
        let empty = Table::new(Vec::<String>::new());
        let text = empty.message(RenderOptions::plain());
        assert!(matches!(text, Err(Error::EmptyHeaders)));
        assert!(matches!(empty.payload(), Err(Error::EmptyHeaders)));

        let with_rows = Table::new(Vec::<String>::new()).with_rows([row(json!({"a": 1}))]);
        let text = with_rows.message(RenderOptions::plain());
        assert!(matches!(text, Err(Error::EmptyHeaders)));
    }

    #[test]
    fn test_renders_aligned_columns() {
        let text = secrets_table().message(RenderOptions::plain()).unwrap();
        let expected = [
            "",
            "ID      Name            ",
            "------  ----------------",
            "60f1a2  api-key         ",
            "60f1a3  db-password-long",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_headers_without_rows_render_header_and_divider() {
        let text = Table::new(["ID", "Name"])
            .message(RenderOptions::plain())
            .unwrap();
        assert_eq!(text, "\nID  Name\n--  ----");
        assert_eq!(text.lines().skip(1).count(), 2);
    }

    #[test]
    fn test_missing_cells_are_blank() {
        let table = Table::new(["a", "b"]).with_rows([row(json!({"b": "x"}))]);
        let text = table.message(RenderOptions::plain()).unwrap();
        assert_eq!(text, "\na  b\n-  -\n   x");
    }

    #[test]
    fn test_cells_are_stringified() {
        let table = Table::new(["value"]).with_rows([
            row(json!({"value": null})),
            row(json!({"value": 12345678})),
            row(json!({"value": false})),
        ]);
        let text = table.message(RenderOptions::plain()).unwrap();
        assert_eq!(text, "\nvalue   \n--------\n        \n12345678\nfalse   ");
    }

    #[test]
    fn test_column_widths_cover_headers_and_cells() {
        let table = secrets_table();
        let widths = table.column_widths().unwrap();
        for (i, header) in table.headers().iter().enumerate() {
            assert!(widths[i] >= display_width(header));
            for r in table.rows() {
                let cell = r.get(header).map(stringify).unwrap_or_default();
                assert!(widths[i] >= display_width(&cell));
            }
        }
        assert_eq!(widths, vec![6, 16]);
    }

    #[test]
    fn test_headers_are_bold_when_color_enabled() {
        let plain = secrets_table().message(RenderOptions::plain()).unwrap();
        let colored = secrets_table().message(RenderOptions::default()).unwrap();
        assert!(!plain.contains('\u{1b}'));
        assert!(colored.contains('\u{1b}'));
        // Only the header line is styled
        assert_eq!(
            colored.lines().skip(2).collect::<Vec<_>>(),
            plain.lines().skip(2).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_payload_keeps_rows_as_given() {
        let payload = secrets_table().payload().unwrap();
        assert_eq!(payload[0], ("headers", json!(["ID", "Name"])));
        let rows = json!([
            {"ID": "60f1a2", "Name": "api-key"},
            {"ID": "60f1a3", "Name": "db-password-long"},
        ]);
        assert_eq!(payload[1], ("data", rows));
    }

    #[test]
    fn test_incremental_rows() {
        let mut table = Table::new(["n"]);
        table.push_row(row(json!({"n": 1})));
        table.push_row(row(json!({"n": 22})));
        let text = table.message(RenderOptions::plain()).unwrap();
        assert_eq!(text, "\nn \n--\n1 \n22");
    }

    #[test]
    fn test_wrapping_splits_long_cells() {
        let table = Table::new(["key", "description"])
            .with_rows([row(json!({"key": "a", "description": "abcdefghij"}))])
            .with_max_column_width(4);
        let text = table.message(RenderOptions::plain()).unwrap();
        let expected = [
            "",
            "key  desc",
            "     ript",
            "     ion ",
            "---  ----",
            "a    abcd",
            "     efgh",
            "     ij  ",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_wrapping_is_lossless_and_bounded() {
        let value = "test this large string for something whatever!";
        let table = Table::new(["header", "this"])
            .with_rows([row(json!({"header": value, "this": "yeee"}))])
            .with_max_column_width(10);
        let widths = table.column_widths().unwrap();
        assert_eq!(widths, vec![10, 4]);

        let text = table.message(RenderOptions::plain()).unwrap();
        let max_line = widths.iter().sum::<usize>() + GUTTER.len() * (widths.len() - 1);
        let data_lines: Vec<&str> = text.lines().skip(3).collect();
        for line in &data_lines {
            assert!(display_width(line) <= max_line);
        }
        let rebuilt: String = data_lines
            .iter()
            .map(|line| line.chars().take(widths[0]).collect::<String>())
            .collect::<Vec<_>>()
            .concat();
        assert_eq!(rebuilt.trim_end(), value);
    }

    #[test]
    fn test_without_cap_long_values_grow_columns() {
        let value = "make this a really long value that is well over thirty characters";
        let table = Table::new(["h"]).with_rows([row(json!({"h": value}))]);
        let text = table.message(RenderOptions::plain()).unwrap();
        assert_eq!(text.lines().last().unwrap(), value);
    }
}
