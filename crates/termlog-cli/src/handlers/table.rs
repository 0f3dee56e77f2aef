use crate::handlers::HandlerContext;
use anyhow::{Context, Result, bail};
use serde_json::Value;
use termlog_core::{Log, Row, Table};

pub fn handle(
    ctx: &mut HandlerContext,
    headers: Vec<String>,
    rows: &[String],
    max_column_width: Option<usize>,
) -> Result<()> {
    let rows = rows
        .iter()
        .enumerate()
        .map(|(i, raw)| parse_row(i + 1, raw))
        .collect::<Result<Vec<_>>>()?;

    let mut table = Table::new(headers).with_rows(rows);
    if let Some(width) = max_column_width {
        table = table.with_max_column_width(width);
    }
    ctx.print(Log::table(table))
}

fn parse_row(position: usize, raw: &str) -> Result<Row> {
    let value: Value =
        serde_json::from_str(raw).with_context(|| format!("row {} is not valid JSON", position))?;
    match value {
        Value::Object(row) => Ok(row),
        _ => bail!("row {} must be a JSON object", position),
    }
}
