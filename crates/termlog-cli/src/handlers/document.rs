use crate::handlers::HandlerContext;
use anyhow::{Context, Result};
use serde_json::Value;
use termlog_core::{JsonDocument, Level, Log, TitledJsonDocument};

pub fn handle(ctx: &mut HandlerContext, document: &str, title: Option<String>) -> Result<()> {
    let value: Value = serde_json::from_str(document).context("document is not valid JSON")?;
    let doc = JsonDocument::from_serialize(&value)?;

    let log = match title {
        Some(title) => Log::new(Level::Info, TitledJsonDocument::new(title, doc)),
        None => Log::new(Level::Info, doc),
    };
    ctx.print(log)
}
