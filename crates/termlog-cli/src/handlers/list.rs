use crate::handlers::HandlerContext;
use anyhow::Result;
use serde_json::Value;
use termlog_core::Log;

pub fn handle(ctx: &mut HandlerContext, message: String, items: Vec<String>) -> Result<()> {
    let items = items.into_iter().map(Value::String).collect();
    ctx.print(Log::list(message, items))
}
