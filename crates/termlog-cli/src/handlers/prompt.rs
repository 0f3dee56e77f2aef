use crate::handlers::HandlerContext;
use anyhow::Result;
use serde_json::Value;
use termlog_core::{Confirm, Input, Log};

pub fn ask(ctx: &mut HandlerContext, question: String, default: Option<String>) -> Result<()> {
    let mut prompt = Input::new(question.clone());
    if let Some(default) = default {
        prompt = prompt.with_default(default);
    }
    let answer = ctx.ask(&prompt)?;
    ctx.print(Log::list(question, vec![Value::String(answer)]))
}

pub fn confirm(ctx: &mut HandlerContext, question: String, default_yes: bool) -> Result<()> {
    let prompt = Confirm::new(question.clone()).with_default(default_yes);
    let answer = ctx.ask(&prompt)?;
    ctx.print(Log::list(question, vec![Value::Bool(answer)]))
}
