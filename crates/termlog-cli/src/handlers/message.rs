use crate::handlers::HandlerContext;
use anyhow::Result;
use termlog_core::Log;

pub fn text(ctx: &mut HandlerContext, message: String) -> Result<()> {
    ctx.print(Log::text(message))
}

pub fn error(ctx: &mut HandlerContext, message: String) -> Result<()> {
    ctx.print(Log::error(message))
}
