use super::args::{Cli, Commands};
use super::config::resolve_ui_config;
use super::handlers::{self, HandlerContext};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let config = resolve_ui_config(&cli);
    let mut ctx = HandlerContext::new(config);

    match cli.command {
        Commands::Text { message } => handlers::message::text(&mut ctx, message),
        Commands::Error { message } => handlers::message::error(&mut ctx, message),
        Commands::Doc { document, title } => handlers::document::handle(&mut ctx, &document, title),
        Commands::List { message, items } => handlers::list::handle(&mut ctx, message, items),
        Commands::Table {
            headers,
            rows,
            max_column_width,
        } => handlers::table::handle(&mut ctx, headers, &rows, max_column_width),
        Commands::Ask { question, default } => handlers::prompt::ask(&mut ctx, question, default),
        Commands::Confirm {
            question,
            default_yes,
        } => handlers::prompt::confirm(&mut ctx, question, default_yes),
    }
}
