use anyhow::Result;
use std::io::{BufReader, Stderr, Stdin, Stdout};
use termlog_core::{Log, Prompt, Ui, UiConfig};

/// Context for handler execution, owning the process's terminal UI
pub struct HandlerContext {
    ui: Ui<BufReader<Stdin>, Stdout, Stderr>,
}

impl HandlerContext {
    pub fn new(config: UiConfig) -> Self {
        Self {
            ui: Ui::stdio(config),
        }
    }

    pub fn print(&mut self, log: Log) -> Result<()> {
        self.ui.print([log])?;
        Ok(())
    }

    pub fn ask<P: Prompt>(&mut self, prompt: &P) -> Result<P::Answer> {
        Ok(self.ui.ask_one(prompt)?)
    }
}
