//! Shared test console: scripted input, captured output, no real terminal.

use anyhow::Result;
use std::collections::VecDeque;
use std::time::Duration;
use tictactoe_console::{Board, Console};

/// Console double that replays a scripted list of input lines and records
/// every status line printed.
pub struct ScriptedConsole {
    input: VecDeque<String>,
    /// Status lines printed through [`Console::line`].
    pub output: Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console that will serve the given lines, in order.
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|s| s.to_string()).collect(),
            output: Vec::new(),
        }
    }

    /// Whether any recorded status line contains `needle`.
    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn frame(&mut self, _board: &Board) -> Result<()> {
        Ok(())
    }

    fn banner(&mut self) -> Result<()> {
        Ok(())
    }

    fn line(&mut self, text: &str) -> Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }

    fn read_line(&mut self, _prompt: &str) -> Result<String> {
        self.input
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn pause(&mut self, _duration: Duration) {}
}
