use crate::command::{run_command, CommandRegistry};
use crate::context::ShellContext;
use crate::fs::FileStore;
use chrono::{DateTime, Local};
use rand::Rng;
use serde::Serialize;
use std::time::Duration;

/// Builtins whose result is delivered after an artificial delay.
pub const ASYNC_COMMANDS: [&str; 3] = ["npm", "git", "node"];

const WELCOME: &str = "Welcome to VS Code Terminal\nType 'help' to see available commands.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Command,
    Output,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScrollbackEntry {
    pub command: String,
    pub output: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub timestamp: DateTime<Local>,
}

/// A simulated-async command whose result has not been delivered yet. The
/// caller owns the timer; the session only checks the epoch when the result
/// comes back, so a pending command abandoned by Ctrl+C can never append
/// stale output.
#[derive(Debug)]
pub struct PendingCommand {
    line: String,
    epoch: u64,
    pub delay: Duration,
}

#[must_use]
pub enum Submission {
    /// Executed synchronously; the scrollback is already up to date.
    Done,
    /// Simulated-async; schedule `deliver` after `delay`.
    Pending(PendingCommand),
    /// A command is still in flight; the input was dropped.
    Busy,
}

/// One interactive terminal session: scrollback, cwd, history recall and the
/// Idle/Processing machine. All state is scoped here; two sessions never
/// share anything but the code.
pub struct Session {
    ctx: ShellContext,
    registry: CommandRegistry,
    scrollback: Vec<ScrollbackEntry>,
    recall: Option<usize>,
    processing: bool,
    epoch: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::with_store(FileStore::sample_workspace())
    }

    pub fn with_store(store: FileStore) -> Self {
        let mut session = Self {
            ctx: ShellContext::with_store(store),
            registry: CommandRegistry::builtins(),
            scrollback: Vec::new(),
            recall: None,
            processing: false,
            epoch: 0,
        };
        session.push(EntryKind::Output, "", WELCOME);
        session
    }

    /// Submit one raw input line.
    pub fn submit(&mut self, line: &str) -> Submission {
        if self.processing {
            return Submission::Busy;
        }
        let line = line.trim();
        if line.is_empty() {
            return Submission::Done;
        }
        let Some(name) = line.split_whitespace().next() else {
            return Submission::Done;
        };

        self.push(EntryKind::Command, line, "");
        self.recall = None;

        // clear wipes the whole log, its own echo included
        if name == "clear" || name == "cls" {
            self.scrollback.clear();
            self.ctx.history.push(line.to_string());
            return Submission::Done;
        }

        if ASYNC_COMMANDS.contains(&name) {
            self.ctx.history.push(line.to_string());
            self.processing = true;
            self.epoch += 1;
            let delay = rand::thread_rng().gen_range(500..1500);
            tracing::debug!(command = name, delay_ms = delay, "deferring");
            return Submission::Pending(PendingCommand {
                line: line.to_string(),
                epoch: self.epoch,
                delay: Duration::from_millis(delay),
            });
        }

        self.finish(line);
        // the command joins history after it runs, so `history` lists only
        // prior submissions
        self.ctx.history.push(line.to_string());
        Submission::Done
    }

    /// Deliver the result of a pending command. A no-op if the session was
    /// cancelled or otherwise moved on since the command was submitted.
    pub fn deliver(&mut self, pending: PendingCommand) {
        if !self.processing || pending.epoch != self.epoch {
            tracing::debug!(line = %pending.line, "stale delivery dropped");
            return;
        }
        self.finish(&pending.line);
        self.processing = false;
    }

    /// Ctrl+C: append a literal `^C`, abandon anything in flight.
    pub fn cancel(&mut self) {
        self.push(EntryKind::Output, "", "^C");
        self.processing = false;
        self.epoch += 1;
    }

    fn finish(&mut self, line: &str) {
        match run_command(line, &mut self.ctx, &self.registry) {
            Ok(out) => {
                if !out.is_empty() {
                    self.push(EntryKind::Output, "", &out);
                }
            }
            Err(msg) => self.push(EntryKind::Error, "", &msg),
        }
    }

    /// Up-arrow: step toward older history entries, stopping at the oldest.
    /// Returns the text the input buffer should show.
    pub fn recall_prev(&mut self) -> Option<String> {
        if self.ctx.history.is_empty() {
            return None;
        }
        let idx = match self.recall {
            None => self.ctx.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.recall = Some(idx);
        Some(self.ctx.history[idx].clone())
    }

    /// Down-arrow: step toward newer entries; moving past the newest clears
    /// the buffer and ends recall. None when not recalling.
    pub fn recall_next(&mut self) -> Option<String> {
        let idx = self.recall?;
        let next = idx + 1;
        if next >= self.ctx.history.len() {
            self.recall = None;
            Some(String::new())
        } else {
            self.recall = Some(next);
            Some(self.ctx.history[next].clone())
        }
    }

    pub fn prompt(&self) -> String {
        let display = if self.ctx.cwd == "/" {
            "~".to_string()
        } else {
            format!("~{}", self.ctx.cwd)
        };
        format!("developer@vscode:{}$", display)
    }

    pub fn scrollback(&self) -> &[ScrollbackEntry] {
        &self.scrollback
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn cwd(&self) -> &str {
        &self.ctx.cwd
    }

    pub fn history(&self) -> &[String] {
        &self.ctx.history
    }

    pub fn store(&self) -> &FileStore {
        &self.ctx.store
    }

    /// Mutable store access for the explorer/editor surface.
    pub fn store_mut(&mut self) -> &mut FileStore {
        &mut self.ctx.store
    }

    fn push(&mut self, kind: EntryKind, command: &str, output: &str) {
        self.scrollback.push(ScrollbackEntry {
            command: command.to_string(),
            output: output.to_string(),
            kind,
            timestamp: Local::now(),
        });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
