use crate::command::{Command, CommandResult};
use crate::context::ShellContext;

/// history - list previously submitted commands, numbered from 1. The entry
/// for the `history` invocation itself lands in the list only after it runs.
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext) -> CommandResult {
        let out = ctx
            .history
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("{}  {}", i + 1, cmd))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(out)
    }
}
