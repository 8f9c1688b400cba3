use crate::command::{Command, CommandResult};
use crate::context::ShellContext;

/// exit - print a farewell. Closing the terminal panel is the view layer's
/// call, not ours.
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _args: &[String], _ctx: &mut ShellContext) -> CommandResult {
        Ok("Goodbye! 👋".to_string())
    }
}
