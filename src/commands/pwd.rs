use crate::command::{Command, CommandResult};
use crate::context::ShellContext;

/// pwd - print the working directory.
pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext) -> CommandResult {
        Ok(ctx.cwd.clone())
    }
}
