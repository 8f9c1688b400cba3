use crate::command::{Command, CommandResult};
use crate::context::ShellContext;

/// code [path] - pretend to open the editor. The view layer decides whether
/// anything actually opens; this builtin only reports.
pub struct CodeCommand;

impl Command for CodeCommand {
    fn execute(&self, args: &[String], _ctx: &mut ShellContext) -> CommandResult {
        match args.first() {
            Some(path) => Ok(format!("Opening {} in editor...", path)),
            None => Ok("Opening current directory in editor...".to_string()),
        }
    }
}
