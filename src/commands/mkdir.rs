use crate::command::{Command, CommandResult};
use crate::context::ShellContext;

/// mkdir <name> - create a folder under the cwd.
pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        let Some(name) = args.first() else {
            return Err("mkdir: missing operand".to_string());
        };
        let cwd = ctx.cwd.clone();
        match ctx.store.create_folder(&cwd, name) {
            Ok(_) => Ok(String::new()),
            Err(e) => Err(format!("mkdir: cannot create directory '{}': {}", name, e)),
        }
    }
}
