use crate::command::{Command, CommandResult};
use crate::context::ShellContext;

/// touch <name> - create an empty file under the cwd.
pub struct TouchCommand;

impl Command for TouchCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        let Some(name) = args.first() else {
            return Err("touch: missing file operand".to_string());
        };
        let cwd = ctx.cwd.clone();
        match ctx.store.create_file(&cwd, name) {
            Ok(_) => Ok(String::new()),
            Err(e) => Err(format!("touch: cannot touch '{}': {}", name, e)),
        }
    }
}
