use crate::command::{Command, CommandResult};
use crate::context::ShellContext;

/// cd [path] - change the working directory. No argument goes to the root.
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        let shown = args.first().map(|s| s.as_str()).unwrap_or("/");
        let target = match args.first() {
            Some(arg) => ctx.resolve(arg),
            None => "/".to_string(),
        };

        match ctx.store.lookup(&target) {
            None => Err(format!("cd: no such file or directory: {}", shown)),
            Some(id) if !ctx.store.node(id).is_folder() => {
                Err(format!("cd: not a directory: {}", shown))
            }
            Some(_) => {
                ctx.cwd = target;
                Ok(String::new()) // normal cd is silent
            }
        }
    }
}
