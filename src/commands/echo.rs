use crate::command::{Command, CommandResult};
use crate::context::ShellContext;

/// echo <args...> - print the arguments space-joined.
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(&self, args: &[String], _ctx: &mut ShellContext) -> CommandResult {
        Ok(args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_arguments() {
        let mut ctx = ShellContext::new();
        let out = EchoCommand
            .execute(&["hello".to_string(), "world".to_string()], &mut ctx)
            .unwrap();
        assert_eq!(out, "hello world");
    }

    #[test]
    fn no_arguments_prints_nothing() {
        let mut ctx = ShellContext::new();
        assert_eq!(EchoCommand.execute(&[], &mut ctx).unwrap(), "");
    }
}
