use crate::command::{Command, CommandResult};
use crate::context::ShellContext;

/// node [file|--version] - canned runtime output. Simulated-async.
pub struct NodeCommand;

impl Command for NodeCommand {
    fn execute(&self, args: &[String], _ctx: &mut ShellContext) -> CommandResult {
        let out = match args.first().map(|a| a.as_str()) {
            Some("--version") | Some("-v") => "v18.17.0".to_string(),
            Some(file) => format!("Running {}...\n✅ Execution completed", file),
            None => "Welcome to Node.js v18.17.0.\nType \".help\" for more information."
                .to_string(),
        };
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_flag() {
        let mut ctx = ShellContext::new();
        assert_eq!(
            NodeCommand
                .execute(&["--version".to_string()], &mut ctx)
                .unwrap(),
            "v18.17.0"
        );
    }

    #[test]
    fn running_a_file() {
        let mut ctx = ShellContext::new();
        let out = NodeCommand
            .execute(&["index.js".to_string()], &mut ctx)
            .unwrap();
        assert!(out.starts_with("Running index.js..."));
    }

    #[test]
    fn bare_invocation_prints_repl_banner() {
        let mut ctx = ShellContext::new();
        let out = NodeCommand.execute(&[], &mut ctx).unwrap();
        assert!(out.contains("Welcome to Node.js"));
    }
}
