//! The no-filesystem builtins: date, whoami, uname, ps. All fixed or
//! clock-derived text.

use crate::command::{Command, CommandResult};
use crate::context::ShellContext;
use chrono::Local;

pub struct DateCommand;

impl Command for DateCommand {
    fn execute(&self, _args: &[String], _ctx: &mut ShellContext) -> CommandResult {
        Ok(Local::now().format("%a %b %e %Y %H:%M:%S %z").to_string())
    }
}

pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn execute(&self, _args: &[String], _ctx: &mut ShellContext) -> CommandResult {
        Ok("developer".to_string())
    }
}

pub struct UnameCommand;

impl Command for UnameCommand {
    fn execute(&self, args: &[String], _ctx: &mut ShellContext) -> CommandResult {
        if args.first().map(|a| a.as_str()) == Some("-a") {
            Ok("VSCode-Terminal 1.0.0 WebContainer x86_64 GNU/Linux".to_string())
        } else {
            Ok("Linux".to_string())
        }
    }
}

pub struct PsCommand;

impl Command for PsCommand {
    fn execute(&self, _args: &[String], _ctx: &mut ShellContext) -> CommandResult {
        Ok("  PID TTY          TIME CMD\n 1234 pts/0    00:00:01 bash\n 5678 pts/0    00:00:00 node\n 9012 pts/0    00:00:00 ps"
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whoami_is_fixed() {
        let mut ctx = ShellContext::new();
        assert_eq!(WhoamiCommand.execute(&[], &mut ctx).unwrap(), "developer");
    }

    #[test]
    fn uname_with_and_without_flag() {
        let mut ctx = ShellContext::new();
        assert_eq!(UnameCommand.execute(&[], &mut ctx).unwrap(), "Linux");
        let out = UnameCommand.execute(&["-a".to_string()], &mut ctx).unwrap();
        assert!(out.contains("WebContainer"));
    }

    #[test]
    fn ps_lists_canned_processes() {
        let mut ctx = ShellContext::new();
        let out = PsCommand.execute(&[], &mut ctx).unwrap();
        assert!(out.starts_with("  PID TTY"));
        assert!(out.contains("bash"));
    }

    #[test]
    fn date_produces_something_datelike() {
        let mut ctx = ShellContext::new();
        let out = DateCommand.execute(&[], &mut ctx).unwrap();
        assert!(!out.is_empty());
    }
}
