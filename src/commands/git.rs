use crate::command::{Command, CommandResult};
use crate::context::ShellContext;
use chrono::{Duration, Local};

/// git [status|log|branch] - canned version-control output. Simulated-async.
pub struct GitCommand;

impl Command for GitCommand {
    fn execute(&self, args: &[String], _ctx: &mut ShellContext) -> CommandResult {
        let out = match args.first().map(|a| a.as_str()) {
            Some("status") => "On branch main\n\
                Your branch is up to date with 'origin/main'.\n\
                \n\
                Changes not staged for commit:\n\
                \x20 (use \"git add <file>...\" to update what will be committed)\n\
                \x20 (use \"git checkout -- <file>...\" to discard changes in working directory)\n\
                \n\
                \x20       modified:   src/index.js\n\
                \x20       modified:   package.json\n\
                \n\
                no changes added to commit (use \"git add\" or \"git commit -a\")"
                .to_string(),
            Some("log") => {
                let today = Local::now();
                let yesterday = today - Duration::days(1);
                format!(
                    "commit a1b2c3d4e5f6 (HEAD -> main, origin/main)\n\
                    Author: Developer <dev@example.com>\n\
                    Date:   {}\n\
                    \n\
                    \x20   Initial commit\n\
                    \n\
                    commit f6e5d4c3b2a1\n\
                    Author: Developer <dev@example.com>\n\
                    Date:   {}\n\
                    \n\
                    \x20   Add project structure",
                    today.format("%a %b %d %Y"),
                    yesterday.format("%a %b %d %Y")
                )
            }
            Some("branch") => "* main\n\
                \x20 feature/new-component\n\
                \x20 hotfix/bug-fix"
                .to_string(),
            _ => "git: Available commands:\n\
                \x20 git status           - Show working tree status\n\
                \x20 git log              - Show commit logs\n\
                \x20 git branch           - List branches\n\
                \x20 git add <file>       - Add file to staging\n\
                \x20 git commit -m \"msg\"  - Commit changes"
                .to_string(),
        };
        Ok(out)
    }
}
