use crate::command::{Command, CommandResult};
use crate::context::ShellContext;

/// help - the full command reference.
pub struct HelpCommand;

const HELP_TEXT: &str = "Available commands:

File Operations:
  ls, dir              - List directory contents
  cd <path>            - Change directory
  pwd                  - Print working directory
  mkdir <name>         - Create directory
  touch <name>         - Create file
  cat <file>           - Display file contents

System:
  echo <text>          - Display text
  date                 - Show current date and time
  whoami               - Show current user
  uname [-a]           - Show system information
  ps                   - Show running processes
  history              - Show command history

Development:
  npm install          - Install npm packages
  npm run <script>     - Run npm script
  npm start            - Start production server
  node [file]          - Run Node.js
  git status           - Git status
  git log              - Git log
  code [file]          - Open in editor

Terminal:
  clear, cls           - Clear terminal
  exit                 - Exit terminal
  help                 - Show this help message

Navigation:
  Use ↑/↓ arrows for command history
  Use Tab for auto-completion (coming soon)";

impl Command for HelpCommand {
    fn execute(&self, _args: &[String], _ctx: &mut ShellContext) -> CommandResult {
        Ok(HELP_TEXT.to_string())
    }
}
