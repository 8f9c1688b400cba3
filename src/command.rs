use crate::context::ShellContext;
use std::collections::HashMap;

pub type CommandResult = Result<String, String>;

pub trait Command {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult;
}

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command + Send + Sync>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { commands: HashMap::new() }
    }

    pub fn register(&mut self, name: &str, cmd: Box<dyn Command + Send + Sync>) {
        self.commands.insert(name.to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&(dyn Command + Send + Sync)> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.sort();
        names
    }

    /// The fixed builtin table. `clear`/`cls` are not in here; the session
    /// special-cases them because they empty the scrollback instead of
    /// producing output.
    pub fn builtins() -> Self {
        let mut reg = Self::new();
        reg.register("ls", Box::new(crate::commands::ls::LsCommand));
        reg.register("dir", Box::new(crate::commands::ls::LsCommand));
        reg.register("cd", Box::new(crate::commands::cd::CdCommand));
        reg.register("pwd", Box::new(crate::commands::pwd::PwdCommand));
        reg.register("mkdir", Box::new(crate::commands::mkdir::MkdirCommand));
        reg.register("touch", Box::new(crate::commands::touch::TouchCommand));
        reg.register("cat", Box::new(crate::commands::cat::CatCommand));
        reg.register("echo", Box::new(crate::commands::echo::EchoCommand));
        reg.register("date", Box::new(crate::commands::sysinfo::DateCommand));
        reg.register("whoami", Box::new(crate::commands::sysinfo::WhoamiCommand));
        reg.register("uname", Box::new(crate::commands::sysinfo::UnameCommand));
        reg.register("ps", Box::new(crate::commands::sysinfo::PsCommand));
        reg.register("history", Box::new(crate::commands::history::HistoryCommand));
        reg.register("npm", Box::new(crate::commands::npm::NpmCommand));
        reg.register("git", Box::new(crate::commands::git::GitCommand));
        reg.register("node", Box::new(crate::commands::node::NodeCommand));
        reg.register("code", Box::new(crate::commands::code::CodeCommand));
        reg.register("exit", Box::new(crate::commands::exit::ExitCommand));
        reg.register("help", Box::new(crate::commands::help::HelpCommand));
        reg
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtins()
    }
}

pub fn run_command(input: &str, ctx: &mut ShellContext, registry: &CommandRegistry) -> CommandResult {
    let input = input.trim();

    let mut parts = input.split_whitespace();
    let cmd = match parts.next() {
        Some(c) => c,
        None => return Ok(String::new()), // empty input = no-op
    };
    let args: Vec<String> = parts.map(|s| s.to_string()).collect();

    ctx.ensure_cwd();
    tracing::debug!(command = cmd, ?args, "dispatching");

    match registry.get(cmd) {
        Some(command) => command.execute(&args, ctx),
        None => Err(format!(
            "{}: command not found\nType 'help' for available commands",
            cmd
        )),
    }
}
