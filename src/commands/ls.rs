use crate::command::{Command, CommandResult};
use crate::context::ShellContext;
use crate::fs::FsError;

/// ls [path] - list directory contents, folders first. Entries are wrapped
/// in ANSI color codes by extension class; the view maps them to theme
/// colors.
pub struct LsCommand;

// directory entries get a trailing slash on top of the color
const DIR_COLOR: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

fn color_for(name: &str) -> Option<&'static str> {
    let ext = name.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "js" | "jsx" | "ts" | "tsx" => Some("\x1b[33m"), // script-like
        "css" | "scss" => Some("\x1b[35m"),              // stylesheet
        "html" => Some("\x1b[31m"),                      // markup
        "json" => Some("\x1b[36m"),                      // data
        "md" => Some("\x1b[32m"),                        // doc
        _ => None,
    }
}

impl Command for LsCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        let target = match args.first() {
            Some(arg) => ctx.resolve(arg),
            None => ctx.cwd.clone(),
        };

        let entries = match ctx.store.list(&target) {
            Ok(ids) => ids,
            Err(FsError::NotFound) => {
                return Err(format!(
                    "ls: cannot access '{}': No such file or directory",
                    target
                ));
            }
            Err(_) => {
                return Err(format!("ls: cannot access '{}': Not a directory", target));
            }
        };

        let rendered: Vec<String> = entries
            .into_iter()
            .map(|id| {
                let node = ctx.store.node(id);
                if node.is_folder() {
                    format!("{}{}/{}", DIR_COLOR, node.name, RESET)
                } else {
                    match color_for(&node.name) {
                        Some(color) => format!("{}{}{}", color, node.name, RESET),
                        None => node.name.clone(),
                    }
                }
            })
            .collect();

        Ok(rendered.join("  "))
    }
}
