use crate::command::{Command, CommandResult};
use crate::context::ShellContext;
use crate::fs::FsError;

/// cat <path> - print a file's content verbatim.
pub struct CatCommand;

impl Command for CatCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        let Some(arg) = args.first() else {
            return Err("cat: missing file operand".to_string());
        };
        let target = ctx.resolve(arg);
        match ctx.store.read_file(&target) {
            Ok(content) => Ok(content.to_string()),
            Err(FsError::IsADirectory) => Err(format!("cat: {}: Is a directory", arg)),
            Err(_) => Err(format!("cat: {}: No such file or directory", arg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::FileStore;

    fn ctx() -> ShellContext {
        let mut store = FileStore::new();
        store.create_folder("/", "src").unwrap();
        store.create_file("/src", "main.js").unwrap();
        store.update_file_content("/src/main.js", "console.log('hi');\n");
        ShellContext::with_store(store)
    }

    #[test]
    fn prints_file_content() {
        let mut ctx = ctx();
        let out = CatCommand
            .execute(&["/src/main.js".to_string()], &mut ctx)
            .unwrap();
        assert_eq!(out, "console.log('hi');\n");
    }

    #[test]
    fn fresh_file_prints_empty_string() {
        let mut ctx = ctx();
        ctx.store.create_file("/", "empty.txt").unwrap();
        let out = CatCommand
            .execute(&["empty.txt".to_string()], &mut ctx)
            .unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn folder_is_a_directory_error() {
        let mut ctx = ctx();
        let err = CatCommand.execute(&["src".to_string()], &mut ctx).unwrap_err();
        assert_eq!(err, "cat: src: Is a directory");
    }

    #[test]
    fn missing_file_error_echoes_the_argument() {
        let mut ctx = ctx();
        let err = CatCommand
            .execute(&["nope.txt".to_string()], &mut ctx)
            .unwrap_err();
        assert_eq!(err, "cat: nope.txt: No such file or directory");
    }

    #[test]
    fn missing_operand() {
        let mut ctx = ctx();
        let err = CatCommand.execute(&[], &mut ctx).unwrap_err();
        assert_eq!(err, "cat: missing file operand");
    }
}
