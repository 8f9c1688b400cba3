use crate::command::{Command, CommandResult};
use crate::context::ShellContext;

/// npm [install|run <script>|start|version] - canned package-manager output.
/// One of the simulated-async builtins; the session delivers the result
/// after an artificial delay.
pub struct NpmCommand;

impl Command for NpmCommand {
    fn execute(&self, args: &[String], _ctx: &mut ShellContext) -> CommandResult {
        let out = match args.first().map(|a| a.as_str()) {
            Some("install") => "📦 Installing packages...\n\
                ⠋ Resolving dependencies...\n\
                ⠙ Fetching packages...\n\
                ⠹ Linking dependencies...\n\
                ✅ Dependencies installed successfully\n\
                🔧 Packages added to node_modules/\n\
                ⚡ Ready for development!\n\
                \n\
                added 1337 packages in 42s"
                .to_string(),
            Some("run") => {
                let script = args.get(1).map(|s| s.as_str()).unwrap_or("dev");
                format!(
                    "🚀 Running script: {}\n\
                    📡 Starting development server...\n\
                    🌐 Local:    http://localhost:3000\n\
                    🌐 Network:  http://192.168.1.100:3000\n\
                    ✨ Ready for hot reload!",
                    script
                )
            }
            Some("start") => "🚀 Starting production server...\n\
                ✅ Application started successfully\n\
                🌐 Server running on http://localhost:3000"
                .to_string(),
            Some("version") | Some("-v") => "9.8.1".to_string(),
            _ => "npm: Available commands:\n\
                \x20 npm install           - Install dependencies\n\
                \x20 npm run <script>      - Run npm script\n\
                \x20 npm start            - Start production server\n\
                \x20 npm version          - Show npm version\n\
                \x20 npm help             - Show help"
                .to_string(),
        };
        Ok(out)
    }
}
