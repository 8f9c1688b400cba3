//! Core of a browser-based code-editor workbench: an in-memory virtual file
//! tree and the simulated terminal that operates on it. Nothing here touches
//! a real filesystem or spawns a real process; the view layer renders
//! snapshots and scrollback, and everything else is state in this crate.

pub mod command;
pub mod commands;
pub mod context;
pub mod fs;
pub mod path;
pub mod session;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use command::{Command, CommandRegistry, CommandResult};
pub use context::ShellContext;
pub use fs::{FileStore, FsError, FsSnapshot, NodeId};
pub use session::{EntryKind, PendingCommand, ScrollbackEntry, Session, Submission};
