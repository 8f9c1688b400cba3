use crate::fs::FileStore;
use crate::path;

/// Everything a builtin may touch: the injected file store, the working
/// directory, and the list of previously submitted commands. One context per
/// session, passed by reference; there is no process-wide state.
pub struct ShellContext {
    pub store: FileStore,
    pub cwd: String,
    pub history: Vec<String>,
}

impl ShellContext {
    pub fn new() -> Self {
        Self::with_store(FileStore::sample_workspace())
    }

    pub fn with_store(store: FileStore) -> Self {
        Self {
            store,
            cwd: "/".to_string(),
            history: Vec::new(),
        }
    }

    /// Resolve a user path against the cwd.
    pub fn resolve(&self, input: &str) -> String {
        path::resolve(&self.cwd, input)
    }

    /// The cwd must always reference an existing folder. If the explorer
    /// deleted it out from under us, fall back to the root instead of
    /// surfacing an internal inconsistency.
    pub fn ensure_cwd(&mut self) {
        let ok = self
            .store
            .lookup(&self.cwd)
            .map(|id| self.store.node(id).is_folder())
            .unwrap_or(false);
        if !ok {
            tracing::warn!(cwd = %self.cwd, "cwd no longer resolves to a folder, resetting to /");
            self.cwd = "/".to_string();
        }
    }
}

impl Default for ShellContext {
    fn default() -> Self {
        Self::new()
    }
}
