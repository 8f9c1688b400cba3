use serde::Serialize;
use slotmap::{new_key_type, SlotMap};
use thiserror::Error;

new_key_type! {
    /// handle into the node arena - cheap to copy, stable across mutations
    pub struct NodeId;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("No such file or directory")]
    NotFound,
    #[error("Not a directory")]
    NotADirectory,
    #[error("Is a directory")]
    IsADirectory,
    #[error("File exists")]
    AlreadyExists,
    #[error("Invalid name")]
    InvalidName,
    #[error("Parent directory not found")]
    ParentNotFound,
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    File { content: String },
    Folder { children: Vec<NodeId> },
}

#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
}

impl Node {
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { .. })
    }
}

/// One entry of a serialized tree snapshot. Paths are materialized here for
/// the view layer; the store itself never stores them.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotNode {
    pub path: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SnapshotNode>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FsSnapshot {
    pub revision: u64,
    pub root: SnapshotNode,
}

/// The single owner of the workspace namespace. Nodes live in a flat arena;
/// parent/child structure is kept as id links, so a "path" is always derived
/// by walking to the root and can never go stale after a rename.
#[derive(Debug, Clone)]
pub struct FileStore {
    nodes: SlotMap<NodeId, Node>,
    root: NodeId,
    revision: u64,
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore {
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node {
            name: "workspace".to_string(),
            parent: None,
            kind: NodeKind::Folder { children: Vec::new() },
        });
        Self { nodes, root, revision: 0 }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    // segment-wise descent from the root; None if any segment is missing
    // or an intermediate node is a file
    pub fn lookup(&self, path: &str) -> Option<NodeId> {
        let mut id = self.root;
        for seg in path.split('/').filter(|s| !s.is_empty()) {
            let NodeKind::Folder { children } = &self.nodes[id].kind else {
                return None;
            };
            id = *children
                .iter()
                .find(|c| self.nodes[**c].name == seg)?;
        }
        Some(id)
    }

    /// Absolute path of a node, derived by walking parent links.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut segs = Vec::new();
        let mut cur = id;
        while let Some(parent) = self.nodes[cur].parent {
            segs.push(self.nodes[cur].name.clone());
            cur = parent;
        }
        if segs.is_empty() {
            return "/".to_string();
        }
        segs.reverse();
        format!("/{}", segs.join("/"))
    }

    pub fn create_file(&mut self, parent_path: &str, name: &str) -> Result<NodeId, FsError> {
        self.insert(parent_path, name, NodeKind::File { content: String::new() })
    }

    pub fn create_folder(&mut self, parent_path: &str, name: &str) -> Result<NodeId, FsError> {
        self.insert(parent_path, name, NodeKind::Folder { children: Vec::new() })
    }

    fn insert(&mut self, parent_path: &str, name: &str, kind: NodeKind) -> Result<NodeId, FsError> {
        if name.is_empty() || name.contains('/') {
            return Err(FsError::InvalidName);
        }
        let parent = self
            .lookup(parent_path)
            .filter(|id| self.nodes[*id].is_folder())
            .ok_or(FsError::ParentNotFound)?;
        if self.child_by_name(parent, name).is_some() {
            return Err(FsError::AlreadyExists);
        }
        let id = self.nodes.insert(Node {
            name: name.to_string(),
            parent: Some(parent),
            kind,
        });
        match &mut self.nodes[parent].kind {
            NodeKind::Folder { children } => children.push(id),
            NodeKind::File { .. } => unreachable!("parent checked above"),
        }
        self.revision += 1;
        tracing::debug!(path = %self.path_of(id), "node created");
        Ok(id)
    }

    /// Removes the node and its whole subtree. A missing path is treated as
    /// already-deleted and succeeds without touching the tree.
    pub fn delete(&mut self, path: &str) -> Result<(), FsError> {
        let Some(id) = self.lookup(path) else {
            tracing::debug!(path, "delete of missing path ignored");
            return Ok(());
        };
        let Some(parent) = self.nodes[id].parent else {
            // the root is not deletable
            return Ok(());
        };
        if let NodeKind::Folder { children } = &mut self.nodes[parent].kind {
            children.retain(|c| *c != id);
        }
        self.drop_subtree(id);
        self.revision += 1;
        tracing::debug!(path, "node deleted");
        Ok(())
    }

    fn drop_subtree(&mut self, id: NodeId) {
        let children = match &self.nodes[id].kind {
            NodeKind::Folder { children } => children.clone(),
            NodeKind::File { .. } => Vec::new(),
        };
        for child in children {
            self.drop_subtree(child);
        }
        self.nodes.remove(id);
    }

    pub fn rename(&mut self, path: &str, new_name: &str) -> Result<(), FsError> {
        if new_name.is_empty() || new_name.contains('/') {
            return Err(FsError::InvalidName);
        }
        let id = self.lookup(path).ok_or(FsError::NotFound)?;
        if let Some(parent) = self.nodes[id].parent {
            if let Some(existing) = self.child_by_name(parent, new_name) {
                if existing != id {
                    return Err(FsError::AlreadyExists);
                }
            }
        }
        self.nodes[id].name = new_name.to_string();
        self.revision += 1;
        tracing::debug!(path, new_name, "node renamed");
        Ok(())
    }

    /// Last write wins. Silently ignored unless the path is a file, so the
    /// editor surface can never crash the store.
    pub fn update_file_content(&mut self, path: &str, content: &str) {
        match self.lookup(path) {
            Some(id) => match &mut self.nodes[id].kind {
                NodeKind::File { content: buf } => {
                    *buf = content.to_string();
                    self.revision += 1;
                }
                NodeKind::Folder { .. } => {
                    tracing::debug!(path, "content update on folder ignored");
                }
            },
            None => tracing::debug!(path, "content update on missing path ignored"),
        }
    }

    pub fn read_file(&self, path: &str) -> Result<&str, FsError> {
        let id = self.lookup(path).ok_or(FsError::NotFound)?;
        match &self.nodes[id].kind {
            NodeKind::File { content } => Ok(content),
            NodeKind::Folder { .. } => Err(FsError::IsADirectory),
        }
    }

    /// Children of a folder in display order: folders first, then
    /// case-sensitive lexicographic by name.
    pub fn list(&self, path: &str) -> Result<Vec<NodeId>, FsError> {
        let id = self.lookup(path).ok_or(FsError::NotFound)?;
        let NodeKind::Folder { children } = &self.nodes[id].kind else {
            return Err(FsError::NotADirectory);
        };
        let mut ids = children.clone();
        ids.sort_by(|a, b| {
            let (na, nb) = (&self.nodes[*a], &self.nodes[*b]);
            nb.is_folder()
                .cmp(&na.is_folder())
                .then_with(|| na.name.cmp(&nb.name))
        });
        Ok(ids)
    }

    fn child_by_name(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        match &self.nodes[parent].kind {
            NodeKind::Folder { children } => children
                .iter()
                .copied()
                .find(|c| self.nodes[*c].name == name),
            NodeKind::File { .. } => None,
        }
    }

    pub fn snapshot(&self) -> FsSnapshot {
        FsSnapshot {
            revision: self.revision,
            root: self.snapshot_node(self.root),
        }
    }

    fn snapshot_node(&self, id: NodeId) -> SnapshotNode {
        let node = &self.nodes[id];
        match &node.kind {
            NodeKind::File { content } => SnapshotNode {
                path: self.path_of(id),
                name: node.name.clone(),
                kind: "file",
                content: Some(content.clone()),
                children: None,
            },
            NodeKind::Folder { .. } => {
                let children = self
                    .list(&self.path_of(id))
                    .unwrap_or_default()
                    .into_iter()
                    .map(|c| self.snapshot_node(c))
                    .collect();
                SnapshotNode {
                    path: self.path_of(id),
                    name: node.name.clone(),
                    kind: "folder",
                    content: None,
                    children: Some(children),
                }
            }
        }
    }

    /// The demo workspace the editor opens with.
    pub fn sample_workspace() -> Self {
        let mut store = Self::new();
        let seed = |store: &mut Self, parent: &str, name: &str, content: &str| {
            if let Ok(id) = store.create_file(parent, name) {
                if let NodeKind::File { content: buf } = &mut store.nodes[id].kind {
                    *buf = content.to_string();
                }
            }
        };
        let _ = store.create_folder("/", "src");
        seed(
            &mut store,
            "/src",
            "index.js",
            "// Welcome to JavaScript Development\nconsole.log('Hello, World!');\n\nfunction greetUser(name) {\n  return `Hello, ${name}! Welcome to coding!`;\n}\n\nconst languages = ['JavaScript', 'Python', 'Java', 'C++', 'Go'];\nconsole.log(greetUser('Developer'));\nlanguages.forEach((lang, index) => {\n  console.log(`${index + 1}. ${lang}`);\n});\n",
        );
        seed(
            &mut store,
            "/src",
            "styles.css",
            ":root {\n  --primary-color: #007acc;\n  --text-color: #333;\n}\n\nbody {\n  font-family: 'Segoe UI', sans-serif;\n  line-height: 1.6;\n  color: var(--text-color);\n}\n\n.container {\n  max-width: 1200px;\n  margin: 0 auto;\n  padding: 2rem;\n}\n",
        );
        seed(
            &mut store,
            "/src",
            "app.py",
            "#!/usr/bin/env python3\n\"\"\"Simple Flask web application.\"\"\"\n\nfrom flask import Flask, jsonify\n\napp = Flask(__name__)\n\n@app.route('/')\ndef home():\n    return jsonify({'status': 'ok'})\n\nif __name__ == '__main__':\n    app.run(host='0.0.0.0', port=5000, debug=True)\n",
        );
        seed(
            &mut store,
            "/src",
            "Main.java",
            "import java.util.*;\n\npublic class Main {\n    private static final String APP_NAME = \"Java Demo Application\";\n\n    public static void main(String[] args) {\n        System.out.println(APP_NAME);\n        List<String> languages = Arrays.asList(\"Java\", \"Python\", \"JavaScript\", \"C++\", \"Go\");\n        languages.stream()\n                .filter(lang -> lang.length() > 4)\n                .map(String::toUpperCase)\n                .sorted()\n                .forEach(System.out::println);\n    }\n}\n",
        );
        seed(
            &mut store,
            "/src",
            "main.cpp",
            "#include <iostream>\n#include <vector>\n#include <string>\n#include <algorithm>\n\nint main() {\n    std::vector<std::string> languages = {\"C++\", \"Java\", \"Python\", \"Go\"};\n    std::sort(languages.begin(), languages.end());\n    for (const auto& lang : languages) {\n        std::cout << lang << std::endl;\n    }\n    return 0;\n}\n",
        );
        seed(
            &mut store,
            "/src",
            "main.go",
            "package main\n\nimport (\n\t\"fmt\"\n\t\"sort\"\n)\n\nfunc main() {\n\tlanguages := []string{\"Go\", \"Java\", \"Python\", \"C++\"}\n\tsort.Strings(languages)\n\tfor _, lang := range languages {\n\t\tfmt.Println(lang)\n\t}\n}\n",
        );
        seed(
            &mut store,
            "/",
            "package.json",
            "{\n  \"name\": \"modern-development-workspace\",\n  \"version\": \"1.0.0\",\n  \"main\": \"src/index.js\",\n  \"scripts\": {\n    \"start\": \"node src/index.js\",\n    \"dev\": \"nodemon src/index.js\",\n    \"test\": \"jest\"\n  }\n}\n",
        );
        seed(
            &mut store,
            "/",
            "README.md",
            "# Modern Development Workspace\n\nA demo workspace showcasing multiple programming languages.\n\n## Getting Started\n\n```bash\nnpm install\nnpm start\n```\n",
        );
        seed(
            &mut store,
            "/",
            ".gitignore",
            "# Dependencies\nnode_modules/\nnpm-debug.log*\n\n# Coverage\ncoverage/\n*.lcov\n\n# TypeScript cache\n*.tsbuildinfo\n\n# Output of 'npm pack'\n*.tgz\n",
        );
        seed(
            &mut store,
            "/",
            "tsconfig.json",
            "{\n  \"compilerOptions\": {\n    \"target\": \"ES2020\",\n    \"strict\": true,\n    \"module\": \"ESNext\",\n    \"moduleResolution\": \"node\",\n    \"jsx\": \"react-jsx\",\n    \"baseUrl\": \".\",\n    \"paths\": {\n      \"@/*\": [\"./src/*\"]\n    }\n  },\n  \"include\": [\"src/**/*\"],\n  \"exclude\": [\"node_modules\", \"build\", \"dist\"]\n}\n",
        );
        store.revision = 0;
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // every node's derived path must equal its parent's path joined with
    // its name, and sibling names must be unique
    fn assert_tree_consistent(store: &FileStore, id: NodeId) {
        let node = store.node(id);
        if let Some(parent) = node.parent {
            let parent_path = store.path_of(parent);
            let expected = if parent_path == "/" {
                format!("/{}", node.name)
            } else {
                format!("{}/{}", parent_path, node.name)
            };
            assert_eq!(store.path_of(id), expected);
        }
        if let NodeKind::Folder { children } = &node.kind {
            let mut names: Vec<&str> =
                children.iter().map(|c| store.node(*c).name.as_str()).collect();
            names.sort();
            let before = names.len();
            names.dedup();
            assert_eq!(before, names.len(), "duplicate sibling names");
            for child in children {
                assert_eq!(store.node(*child).parent, Some(id));
                assert_tree_consistent(store, *child);
            }
        }
    }

    #[test]
    fn create_and_lookup() {
        let mut store = FileStore::new();
        store.create_folder("/", "src").unwrap();
        store.create_file("/src", "main.rs").unwrap();
        let id = store.lookup("/src/main.rs").unwrap();
        assert_eq!(store.path_of(id), "/src/main.rs");
        assert_tree_consistent(&store, store.root());
    }

    #[test]
    fn duplicate_sibling_rejected() {
        let mut store = FileStore::new();
        store.create_folder("/", "src").unwrap();
        assert_eq!(store.create_folder("/", "src"), Err(FsError::AlreadyExists));
        assert_eq!(store.create_file("/", "src"), Err(FsError::AlreadyExists));
        assert_tree_consistent(&store, store.root());
    }

    #[test]
    fn create_under_missing_parent() {
        let mut store = FileStore::new();
        assert_eq!(store.create_file("/nope", "a.txt"), Err(FsError::ParentNotFound));
        store.create_file("/", "a.txt").unwrap();
        // a file is not a valid parent either
        assert_eq!(store.create_file("/a.txt", "b.txt"), Err(FsError::ParentNotFound));
    }

    #[test]
    fn delete_is_silent_on_missing_path() {
        let mut store = FileStore::new();
        let before = store.revision();
        assert!(store.delete("/does/not/exist").is_ok());
        assert_eq!(store.revision(), before);
    }

    #[test]
    fn delete_removes_subtree() {
        let mut store = FileStore::new();
        store.create_folder("/", "src").unwrap();
        store.create_file("/src", "main.rs").unwrap();
        store.delete("/src").unwrap();
        assert!(store.lookup("/src").is_none());
        assert!(store.lookup("/src/main.rs").is_none());
        assert_tree_consistent(&store, store.root());
    }

    #[test]
    fn rename_folder_keeps_descendant_paths_fresh() {
        let mut store = FileStore::new();
        store.create_folder("/", "src").unwrap();
        store.create_file("/src", "main.rs").unwrap();
        store.rename("/src", "lib").unwrap();
        assert!(store.lookup("/src/main.rs").is_none());
        let id = store.lookup("/lib/main.rs").unwrap();
        assert_eq!(store.path_of(id), "/lib/main.rs");
        assert_tree_consistent(&store, store.root());
    }

    #[test]
    fn rename_rejects_empty_and_colliding_names() {
        let mut store = FileStore::new();
        store.create_file("/", "a.txt").unwrap();
        store.create_file("/", "b.txt").unwrap();
        assert_eq!(store.rename("/a.txt", ""), Err(FsError::InvalidName));
        assert_eq!(store.rename("/a.txt", "b.txt"), Err(FsError::AlreadyExists));
        // renaming to its own name is fine
        store.rename("/a.txt", "a.txt").unwrap();
    }

    #[test]
    fn update_content_only_touches_files() {
        let mut store = FileStore::new();
        store.create_file("/", "a.txt").unwrap();
        store.create_folder("/", "dir").unwrap();
        store.update_file_content("/a.txt", "hello");
        assert_eq!(store.read_file("/a.txt").unwrap(), "hello");
        let rev = store.revision();
        store.update_file_content("/dir", "nope");
        store.update_file_content("/missing", "nope");
        assert_eq!(store.revision(), rev);
    }

    #[test]
    fn read_file_errors() {
        let mut store = FileStore::new();
        store.create_folder("/", "dir").unwrap();
        assert_eq!(store.read_file("/missing"), Err(FsError::NotFound));
        assert_eq!(store.read_file("/dir"), Err(FsError::IsADirectory));
    }

    #[test]
    fn new_file_is_empty() {
        let mut store = FileStore::new();
        store.create_file("/", "a.txt").unwrap();
        assert_eq!(store.read_file("/a.txt").unwrap(), "");
    }

    #[test]
    fn list_sorts_folders_first_then_lexicographic() {
        let mut store = FileStore::new();
        store.create_file("/", "zz.txt").unwrap();
        store.create_folder("/", "beta").unwrap();
        store.create_file("/", "aa.txt").unwrap();
        store.create_folder("/", "alpha").unwrap();
        let names: Vec<String> = store
            .list("/")
            .unwrap()
            .into_iter()
            .map(|id| store.node(id).name.clone())
            .collect();
        assert_eq!(names, vec!["alpha", "beta", "aa.txt", "zz.txt"]);
    }

    #[test]
    fn list_errors_on_files_and_missing_paths() {
        let mut store = FileStore::new();
        store.create_file("/", "a.txt").unwrap();
        assert_eq!(store.list("/a.txt").unwrap_err(), FsError::NotADirectory);
        assert_eq!(store.list("/nope").unwrap_err(), FsError::NotFound);
    }

    #[test]
    fn snapshot_mirrors_tree() {
        let mut store = FileStore::new();
        store.create_folder("/", "src").unwrap();
        store.create_file("/src", "index.js").unwrap();
        store.update_file_content("/src/index.js", "let x = 1;");
        let snap = store.snapshot();
        assert_eq!(snap.root.path, "/");
        assert_eq!(snap.root.kind, "folder");
        let src = &snap.root.children.as_ref().unwrap()[0];
        assert_eq!(src.path, "/src");
        let index = &src.children.as_ref().unwrap()[0];
        assert_eq!(index.path, "/src/index.js");
        assert_eq!(index.content.as_deref(), Some("let x = 1;"));
    }

    #[test]
    fn revision_moves_only_on_mutation() {
        let mut store = FileStore::new();
        let r0 = store.revision();
        store.lookup("/");
        let _ = store.snapshot();
        assert_eq!(store.revision(), r0);
        store.create_file("/", "a.txt").unwrap();
        assert!(store.revision() > r0);
    }

    #[test]
    fn sample_workspace_has_expected_layout() {
        let store = FileStore::sample_workspace();
        for path in [
            "/src/index.js",
            "/src/styles.css",
            "/src/app.py",
            "/src/Main.java",
            "/src/main.cpp",
            "/src/main.go",
            "/README.md",
            "/package.json",
            "/.gitignore",
            "/tsconfig.json",
        ] {
            assert!(store.lookup(path).is_some(), "missing seed file {}", path);
        }
        assert!(store.node(store.lookup("/src").unwrap()).is_folder());
    }
}
