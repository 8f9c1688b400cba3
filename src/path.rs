//! Virtual path arithmetic. Pure string work, no store access; the shell
//! resolves everything against the cwd before handing paths to the store.

/// Resolve a user-supplied path against the current working directory.
pub fn resolve(cwd: &str, input: &str) -> String {
    if input.starts_with('/') {
        return input.to_string();
    }
    if input == ".." {
        return parent(cwd);
    }
    if input == "." {
        return cwd.to_string();
    }
    if input.starts_with("../") {
        let mut segs: Vec<&str> = cwd.split('/').filter(|s| !s.is_empty()).collect();
        for seg in input.split('/').filter(|s| !s.is_empty()) {
            if seg == ".." {
                segs.pop();
            } else {
                segs.push(seg);
            }
        }
        return if segs.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", segs.join("/"))
        };
    }
    // joined input may still carry `.` segments (`./x`, `a/./b`)
    normalize(&join(cwd, input))
}

/// Collapse `//`, `.` and `..` components; `..` never climbs above root.
pub fn normalize(path: &str) -> String {
    let mut segs: Vec<&str> = Vec::new();
    for seg in path.split('/') {
        match seg {
            "" | "." => continue,
            ".." => {
                segs.pop();
            }
            s => segs.push(s),
        }
    }
    if segs.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segs.join("/"))
    }
}

/// Parent of an absolute path; the root is its own parent.
pub fn parent(path: &str) -> String {
    let segs: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segs.len() <= 1 {
        return "/".to_string();
    }
    format!("/{}", segs[..segs.len() - 1].join("/"))
}

/// Join a child name onto a base path without doubling the root slash.
pub fn join(base: &str, name: &str) -> String {
    if base == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", base.trim_end_matches('/'), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_pass_through() {
        assert_eq!(resolve("/src", "/README.md"), "/README.md");
        assert_eq!(resolve("/", "/src/index.js"), "/src/index.js");
    }

    #[test]
    fn dot_and_dotdot() {
        assert_eq!(resolve("/src", "."), "/src");
        assert_eq!(resolve("/src", ".."), "/");
        assert_eq!(resolve("/", ".."), "/");
        assert_eq!(resolve("/a/b/c", ".."), "/a/b");
    }

    #[test]
    fn parent_relative_walk() {
        assert_eq!(resolve("/src", "../README.md"), "/README.md");
        assert_eq!(resolve("/a/b", "../../x"), "/x");
        assert_eq!(resolve("/a", "../../../x"), "/x");
        assert_eq!(resolve("/a/b", "../c/d"), "/a/c/d");
    }

    #[test]
    fn relative_child_join() {
        assert_eq!(resolve("/src", "x"), "/src/x");
        assert_eq!(resolve("/", "x"), "/x");
        assert_eq!(resolve("/src", "sub/file.txt"), "/src/sub/file.txt");
    }

    #[test]
    fn dot_prefixed_relative() {
        assert_eq!(resolve("/src", "./x"), "/src/x");
        assert_eq!(resolve("/", "./x"), "/x");
        assert_eq!(resolve("/src", "./sub/./file.txt"), "/src/sub/file.txt");
        assert_eq!(resolve("/src", "a/./b"), "/src/a/b");
    }

    #[test]
    fn normalize_collapses_components() {
        assert_eq!(normalize("/home/user/../docs"), "/home/docs");
        assert_eq!(normalize("/home/./user"), "/home/user");
        assert_eq!(normalize("/home//user"), "/home/user");
        assert_eq!(normalize("/.."), "/");
        assert_eq!(normalize("/"), "/");
    }

    #[test]
    fn parent_handles_root() {
        assert_eq!(parent("/"), "/");
        assert_eq!(parent("/home"), "/");
        assert_eq!(parent("/home/user"), "/home");
    }

    #[test]
    fn join_avoids_double_slash() {
        assert_eq!(join("/", "a"), "/a");
        assert_eq!(join("/src", "a"), "/src/a");
        assert_eq!(join("/src/", "a"), "/src/a");
    }
}
