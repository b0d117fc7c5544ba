//! # Git Module
//!
//! Resolves the checked-out branch of a workspace by reading `.git/HEAD`
//! directly. Only the workspace directory itself is probed; parent
//! directories are never searched.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static HEAD_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ref: refs/heads/(.+)$").unwrap());

/// Extract the branch name from the contents of a HEAD file.
///
/// Detached heads and anything else that is not a symbolic ref to a local
/// branch yield `None`.
pub fn parse_head_ref(contents: &str) -> Option<String> {
    HEAD_REF
        .captures(contents.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn read_head_branch(workspace_dir: &Path) -> Option<String> {
    let head_path = workspace_dir.join(".git").join("HEAD");
    let contents = match fs::read_to_string(&head_path) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!(path = %head_path.display(), error = %e, "no readable HEAD");
            return None;
        }
    };
    let branch = parse_head_ref(&contents);
    tracing::debug!(path = %head_path.display(), ?branch, "probed HEAD");
    branch
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_head(dir: &TempDir, contents: &str) {
        let git_dir = dir.path().join(".git");
        fs::create_dir_all(&git_dir).unwrap();
        fs::write(git_dir.join("HEAD"), contents).unwrap();
    }

    #[test]
    fn parses_symbolic_ref() {
        assert_eq!(
            parse_head_ref("ref: refs/heads/main\n"),
            Some("main".to_string())
        );
        assert_eq!(
            parse_head_ref("ref: refs/heads/feature/statusline"),
            Some("feature/statusline".to_string())
        );
    }

    #[test]
    fn detached_or_foreign_heads_have_no_branch() {
        assert_eq!(
            parse_head_ref("4b825dc642cb6eb9a060e54bf8d69288fbee4904\n"),
            None
        );
        assert_eq!(parse_head_ref("ref: refs/tags/v1.0"), None);
        assert_eq!(parse_head_ref("ref: refs/heads/"), None);
        assert_eq!(parse_head_ref(""), None);
    }

    #[test]
    fn reads_branch_from_workspace() {
        let dir = TempDir::new().unwrap();
        write_head(&dir, "ref: refs/heads/develop\n");
        assert_eq!(read_head_branch(dir.path()), Some("develop".to_string()));
    }

    #[test]
    fn missing_git_dir_has_no_branch() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_head_branch(dir.path()), None);
    }

    #[test]
    fn parent_repository_is_not_consulted() {
        let dir = TempDir::new().unwrap();
        write_head(&dir, "ref: refs/heads/main\n");
        let nested = dir.path().join("nested");
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(read_head_branch(&nested), None);
    }

    #[test]
    fn head_that_is_a_directory_has_no_branch() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".git").join("HEAD")).unwrap();
        assert_eq!(read_head_branch(dir.path()), None);
    }
}
