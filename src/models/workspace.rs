use std::path::Path;

/// Workspace directory plus the branch checked out there, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceInfo {
    pub current_dir: String,
    pub git_branch: Option<String>,
}

impl WorkspaceInfo {
    /// Last component of the workspace path as written, or the path itself
    /// when it has none. `..` and `/` are components too, nothing is resolved.
    pub fn dir_name(&self) -> String {
        Path::new(&self.current_dir)
            .components()
            .next_back()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .unwrap_or_else(|| self.current_dir.clone())
    }
}
