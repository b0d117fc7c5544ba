pub mod input;
pub mod workspace;

pub use input::{ModelInfo, StatusInput, TokenUsage, WorkspaceInput};
pub use workspace::WorkspaceInfo;
