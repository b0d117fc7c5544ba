//! Decode → calculate → format pipeline for one status line.

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::display::format_statusline;
use crate::metrics::StatusMetrics;
use crate::models::{ModelInfo, StatusInput, TokenUsage, WorkspaceInfo, WorkspaceInput};

#[derive(Debug, Clone)]
pub struct StatusLineData {
    pub model: ModelInfo,
    pub workspace: WorkspaceInfo,
    pub token_usage: TokenUsage,
}

impl StatusLineData {
    pub fn from_slice(raw: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(raw).context("parse status json")?;
        if !value.is_object() {
            bail!("status json must be an object");
        }
        let input: StatusInput = serde_json::from_value(value).context("parse status json")?;
        tracing::debug!(
            model = %input.model.display_name,
            current_dir = ?input.workspace.current_dir,
            usage = ?input.token_usage,
            "decoded status input"
        );
        Self::from_input(input)
    }

    pub fn from_input(input: StatusInput) -> Result<Self> {
        Ok(Self {
            model: input.model,
            workspace: resolve_workspace(input.workspace)?,
            token_usage: input.token_usage,
        })
    }

    pub fn metrics(&self) -> StatusMetrics {
        StatusMetrics::calculate(&self.token_usage, &self.model)
    }
}

fn resolve_workspace(input: WorkspaceInput) -> Result<WorkspaceInfo> {
    let current_dir = match input.current_dir {
        Some(dir) => dir,
        None => std::env::current_dir()
            .context("resolve working directory")?
            .to_string_lossy()
            .into_owned(),
    };
    let git_branch = probe_branch(&current_dir);
    Ok(WorkspaceInfo {
        current_dir,
        git_branch,
    })
}

#[cfg(feature = "git")]
fn probe_branch(dir: &str) -> Option<String> {
    crate::git::read_head_branch(std::path::Path::new(dir))
}

#[cfg(not(feature = "git"))]
fn probe_branch(_dir: &str) -> Option<String> {
    None
}

/// Render the status line for one raw input document.
pub fn render_status(raw: &[u8], color: bool) -> Result<String> {
    let data = StatusLineData::from_slice(raw)?;
    let metrics = data.metrics();
    tracing::debug!(
        total_tokens = metrics.total_tokens,
        cost_usd = metrics.cost_usd,
        compact_rate = metrics.compact_rate_percent,
        branch = ?data.workspace.git_branch,
        "calculated metrics"
    );
    Ok(format_statusline(&data, &metrics, color))
}
