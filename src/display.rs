#[cfg(feature = "colors")]
use owo_colors::{OwoColorize, Style};

use crate::metrics::StatusMetrics;
use crate::status::StatusLineData;
use crate::utils::{format_currency, format_percent, format_tokens};

pub const SEPARATOR: &str = " | ";

pub mod icons {
    pub const MODEL: &str = "🧿";
    pub const FOLDER: &str = "📁";
    pub const GIT_BRANCH: &str = "🌿";
    pub const TOKENS: &str = "🪙";
    pub const COST: &str = "💵";
    pub const COMPACT: &str = "♨️";
}

/// Foreground colors used by the segments. Every tone is rendered dimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

#[cfg(feature = "colors")]
impl Tone {
    fn style(self) -> Style {
        let base = Style::new().dimmed();
        match self {
            Tone::Red => base.red(),
            Tone::Green => base.green(),
            Tone::Yellow => base.yellow(),
            Tone::Blue => base.blue(),
            Tone::Magenta => base.magenta(),
            Tone::Cyan => base.cyan(),
        }
    }
}

/// Warning band for the compact rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLevel {
    /// below 50%
    Safe,
    /// 50% up to (not including) 80%
    Warning,
    /// 80% and above
    Critical,
}

impl RateLevel {
    pub fn from_rate(rate: f64) -> Self {
        if rate < 50.0 {
            RateLevel::Safe
        } else if rate < 80.0 {
            RateLevel::Warning
        } else {
            RateLevel::Critical
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            RateLevel::Safe => Tone::Green,
            RateLevel::Warning => Tone::Yellow,
            RateLevel::Critical => Tone::Red,
        }
    }
}

#[cfg(feature = "colors")]
fn paint(text: &str, tone: Tone, color: bool) -> String {
    if color {
        text.style(tone.style()).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(not(feature = "colors"))]
fn paint(text: &str, _tone: Tone, _color: bool) -> String {
    text.to_string()
}

fn segment(icon: &str, text: &str, tone: Tone, color: bool) -> String {
    paint(&format!("{icon} {text}"), tone, color)
}

/// Build the single status line from already-resolved values.
pub fn format_line(
    model_name: &str,
    dir_name: &str,
    branch: Option<&str>,
    metrics: &StatusMetrics,
    color: bool,
) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(6);
    parts.push(segment(icons::MODEL, model_name, Tone::Magenta, color));
    parts.push(segment(icons::FOLDER, dir_name, Tone::Red, color));
    if let Some(br) = branch {
        parts.push(segment(icons::GIT_BRANCH, br, Tone::Yellow, color));
    }
    parts.push(segment(
        icons::TOKENS,
        &format_tokens(metrics.total_tokens),
        Tone::Cyan,
        color,
    ));
    parts.push(segment(
        icons::COST,
        &format_currency(metrics.cost_usd),
        Tone::Blue,
        color,
    ));
    let rate = metrics.compact_rate_percent;
    parts.push(segment(
        icons::COMPACT,
        &format_percent(rate),
        RateLevel::from_rate(rate).tone(),
        color,
    ));
    parts.join(SEPARATOR)
}

pub fn format_statusline(data: &StatusLineData, metrics: &StatusMetrics, color: bool) -> String {
    format_line(
        &data.model.display_name,
        &data.workspace.dir_name(),
        data.workspace.git_branch.as_deref(),
        metrics,
        color,
    )
}
