use serde::Deserialize;

fn unknown_model() -> String {
    "Unknown".to_string()
}

/// Active model and its list prices (USD per million tokens)
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ModelInfo {
    #[serde(default = "unknown_model")]
    pub display_name: String,
    #[serde(default)]
    pub input_price_per_mtok: f64,
    #[serde(default)]
    pub output_price_per_mtok: f64,
}

impl Default for ModelInfo {
    fn default() -> Self {
        Self {
            display_name: unknown_model(),
            input_price_per_mtok: 0.0,
            output_price_per_mtok: 0.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceInput {
    #[serde(default)]
    pub current_dir: Option<String>,
}

/// Session token counters. Missing counters are zero.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub cache_read_tokens: u64,
    #[serde(default)]
    pub cache_creation_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens
            .saturating_add(self.output_tokens)
            .saturating_add(self.cache_read_tokens)
            .saturating_add(self.cache_creation_tokens)
    }

    /// Share of input-side tokens served from cache, in percent.
    ///
    /// Output tokens are not part of the baseline: caching only applies to
    /// context that is sent to the model. With no fresh input (input plus
    /// cache creation is zero) the rate is 0, even if cache reads exist.
    pub fn compact_rate(&self) -> f64 {
        let fresh_input = self.input_tokens as f64 + self.cache_creation_tokens as f64;
        if fresh_input == 0.0 {
            return 0.0;
        }
        (self.cache_read_tokens as f64 / (fresh_input + self.cache_read_tokens as f64)) * 100.0
    }
}

/// The JSON document written to our stdin by the host
#[derive(Deserialize, Debug, Clone, Default)]
pub struct StatusInput {
    #[serde(default)]
    pub model: ModelInfo,
    #[serde(default)]
    pub workspace: WorkspaceInput,
    #[serde(default)]
    pub token_usage: TokenUsage,
}
