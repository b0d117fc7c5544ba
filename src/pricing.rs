//! # Pricing Module
//!
//! Turns the per-million-token list prices reported for the active model
//! into a session cost.
//!
//! ## Pricing Structure
//!
//! - Input and output tokens are billed at their own rates
//! - Cache creation is billed at the input rate (it is freshly sent context)
//! - Cache reads are billed at 0.1x the input rate

use crate::models::{ModelInfo, TokenUsage};

/// Number of tokens the list prices are quoted for
pub const TOKENS_PER_MTOK: f64 = 1_000_000.0;

/// Fraction of the input rate charged for a cache read
pub const CACHE_READ_DISCOUNT: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pricing {
    pub input_per_mtok: f64,
    pub output_per_mtok: f64,
}

impl Pricing {
    pub fn from_model(model: &ModelInfo) -> Self {
        Self {
            input_per_mtok: model.input_price_per_mtok,
            output_per_mtok: model.output_price_per_mtok,
        }
    }

    pub fn cache_creation_per_mtok(&self) -> f64 {
        self.input_per_mtok
    }

    /// Session cost in USD.
    pub fn cost_usd(&self, usage: &TokenUsage) -> f64 {
        let input_cost = (usage.input_tokens as f64 / TOKENS_PER_MTOK) * self.input_per_mtok;
        let output_cost = (usage.output_tokens as f64 / TOKENS_PER_MTOK) * self.output_per_mtok;
        let cache_creation_cost =
            (usage.cache_creation_tokens as f64 / TOKENS_PER_MTOK) * self.cache_creation_per_mtok();
        // (n / 1M) * input * 0.1, evaluated left to right
        let cache_read_cost = (usage.cache_read_tokens as f64 / TOKENS_PER_MTOK)
            * self.input_per_mtok
            * CACHE_READ_DISCOUNT;

        input_cost + output_cost + cache_creation_cost + cache_read_cost
    }
}
