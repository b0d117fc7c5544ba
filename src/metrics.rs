//! Derived session metrics: token total, cost and compact rate.

use crate::models::{ModelInfo, TokenUsage};
use crate::pricing::Pricing;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusMetrics {
    pub total_tokens: u64,
    pub cost_usd: f64,
    /// Always within `[0, 100]`
    pub compact_rate_percent: f64,
}

impl StatusMetrics {
    pub fn calculate(usage: &TokenUsage, model: &ModelInfo) -> Self {
        Self {
            total_tokens: usage.total_tokens(),
            cost_usd: Pricing::from_model(model).cost_usd(usage),
            compact_rate_percent: usage.compact_rate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(input: f64, output: f64) -> ModelInfo {
        ModelInfo {
            display_name: "X".to_string(),
            input_price_per_mtok: input,
            output_price_per_mtok: output,
        }
    }

    fn usage(input: u64, output: u64, read: u64, creation: u64) -> TokenUsage {
        TokenUsage {
            input_tokens: input,
            output_tokens: output,
            cache_read_tokens: read,
            cache_creation_tokens: creation,
        }
    }

    #[test]
    fn test_end_to_end_example() {
        let m = StatusMetrics::calculate(&usage(1_000_000, 0, 0, 0), &model(3.0, 15.0));
        assert_eq!(m.total_tokens, 1_000_000);
        assert_eq!(m.cost_usd, 3.0);
        assert_eq!(m.compact_rate_percent, 0.0);
    }

    #[test]
    fn test_total_is_order_independent() {
        let a = StatusMetrics::calculate(&usage(1, 2, 3, 4), &model(1.0, 1.0));
        let b = StatusMetrics::calculate(&usage(4, 3, 2, 1), &model(1.0, 1.0));
        assert_eq!(a.total_tokens, 10);
        assert_eq!(a.total_tokens, b.total_tokens);
    }

    #[test]
    fn test_compact_rate_zero_denominator() {
        let m = StatusMetrics::calculate(&usage(0, 1_000, 0, 0), &model(3.0, 15.0));
        assert_eq!(m.compact_rate_percent, 0.0);
        assert!(!m.compact_rate_percent.is_nan());
    }

    #[test]
    fn test_compact_rate_stays_in_range() {
        let cases = [
            usage(0, 0, 1, 0),
            usage(1, 0, 0, 0),
            usage(0, 0, 0, 1),
            usage(10, 0, u32::MAX as u64, 10),
            usage(u32::MAX as u64, 7, 1, u32::MAX as u64),
        ];
        for u in cases {
            let rate = StatusMetrics::calculate(&u, &model(0.0, 0.0)).compact_rate_percent;
            assert!((0.0..=100.0).contains(&rate), "rate {rate} out of range for {u:?}");
        }
        let reads_only = StatusMetrics::calculate(&usage(0, 0, 500, 0), &model(0.0, 0.0));
        assert_eq!(reads_only.compact_rate_percent, 0.0);
    }

    #[test]
    fn test_cost_monotonic_in_each_counter() {
        let pricing = model(3.0, 15.0);
        let base = usage(1_000, 1_000, 1_000, 1_000);
        let base_cost = StatusMetrics::calculate(&base, &pricing).cost_usd;
        let bumped = [
            usage(2_000, 1_000, 1_000, 1_000),
            usage(1_000, 2_000, 1_000, 1_000),
            usage(1_000, 1_000, 2_000, 1_000),
            usage(1_000, 1_000, 1_000, 2_000),
        ];
        for u in bumped {
            assert!(StatusMetrics::calculate(&u, &pricing).cost_usd >= base_cost);
        }
    }

    #[test]
    fn test_calculation_is_repeatable() {
        let u = usage(12_345, 6_789, 101_112, 13_141);
        let m = model(3.0, 15.0);
        let first = StatusMetrics::calculate(&u, &m);
        let second = StatusMetrics::calculate(&u, &m);
        assert_eq!(first.cost_usd.to_bits(), second.cost_usd.to_bits());
        assert_eq!(
            first.compact_rate_percent.to_bits(),
            second.compact_rate_percent.to_bits()
        );
        assert_eq!(first, second);
    }
}
