//! Scoring Metrics
//!
//! Each metric is a named pure function from a wallet snapshot to a score.
//! The engine is agnostic to which concrete metrics it holds; anything
//! implementing [`Metric`] qualifies.

use crate::rating::wallet::WalletSnapshot;

/// A named, pure scoring function over a wallet snapshot
///
/// `evaluate` must be deterministic and total: it cannot fail or block for
/// any constructible snapshot. Names are used as weight-table keys and as
/// output map keys, so they must be unique within an engine.
pub trait Metric: Send + Sync {
    fn name(&self) -> &'static str;
    fn evaluate(&self, wallet: &WalletSnapshot) -> f64;
}

/// Scores by log-scaled total USD value to avoid runaway dominance
///
/// Log-scaling gives diminishing marginal score as value grows, so a single
/// whale wallet cannot saturate the composite.
#[derive(Debug, Clone)]
pub struct TotalUsdValueMetric {
    pub multiplier: f64,
}

impl Default for TotalUsdValueMetric {
    fn default() -> Self {
        Self { multiplier: 10.0 }
    }
}

impl Metric for TotalUsdValueMetric {
    fn name(&self) -> &'static str {
        "total_usd_value"
    }

    fn evaluate(&self, wallet: &WalletSnapshot) -> f64 {
        // Clamp before the log; aggregate values are non-negative by
        // construction but a negative input must not produce NaN.
        let value = wallet.total_portfolio_value().max(0.0);
        (1.0 + value).log10() * self.multiplier
    }
}

/// Rewards holding many distinct token symbols, saturating at a cap
#[derive(Debug, Clone)]
pub struct TokenDiversityMetric {
    pub per_token_score: f64,
    pub cap: f64,
}

impl Default for TokenDiversityMetric {
    fn default() -> Self {
        Self {
            per_token_score: 5.0,
            cap: 50.0,
        }
    }
}

impl Metric for TokenDiversityMetric {
    fn name(&self) -> &'static str {
        "token_diversity"
    }

    fn evaluate(&self, wallet: &WalletSnapshot) -> f64 {
        let score = wallet.distinct_token_symbols() as f64 * self.per_token_score;
        score.min(self.cap)
    }
}

/// Rewards holding NFTs from many distinct collections, saturating at a cap
///
/// Tuned separately from token diversity since collection counts behave
/// differently from token listings.
#[derive(Debug, Clone)]
pub struct NftDiversityMetric {
    pub per_collection_score: f64,
    pub cap: f64,
}

impl Default for NftDiversityMetric {
    fn default() -> Self {
        Self {
            per_collection_score: 8.0,
            cap: 60.0,
        }
    }
}

impl Metric for NftDiversityMetric {
    fn name(&self) -> &'static str {
        "nft_diversity"
    }

    fn evaluate(&self, wallet: &WalletSnapshot) -> f64 {
        let score = wallet.distinct_nft_collections() as f64 * self.per_collection_score;
        score.min(self.cap)
    }
}

/// Higher score for recent activity; decays exponentially with days inactive
///
/// A wallet active today scores `max_score`; the score halves every
/// `half_life_days` of inactivity. Negative day counts are treated as
/// "active now".
#[derive(Debug, Clone)]
pub struct ActivityRecencyMetric {
    pub max_score: f64,
    pub half_life_days: f64,
}

impl Default for ActivityRecencyMetric {
    fn default() -> Self {
        Self {
            max_score: 50.0,
            half_life_days: 14.0,
        }
    }
}

impl Metric for ActivityRecencyMetric {
    fn name(&self) -> &'static str {
        "activity_recency"
    }

    fn evaluate(&self, wallet: &WalletSnapshot) -> f64 {
        let days = wallet.last_active_days_ago.max(0) as f64;
        let decay_factor = 0.5_f64.powf(days / self.half_life_days);
        self.max_score * decay_factor
    }
}
