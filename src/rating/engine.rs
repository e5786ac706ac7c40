//! Wallet Rating Engine
//!
//! Combines metric outputs into a weighted average and maps the result to a
//! letter grade. The engine is read-only after construction, so one shared
//! instance serves concurrent scoring requests without locks.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::rating::metrics::{
    ActivityRecencyMetric, Metric, NftDiversityMetric, TokenDiversityMetric, TotalUsdValueMetric,
};
use crate::rating::wallet::WalletSnapshot;

/// Letter bucket derived from the raw score via fixed thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
}

impl Grade {
    /// Piecewise threshold mapping, top-down, first match wins.
    /// Boundaries are inclusive on the lower bound of each band.
    pub fn from_raw(raw_score: f64) -> Self {
        if raw_score >= 75.0 {
            Grade::S
        } else if raw_score >= 55.0 {
            Grade::A
        } else if raw_score >= 35.0 {
            Grade::B
        } else if raw_score >= 20.0 {
            Grade::C
        } else {
            Grade::D
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        };
        write!(f, "{letter}")
    }
}

/// Full scoring result for one wallet
///
/// A dedicated structure rather than reserved keys mixed into the metric
/// map, so metric names can never collide with the aggregate fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingReport {
    /// One entry per engine metric, keyed by metric name
    pub metric_scores: BTreeMap<String, f64>,
    /// Weighted arithmetic mean of all metric scores
    pub raw_score: f64,
    pub grade: Grade,
}

/// Engine configuration errors, detected at construction
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Two held metrics share a name; their scores would overwrite each other
    DuplicateMetricName { name: String },
    /// A negative weight would silently skew the weighted mean
    NegativeWeight { name: String, weight: f64 },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::DuplicateMetricName { name } => {
                write!(f, "Duplicate metric name '{name}' in engine configuration")
            }
            EngineError::NegativeWeight { name, weight } => {
                write!(f, "Negative weight {weight} for metric '{name}'")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Evaluates an ordered collection of metrics and grades the combined score
pub struct WalletRatingEngine {
    metrics: Vec<Box<dyn Metric>>,
    weights: HashMap<String, f64>,
}

impl WalletRatingEngine {
    /// Build an engine from an explicit metric collection and weight table.
    ///
    /// Rejects duplicate metric names and negative weights; either would
    /// produce a silently skewed score. Metric names absent from the weight
    /// table implicitly get weight 1.0.
    pub fn new(
        metrics: Vec<Box<dyn Metric>>,
        weights: HashMap<String, f64>,
    ) -> Result<Self, EngineError> {
        let mut seen = HashSet::new();
        for metric in &metrics {
            if !seen.insert(metric.name()) {
                return Err(EngineError::DuplicateMetricName {
                    name: metric.name().to_string(),
                });
            }
        }
        for (name, weight) in &weights {
            if *weight < 0.0 {
                return Err(EngineError::NegativeWeight {
                    name: name.clone(),
                    weight: *weight,
                });
            }
        }
        Ok(Self { metrics, weights })
    }

    /// Default engine: the four standard metrics at their default parameters
    /// with the default weight table.
    pub fn with_defaults() -> Self {
        let metrics: Vec<Box<dyn Metric>> = vec![
            Box::new(TotalUsdValueMetric::default()),
            Box::new(TokenDiversityMetric::default()),
            Box::new(NftDiversityMetric::default()),
            Box::new(ActivityRecencyMetric::default()),
        ];
        // Statically distinct names and non-negative weights
        Self {
            metrics,
            weights: Self::default_weights(),
        }
    }

    /// Default weight table, built fresh per engine instance
    pub fn default_weights() -> HashMap<String, f64> {
        HashMap::from([
            ("total_usd_value".to_string(), 1.0),
            ("token_diversity".to_string(), 0.8),
            ("nft_diversity".to_string(), 0.8),
            ("activity_recency".to_string(), 1.0),
        ])
    }

    /// Names of the held metrics, in evaluation order
    pub fn metric_names(&self) -> Vec<&'static str> {
        self.metrics.iter().map(|m| m.name()).collect()
    }

    /// Evaluate every held metric against the wallet, one entry per metric
    pub fn compute_metric_scores(&self, wallet: &WalletSnapshot) -> BTreeMap<String, f64> {
        self.metrics
            .iter()
            .map(|metric| (metric.name().to_string(), metric.evaluate(wallet)))
            .collect()
    }

    /// Weighted arithmetic mean of the metric scores.
    ///
    /// Order-independent; if the total weight is zero (no metrics, or all
    /// weights zero) the raw score is 0.
    pub fn compute_raw_score(&self, metric_scores: &BTreeMap<String, f64>) -> f64 {
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        for (name, score) in metric_scores {
            let weight = self.weights.get(name).copied().unwrap_or(1.0);
            weighted_sum += score * weight;
            weight_total += weight;
        }
        if weight_total > 0.0 {
            weighted_sum / weight_total
        } else {
            0.0
        }
    }

    /// Score a wallet: metric breakdown, weighted raw score, and grade
    pub fn score_wallet(&self, wallet: &WalletSnapshot) -> RatingReport {
        let metric_scores = self.compute_metric_scores(wallet);
        let raw_score = self.compute_raw_score(&metric_scores);
        RatingReport {
            metric_scores,
            raw_score,
            grade: Grade::from_raw(raw_score),
        }
    }
}
