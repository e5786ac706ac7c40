use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::str::FromStr;

use crate::rating::{
    ActivityRecencyMetric, Metric, NftDiversityMetric, TokenDiversityMetric, TotalUsdValueMetric,
    WalletRatingEngine,
};

/// Configuration for the WRP rating service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrpConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Rating engine tuning
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
}

/// Tunable parameters for the rating engine and its metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Multiplier applied to the log-scaled portfolio value
    pub value_multiplier: f64,
    /// Points per distinct token symbol
    pub token_per_score: f64,
    /// Saturation cap for token diversity
    pub token_cap: f64,
    /// Points per distinct NFT collection
    pub nft_per_score: f64,
    /// Saturation cap for NFT diversity
    pub nft_cap: f64,
    /// Recency score for a wallet active today
    pub recency_max_score: f64,
    /// Days of inactivity after which the recency score halves
    pub recency_half_life_days: f64,
    /// Weight table, keyed by metric name
    pub weights: HashMap<String, f64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            value_multiplier: 10.0,
            token_per_score: 5.0,
            token_cap: 50.0,
            nft_per_score: 8.0,
            nft_cap: 60.0,
            recency_max_score: 50.0,
            recency_half_life_days: 14.0,
            weights: WalletRatingEngine::default_weights(),
        }
    }
}

impl EngineConfig {
    /// Build a validated engine from this configuration
    pub fn build_engine(&self) -> Result<WalletRatingEngine> {
        let metrics: Vec<Box<dyn Metric>> = vec![
            Box::new(TotalUsdValueMetric {
                multiplier: self.value_multiplier,
            }),
            Box::new(TokenDiversityMetric {
                per_token_score: self.token_per_score,
                cap: self.token_cap,
            }),
            Box::new(NftDiversityMetric {
                per_collection_score: self.nft_per_score,
                cap: self.nft_cap,
            }),
            Box::new(ActivityRecencyMetric {
                max_score: self.recency_max_score,
                half_life_days: self.recency_half_life_days,
            }),
        ];

        WalletRatingEngine::new(metrics, self.weights.clone())
            .context("Invalid rating engine configuration")
    }
}

impl Default for WrpConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            engine: EngineConfig::default(),
        }
    }
}

impl WrpConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults. A set-but-unparsable variable is a startup error, not a
    /// silent fallback.
    pub fn from_env() -> Result<Self> {
        let defaults = WrpConfig::default();

        let server = ServerConfig {
            host: env::var("WRP_HOST").unwrap_or(defaults.server.host),
            port: env_or("WRP_PORT", defaults.server.port)?,
        };

        let logging = LoggingConfig {
            level: env::var("WRP_LOG_LEVEL").unwrap_or(defaults.logging.level),
        };

        let mut weights = defaults.engine.weights.clone();
        for (var, name) in [
            ("WRP_WEIGHT_TOTAL_USD_VALUE", "total_usd_value"),
            ("WRP_WEIGHT_TOKEN_DIVERSITY", "token_diversity"),
            ("WRP_WEIGHT_NFT_DIVERSITY", "nft_diversity"),
            ("WRP_WEIGHT_ACTIVITY_RECENCY", "activity_recency"),
        ] {
            if let Some(weight) = env_opt::<f64>(var)? {
                weights.insert(name.to_string(), weight);
            }
        }

        let engine = EngineConfig {
            value_multiplier: env_or("WRP_VALUE_MULTIPLIER", defaults.engine.value_multiplier)?,
            token_per_score: env_or("WRP_TOKEN_PER_SCORE", defaults.engine.token_per_score)?,
            token_cap: env_or("WRP_TOKEN_CAP", defaults.engine.token_cap)?,
            nft_per_score: env_or("WRP_NFT_PER_SCORE", defaults.engine.nft_per_score)?,
            nft_cap: env_or("WRP_NFT_CAP", defaults.engine.nft_cap)?,
            recency_max_score: env_or("WRP_RECENCY_MAX", defaults.engine.recency_max_score)?,
            recency_half_life_days: env_or(
                "WRP_RECENCY_HALF_LIFE",
                defaults.engine.recency_half_life_days,
            )?,
            weights,
        };

        Ok(Self {
            server,
            logging,
            engine,
        })
    }
}

/// Read and parse an environment variable, falling back to a default
fn env_or<T>(var: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(env_opt(var)?.unwrap_or(default))
}

/// Read and parse an optional environment variable
fn env_opt<T>(var: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(var) {
        Ok(raw) => {
            let parsed = raw
                .trim()
                .parse::<T>()
                .with_context(|| format!("Invalid value for {var}: '{raw}'"))?;
            Ok(Some(parsed))
        }
        Err(_) => Ok(None),
    }
}
