//! Wallet Recognition Protocol - Layer 1
//!
//! Computes a composite reputation score for a cryptocurrency wallet from a
//! snapshot of its holdings and activity, and exposes the computation over a
//! small HTTP API.
//!
//! ## Module Structure
//!
//! ```text
//! src/
//! ├── lib.rs         - Crate root with re-exports
//! ├── main.rs        - CLI entrypoint (serve / demo)
//! ├── config.rs      - Environment-driven configuration
//! ├── rating/        - Scoring core
//! │   ├── wallet.rs     - Wallet snapshot model & payload parsing
//! │   ├── metrics.rs    - Metric trait + 4 built-in metrics
//! │   ├── engine.rs     - Rating engine, report, grading
//! │   └── samples.rs    - Fixed demonstration wallets
//! └── api/           - HTTP endpoints (axum)
//!     ├── score.rs   - Scoring API (score, samples, health)
//!     └── web.rs     - In-browser scoring form
//! ```
//!
//! The core is purely functional: once a [`WalletSnapshot`] is constructed,
//! scoring is total and side-effect free, and a shared engine instance
//! serves concurrent requests without synchronization.

pub mod api;
pub mod config;
pub mod rating;

// Re-export main types for convenience
pub use config::WrpConfig;
pub use rating::{
    build_sample_wallets, ActivityRecencyMetric, EngineError, Grade, Metric, NftDiversityMetric,
    NftHolding, PayloadError, RatingReport, TokenDiversityMetric, TokenHolding,
    TotalUsdValueMetric, WalletRatingEngine, WalletSnapshot,
};
