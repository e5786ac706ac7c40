//! Wallet Rating Core
//!
//! Pure, stateless scoring of wallet snapshots. No persistence, no I/O.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────┐     ┌────────────────────┐     ┌──────────────┐
//! │ WalletSnapshot │────►│ WalletRatingEngine │────►│ RatingReport │
//! │ (value object) │     │ (metrics + weights)│     │ (scores +    │
//! └────────────────┘     └────────────────────┘     │  raw + grade)│
//!                                 │                 └──────────────┘
//!                                 ▼
//!                         ┌──────────────┐
//!                         │ Metric trait │
//!                         │ (4 built-in  │
//!                         │  impls)      │
//!                         └──────────────┘
//! ```
//!
//! ## Score Model
//!
//! - Each metric maps a snapshot to a non-negative number
//! - The engine combines metrics into a weighted arithmetic mean (raw score)
//! - The raw score maps to a letter grade: ≥75 S, ≥55 A, ≥35 B, ≥20 C, else D

mod engine;
mod metrics;
mod samples;
mod wallet;

pub use engine::{EngineError, Grade, RatingReport, WalletRatingEngine};
pub use metrics::{
    ActivityRecencyMetric, Metric, NftDiversityMetric, TokenDiversityMetric, TotalUsdValueMetric,
};
pub use samples::build_sample_wallets;
pub use wallet::{NftHolding, PayloadError, TokenHolding, WalletSnapshot};
