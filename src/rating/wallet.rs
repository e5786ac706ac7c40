//! Wallet Snapshot Data Model
//!
//! A snapshot is a value object: holdings and activity facts for one wallet
//! at one point in time. Aggregates are computed on demand, never stored.
//! Snapshots are built either from untrusted JSON payloads (see
//! [`WalletSnapshot::from_value`]) or from the fixed sample set.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// A fungible token position held by a wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenHolding {
    pub symbol: String,
    pub amount: f64,
    pub usd_value: f64,
}

impl TokenHolding {
    pub fn new(symbol: impl Into<String>, amount: f64, usd_value: f64) -> Self {
        Self {
            symbol: symbol.into(),
            amount,
            usd_value,
        }
    }
}

/// A single non-fungible token held by a wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NftHolding {
    pub collection: String,
    pub token_id: String,
    pub estimated_value_usd: f64,
}

impl NftHolding {
    pub fn new(
        collection: impl Into<String>,
        token_id: impl Into<String>,
        estimated_value_usd: f64,
    ) -> Self {
        Self {
            collection: collection.into(),
            token_id: token_id.into(),
            estimated_value_usd,
        }
    }
}

/// Point-in-time view of one wallet's holdings and activity
///
/// No field is mutated after construction; metrics read it concurrently
/// without synchronization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletSnapshot {
    pub address: String,
    pub chain: String,
    #[serde(default)]
    pub tokens: Vec<TokenHolding>,
    #[serde(default)]
    pub nfts: Vec<NftHolding>,
    #[serde(default)]
    pub last_active_days_ago: i64,
    #[serde(default)]
    pub total_tx_count: u64,
}

impl WalletSnapshot {
    /// Sum of USD values across all token holdings
    pub fn total_token_value(&self) -> f64 {
        self.tokens.iter().map(|t| t.usd_value).sum()
    }

    /// Sum of estimated USD values across all NFT holdings
    pub fn total_nft_value(&self) -> f64 {
        self.nfts.iter().map(|n| n.estimated_value_usd).sum()
    }

    /// Tokens plus NFTs
    pub fn total_portfolio_value(&self) -> f64 {
        self.total_token_value() + self.total_nft_value()
    }

    /// Count of unique token symbols, case-insensitive
    pub fn distinct_token_symbols(&self) -> usize {
        self.tokens
            .iter()
            .map(|t| t.symbol.to_uppercase())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Count of unique NFT collection names, case-insensitive
    pub fn distinct_nft_collections(&self) -> usize {
        self.nfts
            .iter()
            .map(|n| n.collection.to_lowercase())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Build a snapshot from an untrusted JSON payload.
    ///
    /// Field mapping:
    /// - `address` (required)
    /// - `chain` (optional, default "Solana")
    /// - `tokens` (optional list; each entry requires `symbol`)
    /// - `nfts` (optional list; each entry requires `collection` and `token_id`)
    /// - `last_active_days_ago`, `total_tx_count` (optional, default 0)
    ///
    /// Numbers may arrive as JSON numbers or numeric strings. Any missing
    /// required field or coercion failure yields a [`PayloadError`] naming
    /// the offending field.
    pub fn from_value(payload: &Value) -> Result<Self, PayloadError> {
        let obj = payload
            .as_object()
            .ok_or_else(|| PayloadError::invalid("payload", "JSON object"))?;

        let address = coerce_string(
            obj.get("address")
                .ok_or_else(|| PayloadError::missing("address"))?,
            "address",
        )?;

        let chain = match obj.get("chain") {
            Some(v) => coerce_string(v, "chain")?,
            None => "Solana".to_string(),
        };

        let mut tokens = Vec::new();
        if let Some(raw_tokens) = obj.get("tokens") {
            let entries = raw_tokens
                .as_array()
                .ok_or_else(|| PayloadError::invalid("tokens", "array"))?;
            for (i, entry) in entries.iter().enumerate() {
                tokens.push(parse_token(entry, i)?);
            }
        }

        let mut nfts = Vec::new();
        if let Some(raw_nfts) = obj.get("nfts") {
            let entries = raw_nfts
                .as_array()
                .ok_or_else(|| PayloadError::invalid("nfts", "array"))?;
            for (i, entry) in entries.iter().enumerate() {
                nfts.push(parse_nft(entry, i)?);
            }
        }

        let last_active_days_ago = match obj.get("last_active_days_ago") {
            Some(v) => coerce_i64(v, "last_active_days_ago")?,
            None => 0,
        };

        let total_tx_count = match obj.get("total_tx_count") {
            Some(v) => coerce_i64(v, "total_tx_count")?.max(0) as u64,
            None => 0,
        };

        Ok(Self {
            address,
            chain,
            tokens,
            nfts,
            last_active_days_ago,
            total_tx_count,
        })
    }
}

fn parse_token(entry: &Value, index: usize) -> Result<TokenHolding, PayloadError> {
    let obj = entry
        .as_object()
        .ok_or_else(|| PayloadError::invalid(format!("tokens[{index}]"), "object"))?;

    let symbol = coerce_string(
        obj.get("symbol")
            .ok_or_else(|| PayloadError::missing(format!("tokens[{index}].symbol")))?,
        format!("tokens[{index}].symbol"),
    )?;

    let amount = match obj.get("amount") {
        Some(v) => coerce_f64(v, format!("tokens[{index}].amount"))?,
        None => 0.0,
    };

    let usd_value = match obj.get("usd_value") {
        Some(v) => coerce_f64(v, format!("tokens[{index}].usd_value"))?,
        None => 0.0,
    };

    Ok(TokenHolding {
        symbol,
        amount,
        usd_value,
    })
}

fn parse_nft(entry: &Value, index: usize) -> Result<NftHolding, PayloadError> {
    let obj = entry
        .as_object()
        .ok_or_else(|| PayloadError::invalid(format!("nfts[{index}]"), "object"))?;

    let collection = coerce_string(
        obj.get("collection")
            .ok_or_else(|| PayloadError::missing(format!("nfts[{index}].collection")))?,
        format!("nfts[{index}].collection"),
    )?;

    let token_id = coerce_string(
        obj.get("token_id")
            .ok_or_else(|| PayloadError::missing(format!("nfts[{index}].token_id")))?,
        format!("nfts[{index}].token_id"),
    )?;

    let estimated_value_usd = match obj.get("estimated_value_usd") {
        Some(v) => coerce_f64(v, format!("nfts[{index}].estimated_value_usd"))?,
        None => 0.0,
    };

    Ok(NftHolding {
        collection,
        token_id,
        estimated_value_usd,
    })
}

fn coerce_string(value: &Value, field: impl Into<String>) -> Result<String, PayloadError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(PayloadError::invalid(field, "string")),
    }
}

fn coerce_f64(value: &Value, field: impl Into<String>) -> Result<f64, PayloadError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| PayloadError::invalid(field, "number")),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| PayloadError::invalid(field, "number")),
        _ => Err(PayloadError::invalid(field, "number")),
    }
}

fn coerce_i64(value: &Value, field: impl Into<String>) -> Result<i64, PayloadError> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                Ok(f.trunc() as i64)
            } else {
                Err(PayloadError::invalid(field, "integer"))
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| PayloadError::invalid(field, "integer")),
        _ => Err(PayloadError::invalid(field, "integer")),
    }
}

/// Error raised while building a snapshot from an untrusted payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// A required field is absent
    MissingField { field: String },
    /// A field is present but cannot be coerced to its expected type
    InvalidField { field: String, expected: &'static str },
}

impl PayloadError {
    fn missing(field: impl Into<String>) -> Self {
        PayloadError::MissingField {
            field: field.into(),
        }
    }

    fn invalid(field: impl Into<String>, expected: &'static str) -> Self {
        PayloadError::InvalidField {
            field: field.into(),
            expected,
        }
    }
}

impl std::fmt::Display for PayloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadError::MissingField { field } => {
                write!(f, "Invalid wallet payload: missing required field '{field}'")
            }
            PayloadError::InvalidField { field, expected } => {
                write!(f, "Invalid wallet payload: field '{field}' is not a valid {expected}")
            }
        }
    }
}

impl std::error::Error for PayloadError {}
