//! Fixed demonstration wallets
//!
//! Four illustrative snapshots spanning different chains, portfolio sizes,
//! and activity levels. Used by the demo CLI and the `/samples` endpoint;
//! not part of the scoring contract.

use crate::rating::wallet::{NftHolding, TokenHolding, WalletSnapshot};

pub fn build_sample_wallets() -> Vec<WalletSnapshot> {
    vec![
        WalletSnapshot {
            address: "So1anaDemo1111111111111111111111111111111".to_string(),
            chain: "Solana".to_string(),
            tokens: vec![
                TokenHolding::new("SOL", 10.0, 2200.0),
                TokenHolding::new("USDT", 1000.0, 1000.0),
                TokenHolding::new("BONK", 1_000_000.0, 500.0),
                TokenHolding::new("JTO", 700.0, 900.0),
            ],
            nfts: vec![
                NftHolding::new("Degods", "5", 2500.0),
                NftHolding::new("TaiyoRobots", "42", 600.0),
                NftHolding::new("OkayBears", "300", 300.0),
                NftHolding::new("Tensorian", "1", 1500.0),
            ],
            last_active_days_ago: 7,
            total_tx_count: 520,
        },
        WalletSnapshot {
            address: "0xAAA111".to_string(),
            chain: "Ethereum".to_string(),
            tokens: vec![
                TokenHolding::new("ETH", 2.5, 4500.0),
                TokenHolding::new("USDC", 3000.0, 3000.0),
                TokenHolding::new("OP", 1500.0, 2500.0),
            ],
            nfts: vec![
                NftHolding::new("CoolCats", "1234", 1200.0),
                NftHolding::new("CoolCats", "5678", 800.0),
                NftHolding::new("Nouns", "77", 9000.0),
            ],
            last_active_days_ago: 2,
            total_tx_count: 420,
        },
        WalletSnapshot {
            address: "0xBBB222".to_string(),
            chain: "Polygon".to_string(),
            tokens: vec![
                TokenHolding::new("MATIC", 5000.0, 3500.0),
                TokenHolding::new("USDC", 2000.0, 2000.0),
            ],
            nfts: vec![NftHolding::new("PolygonPunks", "88", 150.0)],
            last_active_days_ago: 30,
            total_tx_count: 180,
        },
        WalletSnapshot {
            address: "0xDDD444".to_string(),
            chain: "Ethereum".to_string(),
            tokens: vec![TokenHolding::new("ETH", 0.4, 720.0)],
            nfts: vec![],
            last_active_days_ago: 90,
            total_tx_count: 12,
        },
    ]
}
