//! Integration tests for the WRP rating service
//!
//! These tests verify end-to-end functionality: wallet construction from
//! untrusted payloads, metric evaluation, score combination and grading,
//! and the HTTP API surface.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use wrp_rating::api::{create_api_router, ScoreApiState};
use wrp_rating::{
    build_sample_wallets, Grade, NftHolding, TokenHolding, WalletRatingEngine, WalletSnapshot,
};

// ============================================================================
// Test Helpers
// ============================================================================

/// Create a test wallet with configurable holdings and activity
fn create_test_wallet(
    tokens: Vec<TokenHolding>,
    nfts: Vec<NftHolding>,
    last_active_days_ago: i64,
) -> WalletSnapshot {
    WalletSnapshot {
        address: "TestWallet1111111111111111111111111111111".to_string(),
        chain: "Solana".to_string(),
        tokens,
        nfts,
        last_active_days_ago,
        total_tx_count: 100,
    }
}

/// Build the API router backed by a default engine
fn create_test_app() -> axum::Router {
    create_api_router(ScoreApiState {
        engine: Arc::new(WalletRatingEngine::with_defaults()),
    })
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ============================================================================
// Engine Scoring
// ============================================================================

mod engine_scoring {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        // Two tokens worth $3200, no NFTs, active today
        let engine = WalletRatingEngine::with_defaults();
        let wallet = create_test_wallet(
            vec![
                TokenHolding::new("SOL", 10.0, 2200.0),
                TokenHolding::new("USDT", 1000.0, 1000.0),
            ],
            vec![],
            0,
        );

        let report = engine.score_wallet(&wallet);

        assert!((report.metric_scores["total_usd_value"] - 35.05).abs() < 0.01);
        assert_eq!(report.metric_scores["token_diversity"], 10.0);
        assert_eq!(report.metric_scores["nft_diversity"], 0.0);
        assert_eq!(report.metric_scores["activity_recency"], 50.0);
        assert!((report.raw_score - 25.85).abs() < 0.05);
        assert_eq!(report.grade, Grade::C);
    }

    #[test]
    fn test_empty_wallet_grades_d() {
        let engine = WalletRatingEngine::with_defaults();
        let wallet = create_test_wallet(vec![], vec![], 365);

        let report = engine.score_wallet(&wallet);

        assert_eq!(report.metric_scores["total_usd_value"], 0.0);
        assert_eq!(report.metric_scores["token_diversity"], 0.0);
        assert_eq!(report.metric_scores["nft_diversity"], 0.0);
        assert_eq!(report.grade, Grade::D);
    }

    #[test]
    fn test_diversity_scores_respect_caps() {
        let engine = WalletRatingEngine::with_defaults();
        let tokens: Vec<TokenHolding> = (0..100)
            .map(|i| TokenHolding::new(format!("SPAM{i}"), 1.0, 0.01))
            .collect();
        let nfts: Vec<NftHolding> = (0..100)
            .map(|i| NftHolding::new(format!("Mint{i}"), i.to_string(), 0.01))
            .collect();

        let report = engine.score_wallet(&create_test_wallet(tokens, nfts, 0));

        assert_eq!(report.metric_scores["token_diversity"], 50.0);
        assert_eq!(report.metric_scores["nft_diversity"], 60.0);
    }

    #[test]
    fn test_all_scores_finite_non_negative_for_samples() {
        let engine = WalletRatingEngine::with_defaults();
        for wallet in build_sample_wallets() {
            let report = engine.score_wallet(&wallet);
            assert_eq!(report.metric_scores.len(), 4);
            for (name, score) in &report.metric_scores {
                assert!(score.is_finite(), "{name} not finite for {}", wallet.address);
                assert!(*score >= 0.0, "{name} negative for {}", wallet.address);
            }
            assert!(report.raw_score.is_finite() && report.raw_score >= 0.0);
        }
    }

    #[test]
    fn test_metric_evaluation_is_deterministic() {
        let engine = WalletRatingEngine::with_defaults();
        let wallets = build_sample_wallets();
        let wallet = &wallets[0];
        assert_eq!(engine.score_wallet(wallet), engine.score_wallet(wallet));
    }
}

// ============================================================================
// Payload Parsing
// ============================================================================

mod payload_parsing {
    use super::*;

    #[test]
    fn test_numeric_strings_coerced() {
        let payload = json!({
            "address": "w",
            "tokens": [{ "symbol": "SOL", "amount": "12.5", "usd_value": "2600" }],
            "last_active_days_ago": "3",
            "total_tx_count": "120"
        });

        let wallet = WalletSnapshot::from_value(&payload).unwrap();
        assert_eq!(wallet.tokens[0].amount, 12.5);
        assert_eq!(wallet.tokens[0].usd_value, 2600.0);
        assert_eq!(wallet.last_active_days_ago, 3);
        assert_eq!(wallet.total_tx_count, 120);
    }

    #[test]
    fn test_error_names_offending_field() {
        let payload = json!({
            "address": "w",
            "nfts": [
                { "collection": "Degods", "token_id": "1" },
                { "collection": "Degods", "token_id": "2", "estimated_value_usd": [] }
            ]
        });

        let err = WalletSnapshot::from_value(&payload).unwrap_err();
        assert!(err.to_string().contains("nfts[1].estimated_value_usd"));
    }

    #[test]
    fn test_non_object_payload_rejected() {
        assert!(WalletSnapshot::from_value(&json!([1, 2, 3])).is_err());
        assert!(WalletSnapshot::from_value(&json!("wallet")).is_err());
    }

    #[test]
    fn test_round_trip_rescoring_is_identical() {
        let engine = WalletRatingEngine::with_defaults();
        for wallet in build_sample_wallets() {
            let serialized = serde_json::to_value(&wallet).unwrap();
            let reparsed = WalletSnapshot::from_value(&serialized).unwrap();
            assert_eq!(
                engine.score_wallet(&wallet).metric_scores,
                engine.score_wallet(&reparsed).metric_scores,
                "round-trip diverged for {}",
                wallet.address
            );
        }
    }
}

// ============================================================================
// HTTP API
// ============================================================================

mod api {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_index_serves_scoring_form() {
        let app = create_test_app();
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8_lossy(&bytes);
        assert!(html.contains("Wallet Recognition Protocol"));
        assert!(html.contains("/score"));
    }

    #[tokio::test]
    async fn test_score_valid_payload() {
        let app = create_test_app();
        let payload = json!({
            "address": "4Nd1mY7R5",
            "chain": "Solana",
            "tokens": [
                { "symbol": "SOL", "amount": 10, "usd_value": 2200 },
                { "symbol": "USDT", "amount": 1000, "usd_value": 1000 }
            ],
            "last_active_days_ago": 0
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/score")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["address"], "4Nd1mY7R5");
        assert_eq!(body["chain"], "Solana");
        assert_eq!(body["report"]["grade"], "C");
        assert_eq!(body["report"]["metric_scores"]["activity_recency"], 50.0);
    }

    #[tokio::test]
    async fn test_score_missing_address_is_400() {
        let app = create_test_app();
        let payload = json!({ "chain": "Solana" });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/score")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("address"));
    }

    #[tokio::test]
    async fn test_samples_endpoint_scores_four_wallets() {
        let app = create_test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/samples")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        let samples = body.as_array().unwrap();
        assert_eq!(samples.len(), 4);
        for sample in samples {
            assert!(sample["wallet"]["address"].is_string());
            assert!(sample["report"]["raw_score"].is_number());
            assert!(sample["report"]["grade"].is_string());
        }
    }
}
