//! HTTP API adapters around the rating core
//!
//! Thin axum handlers: parse the payload, call the engine, translate
//! `PayloadError` into a 400 response. No scoring logic lives here.

pub mod score;
pub mod web;

pub use score::{create_api_router, ScoreApiState};
