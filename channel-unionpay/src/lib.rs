//! # PayRail UnionPay Channel
//!
//! Batch payout connectivity for the GZELINK XML dialect:
//! - Template-rendered request content with derived control sum/count
//! - Fixed-position signature envelope (`SIGNED_MSG`), hex-encoded
//! - Whitelist-driven response decoding into per-item results
//! - Synchronous round-trip processor over the pooled blocking transport
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │              UnionPayProcessor                   │
//! │  encode → sign → POST → decode → verify → parse  │
//! └───────┬───────────────┬───────────────┬──────────┘
//!         │               │               │
//! ┌───────▼─────────┐ ┌───▼───────────┐ ┌─▼──────────┐
//! │UnionPayConverter│ │UnionPayCryptor│ │ Transport  │
//! │ templates + XML │ │ SIGNED_MSG    │ │ (pooled)   │
//! └─────────────────┘ └───────────────┘ └────────────┘
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod converter;
pub mod cryptor;
pub mod metrics;
pub mod processor;
pub mod wire;

pub use config::UnionPayConfig;
pub use converter::{UnionPayConverter, BATCH_TRANSACTION_SUCCESS_CODES};
pub use cryptor::UnionPayCryptor;
pub use processor::UnionPayProcessor;
