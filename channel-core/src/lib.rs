//! # PayRail Channel Core
//!
//! Channel-neutral plumbing for third-party payment network integrations:
//! - Request/response/transaction data model with exact-decimal amounts
//! - Signature primitives and key material loading
//! - Template engine wrapper for wire content rendering
//! - Blocking HTTP transport with pooled connections
//! - `Converter`/`Processor` contracts with explicit unsupported dispatch
//!
//! ## Architecture
//!
//! ```text
//! Request ──▶ Converter.write_to ──▶ raw XML ──▶ Cryptor.sign ──▶ signed XML
//!                                                                     │
//!                                                             Transport.post
//!                                                                     │
//! Response ◀── Converter.read_from ◀── Cryptor.verify ◀── response bytes
//! ```
//!
//! Concrete channels (e.g. `channel-unionpay`) implement the converter and
//! cryptor halves; this crate owns everything both halves share.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod converter;
pub mod error;
pub mod processor;
pub mod security;
pub mod template;
pub mod transport;
pub mod types;

pub use converter::Converter;
pub use error::{Error, Result};
pub use processor::Processor;
pub use security::{PrivateKeyKind, PublicKeyKind, SignatureAlgorithm};
pub use transport::{HttpTransport, Transport, TransportConfig};
pub use types::*;

/// Default transport request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Default transport connect timeout (seconds)
pub const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 30;

/// Default bound on idle pooled connections per host
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 8;
