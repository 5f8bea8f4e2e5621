//! Error types for channel operations

use crate::types::RequestKind;
use thiserror::Error;

/// Result type for channel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Channel errors
///
/// Every failure inside a round trip is wrapped into one of these kinds at
/// its origin, carrying the cause. None of them are retried internally;
/// retry is a caller-level policy.
#[derive(Error, Debug)]
pub enum Error {
    /// Converter invoked for a request kind the channel does not implement
    #[error("unsupported request kind: {kind}")]
    Unsupported {
        /// Request kind
        kind: RequestKind,
    },

    /// Processor operation the channel does not implement
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// Template rendering error
    #[error("failed to render template '{name}'")]
    Template {
        /// Template name
        name: String,
        /// Engine error
        #[source]
        source: tera::Error,
    },

    /// Connection or I/O error from the transport step
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-success HTTP status
    #[error("endpoint returned HTTP {status}: {body}")]
    Endpoint {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// No signature element found in the inbound content
    #[error("no signature found in content")]
    MissingSignature,

    /// Signature located but cryptographic validation did not confirm it
    #[error("invalid signature found in content")]
    SignatureInvalid,

    /// Key decoding or loading failed
    #[error("key material error: {0}")]
    KeyMaterial(String),

    /// Malformed wire content
    #[error("XML error: {0}")]
    Xml(String),

    /// Input rejected by protocol-level validation
    #[error("validation error: {0}")]
    Validation(String),

    /// Text not representable in the declared wire encoding
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}
