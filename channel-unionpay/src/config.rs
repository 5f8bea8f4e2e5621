//! Channel configuration

use crate::converter::UnionPayConverter;
use crate::cryptor::UnionPayCryptor;
use crate::processor::UnionPayProcessor;
use channel_core::{
    Credentials, Endpoints, Error, HttpTransport, Request, RequestPayload, Result,
    TransportConfig, WireEncoding,
};
use serde::Deserialize;

/// Deployment configuration for one channel tenant
///
/// Credentials live here rather than in global state, so one process can
/// carry a config (and therefore requests) per principal.
#[derive(Debug, Clone, Deserialize)]
pub struct UnionPayConfig {
    /// Channel endpoint URLs
    pub endpoints: Endpoints,
    /// Credential and key material
    pub credentials: Credentials,
    /// Wire encoding; this channel speaks GBK unless configured otherwise
    #[serde(default = "default_encoding")]
    pub encoding: WireEncoding,
    /// Transport tuning
    #[serde(default)]
    pub transport: TransportConfig,
}

fn default_encoding() -> WireEncoding {
    WireEncoding::Gbk
}

impl UnionPayConfig {
    /// Parse a configuration from TOML
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Build a request carrying this configuration's endpoints and credentials
    pub fn request(&self, payload: RequestPayload) -> Request {
        Request::new(
            self.endpoints.clone(),
            self.credentials.clone(),
            self.encoding,
            payload,
        )
    }

    /// Build a ready processor over a pooled HTTP transport
    pub fn processor(&self) -> Result<UnionPayProcessor<HttpTransport>> {
        Ok(UnionPayProcessor::new(
            HttpTransport::new(&self.transport)?,
            UnionPayConverter::new()?,
            UnionPayCryptor::new(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
        [endpoints]
        base_url = "https://channel.example/gateway"
        query_url = "https://channel.example/query"

        [credentials]
        merchant_no = "898000000000001"
        private_key = "AAAA"
        private_key_kind = "pkcs8"
        public_key = "AAAA"
        public_key_kind = "spki"
        signature_algorithm = "ed25519"
    "#;

    #[test]
    fn test_parse_with_channel_defaults() {
        let config = UnionPayConfig::from_toml(CONFIG).unwrap();
        assert_eq!(config.endpoints.base_url, "https://channel.example/gateway");
        assert_eq!(
            config.endpoints.query_url.as_deref(),
            Some("https://channel.example/query")
        );
        assert_eq!(config.credentials.merchant_no, "898000000000001");
        // Channel defaults: GBK wire encoding, stock transport tuning
        assert_eq!(config.encoding, WireEncoding::Gbk);
        assert_eq!(config.transport.timeout_seconds, 30);
        assert!(!config.transport.accept_invalid_certs);
    }

    #[test]
    fn test_parse_with_overrides() {
        let content = r#"
            encoding = "utf8"

            [endpoints]
            base_url = "https://channel.example/gateway"

            [credentials]
            merchant_no = "898000000000001"
            private_key = "AAAA"
            private_key_kind = "encrypted-pkcs8"
            private_key_password = "123456"
            public_key = "AAAA"
            public_key_kind = "raw"
            signature_algorithm = "ecdsa-k256"

            [transport]
            timeout_seconds = 5
        "#;
        let config = UnionPayConfig::from_toml(content).unwrap();
        assert_eq!(config.encoding, WireEncoding::Utf8);
        assert_eq!(config.transport.timeout_seconds, 5);
        assert_eq!(
            config.credentials.private_key_password.as_deref(),
            Some("123456")
        );
    }

    #[test]
    fn test_reject_malformed_config() {
        assert!(matches!(
            UnionPayConfig::from_toml("not toml at all ["),
            Err(Error::Config(_))
        ));
        // Unknown signature algorithm
        let content = CONFIG.replace("ed25519", "rsa-sha1");
        assert!(matches!(
            UnionPayConfig::from_toml(&content),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_request_carries_config_material() {
        let config = UnionPayConfig::from_toml(CONFIG).unwrap();
        let request = config.request(RequestPayload::TransactionQuery(
            channel_core::TransactionQuery {
                order_no: "20181026001".to_string(),
                serial_no: "1".to_string(),
            },
        ));
        assert_eq!(request.endpoints.base_url, config.endpoints.base_url);
        assert_eq!(request.encoding, WireEncoding::Gbk);
    }
}
