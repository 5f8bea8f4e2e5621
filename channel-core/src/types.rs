//! Shared types for channel requests and responses

use crate::security::{
    PrivateKeyKind, PublicKeyKind, SignatureAlgorithm, SigningKey, VerifyingKey,
};
use crate::{security, Error, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One payout item
///
/// The result `code`/`message` fields stay empty on the request side and are
/// populated by the converter when a response is parsed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transaction {
    /// Merchant-side serial number
    pub serial_no: String,
    /// Bank routing code
    #[serde(default)]
    pub bank_code: String,
    /// Account number
    #[serde(default)]
    pub bank_account_no: String,
    /// Account holder name
    #[serde(default)]
    pub bank_account_name: String,
    /// Phone number reserved with the bank
    #[serde(default)]
    pub bank_reserved_phone: String,
    /// Identity document number
    #[serde(default)]
    pub id_no: String,
    /// Identity document type
    #[serde(default)]
    pub id_type: String,
    /// Branch name
    #[serde(default)]
    pub branch_name: String,
    /// Branch province
    #[serde(default)]
    pub branch_province: String,
    /// Branch city code
    #[serde(default)]
    pub branch_city_code: String,
    /// Exact decimal amount
    #[serde(default)]
    pub amount: Decimal,
    /// Per-item result code
    #[serde(default)]
    pub code: Option<String>,
    /// Per-item result message
    #[serde(default)]
    pub message: Option<String>,
}

/// Request kind, the discriminant tag of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    /// Single payout
    Transaction,
    /// Batch payout
    BatchTransaction,
    /// Status lookup for an earlier payout
    TransactionQuery,
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestKind::Transaction => write!(f, "TRANSACTION"),
            RequestKind::BatchTransaction => write!(f, "BATCH_TRANSACTION"),
            RequestKind::TransactionQuery => write!(f, "TRANSACTION_QUERY"),
        }
    }
}

/// Batch payout payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchTransaction {
    /// Merchant order number covering the whole batch
    pub order_no: String,
    /// Payout items, in submission order
    pub transactions: Vec<Transaction>,
}

/// Order/serial lookup pair for a status query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionQuery {
    /// Merchant order number
    pub order_no: String,
    /// Item serial number
    pub serial_no: String,
}

/// Variant payload of a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RequestPayload {
    /// Single payout
    Transaction(Transaction),
    /// Batch payout
    BatchTransaction(BatchTransaction),
    /// Status lookup
    TransactionQuery(TransactionQuery),
}

impl RequestPayload {
    /// Discriminant tag of this payload
    pub fn kind(&self) -> RequestKind {
        match self {
            RequestPayload::Transaction(_) => RequestKind::Transaction,
            RequestPayload::BatchTransaction(_) => RequestKind::BatchTransaction,
            RequestPayload::TransactionQuery(_) => RequestKind::TransactionQuery,
        }
    }
}

/// Channel endpoint URLs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    /// Gateway URL requests are POSTed to
    pub base_url: String,
    /// Callback URL registered with the channel
    #[serde(default)]
    pub callback_url: Option<String>,
    /// Status query URL
    #[serde(default)]
    pub query_url: Option<String>,
    /// Hosted payment page URL
    #[serde(default)]
    pub gateway_url: Option<String>,
    /// Browser return URL
    #[serde(default)]
    pub return_url: Option<String>,
}

/// Credential and key material for one requesting principal
///
/// Supplied per request rather than globally, so one processor instance can
/// serve multiple principals.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    /// Merchant number assigned by the channel
    pub merchant_no: String,
    /// Operator username, where the channel requires one
    #[serde(default)]
    pub username: Option<String>,
    /// Operator password, where the channel requires one
    #[serde(default)]
    pub password: Option<String>,
    /// Base64-encoded private key document
    pub private_key: String,
    /// Private key document kind
    pub private_key_kind: PrivateKeyKind,
    /// Password for an encrypted private key document
    #[serde(default)]
    pub private_key_password: Option<String>,
    /// Base64-encoded public key material
    pub public_key: String,
    /// Public key material kind
    pub public_key_kind: PublicKeyKind,
    /// Signature algorithm for the envelope
    pub signature_algorithm: SignatureAlgorithm,
}

impl Credentials {
    /// Load the signing key from the private key material
    pub fn signing_key(&self) -> Result<SigningKey> {
        security::private_key_from(
            self.signature_algorithm,
            self.private_key_kind,
            &self.private_key,
            self.private_key_password.as_deref(),
        )
    }

    /// Load the verifying key from the public key material
    pub fn verifying_key(&self) -> Result<VerifyingKey> {
        security::public_key_from(
            self.signature_algorithm,
            self.public_key_kind,
            &self.public_key,
        )
    }
}

/// One outbound request against a channel
#[derive(Debug, Clone)]
pub struct Request {
    /// Channel endpoint URLs
    pub endpoints: Endpoints,
    /// Credential and key material for the requesting principal
    pub credentials: Credentials,
    /// Wire encoding declared for this exchange
    pub encoding: WireEncoding,
    created_at: DateTime<Utc>,
    payload: RequestPayload,
}

impl Request {
    /// Create a request
    ///
    /// The payload, and with it the request kind, is fixed for the lifetime
    /// of the request.
    pub fn new(
        endpoints: Endpoints,
        credentials: Credentials,
        encoding: WireEncoding,
        payload: RequestPayload,
    ) -> Self {
        Self {
            endpoints,
            credentials,
            encoding,
            created_at: Utc::now(),
            payload,
        }
    }

    /// Request kind
    pub fn kind(&self) -> RequestKind {
        self.payload.kind()
    }

    /// Variant payload
    pub fn payload(&self) -> &RequestPayload {
        &self.payload
    }

    /// Creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Variant payload of a decoded response
#[derive(Debug, Clone)]
pub enum ResponseBody {
    /// Single payout acknowledgement
    Transaction,
    /// Batch payout acknowledgement
    BatchTransaction {
        /// Channel-side order number, present when the batch was accepted
        order_no: Option<String>,
        /// Per-item results, in wire order
        transactions: Vec<Transaction>,
    },
    /// Status lookup result
    TransactionQuery,
}

/// One decoded response from a channel
#[derive(Debug, Clone)]
pub struct Response {
    /// Overall result code
    pub code: String,
    /// Overall result message
    pub message: String,
    /// Raw wire content the response was decoded from
    pub content: String,
    /// Variant payload
    pub body: ResponseBody,
    created_at: DateTime<Utc>,
}

impl Response {
    /// Create a response; the creation timestamp is fixed here
    pub fn new(code: String, message: String, content: String, body: ResponseBody) -> Self {
        Self {
            code,
            message,
            content,
            body,
            created_at: Utc::now(),
        }
    }

    /// Creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Wire text encoding, declared per request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireEncoding {
    /// UTF-8
    #[default]
    Utf8,
    /// GBK, used by mainland banking networks
    Gbk,
}

impl WireEncoding {
    /// Charset label for Content-Type headers
    pub fn charset(&self) -> &'static str {
        match self {
            WireEncoding::Utf8 => "UTF-8",
            WireEncoding::Gbk => "GBK",
        }
    }

    /// Encode text into wire bytes
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        match self {
            WireEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
            WireEncoding::Gbk => {
                let (bytes, _, had_errors) = encoding_rs::GBK.encode(text);
                if had_errors {
                    return Err(Error::Encoding(
                        "text contains characters not representable in GBK".to_string(),
                    ));
                }
                Ok(bytes.into_owned())
            }
        }
    }

    /// Decode wire bytes into text
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self {
            WireEncoding::Utf8 => {
                String::from_utf8(bytes.to_vec()).map_err(|e| Error::Encoding(e.to_string()))
            }
            WireEncoding::Gbk => {
                let (text, _, had_errors) = encoding_rs::GBK.decode(bytes);
                if had_errors {
                    return Err(Error::Encoding("bytes are not valid GBK".to_string()));
                }
                Ok(text.into_owned())
            }
        }
    }
}
