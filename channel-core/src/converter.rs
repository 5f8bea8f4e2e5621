//! Converter contract: structured requests ⇄ wire content

use crate::types::{
    BatchTransaction, Request, RequestKind, RequestPayload, Response, Transaction,
    TransactionQuery,
};
use crate::{Error, Result};

/// Converts requests into wire content and wire content back into responses
///
/// `write_to` and `read_from` dispatch exhaustively on the request kind. A
/// concrete channel overrides the hooks for the kinds it supports and
/// inherits an explicit [`Error::Unsupported`] for everything else; the
/// result is checked by the caller rather than signalled through unwinding.
pub trait Converter {
    /// Encode a request into its wire content
    fn write_to(&self, request: &Request) -> Result<String> {
        match request.payload() {
            RequestPayload::Transaction(transaction) => {
                self.encode_transaction(request, transaction)
            }
            RequestPayload::BatchTransaction(batch) => {
                self.encode_batch_transaction(request, batch)
            }
            RequestPayload::TransactionQuery(query) => {
                self.encode_transaction_query(request, query)
            }
        }
    }

    /// Decode wire content into the response for the given request kind
    fn read_from(&self, content: &str, kind: RequestKind) -> Result<Response> {
        match kind {
            RequestKind::Transaction => self.decode_transaction(content),
            RequestKind::BatchTransaction => self.decode_batch_transaction(content),
            RequestKind::TransactionQuery => self.decode_transaction_query(content),
        }
    }

    /// Encode a single-payout request
    fn encode_transaction(&self, _request: &Request, _transaction: &Transaction) -> Result<String> {
        Err(Error::Unsupported {
            kind: RequestKind::Transaction,
        })
    }

    /// Encode a batch payout request
    fn encode_batch_transaction(
        &self,
        _request: &Request,
        _batch: &BatchTransaction,
    ) -> Result<String> {
        Err(Error::Unsupported {
            kind: RequestKind::BatchTransaction,
        })
    }

    /// Encode a status query request
    fn encode_transaction_query(
        &self,
        _request: &Request,
        _query: &TransactionQuery,
    ) -> Result<String> {
        Err(Error::Unsupported {
            kind: RequestKind::TransactionQuery,
        })
    }

    /// Decode a single-payout response
    fn decode_transaction(&self, _content: &str) -> Result<Response> {
        Err(Error::Unsupported {
            kind: RequestKind::Transaction,
        })
    }

    /// Decode a batch payout response
    fn decode_batch_transaction(&self, _content: &str) -> Result<Response> {
        Err(Error::Unsupported {
            kind: RequestKind::BatchTransaction,
        })
    }

    /// Decode a status query response
    fn decode_transaction_query(&self, _content: &str) -> Result<Response> {
        Err(Error::Unsupported {
            kind: RequestKind::TransactionQuery,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::{PrivateKeyKind, PublicKeyKind, SignatureAlgorithm};
    use crate::types::{Credentials, Endpoints, WireEncoding};

    struct BareConverter;
    impl Converter for BareConverter {}

    fn request(payload: RequestPayload) -> Request {
        Request::new(
            Endpoints {
                base_url: "https://channel.example/gateway".to_string(),
                callback_url: None,
                query_url: None,
                gateway_url: None,
                return_url: None,
            },
            Credentials {
                merchant_no: "M001".to_string(),
                username: None,
                password: None,
                private_key: String::new(),
                private_key_kind: PrivateKeyKind::Pkcs8,
                private_key_password: None,
                public_key: String::new(),
                public_key_kind: PublicKeyKind::Spki,
                signature_algorithm: SignatureAlgorithm::Ed25519,
            },
            WireEncoding::Utf8,
            payload,
        )
    }

    #[test]
    fn test_every_hook_defaults_to_unsupported() {
        let converter = BareConverter;

        let single = request(RequestPayload::Transaction(Transaction::default()));
        assert!(matches!(
            converter.write_to(&single),
            Err(Error::Unsupported {
                kind: RequestKind::Transaction
            })
        ));

        let query = request(RequestPayload::TransactionQuery(TransactionQuery {
            order_no: "1".to_string(),
            serial_no: "2".to_string(),
        }));
        assert!(matches!(
            converter.write_to(&query),
            Err(Error::Unsupported {
                kind: RequestKind::TransactionQuery
            })
        ));

        assert!(matches!(
            converter.read_from("<GZELINK/>", RequestKind::BatchTransaction),
            Err(Error::Unsupported {
                kind: RequestKind::BatchTransaction
            })
        ));
    }
}
