//! Batch payout converter for the GZELINK dialect

use crate::wire;
use channel_core::template::{Context, TemplateEngine};
use channel_core::{
    BatchTransaction, Converter, Error, Request, Response, ResponseBody, Result, Transaction,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// Overall return codes that mean the endpoint accepted the batch
pub const BATCH_TRANSACTION_SUCCESS_CODES: &[&str] = &["0000"];

const BATCH_TRANSACTION_TEMPLATE: &str = "batch_transaction.xml";
const SUBMIT_TIME_FORMAT: &str = "%Y%m%d%H%M%S";

#[derive(Serialize)]
struct BatchTemplateRequest<'a> {
    merchant_no: &'a str,
    order_no: &'a str,
    submit_time: String,
    transactions: &'a [Transaction],
}

/// Converter for the batch payout operation
///
/// Holds the compiled template configuration; building it is the expensive
/// part, so construct one instance per channel and share it. The instance is
/// never mutated after construction and is safe for concurrent reads.
pub struct UnionPayConverter {
    templates: TemplateEngine,
}

impl UnionPayConverter {
    /// Compile the channel templates
    pub fn new() -> Result<Self> {
        let templates = TemplateEngine::new(&[(
            BATCH_TRANSACTION_TEMPLATE,
            include_str!("../templates/batch_transaction.xml"),
        )])?;
        Ok(Self { templates })
    }
}

impl Converter for UnionPayConverter {
    fn encode_batch_transaction(
        &self,
        request: &Request,
        batch: &BatchTransaction,
    ) -> Result<String> {
        for transaction in &batch.transactions {
            if transaction.amount <= Decimal::ZERO {
                return Err(Error::Validation(format!(
                    "transaction {} has non-positive amount {}",
                    transaction.serial_no, transaction.amount
                )));
            }
        }

        // Derived, never stored: the endpoint cross-checks both against the
        // itemized body.
        let sum: Decimal = batch.transactions.iter().map(|t| t.amount).sum();
        let count = batch.transactions.len();

        let mut context = Context::new();
        context.insert("charset", request.encoding.charset());
        context.insert(
            "request",
            &BatchTemplateRequest {
                merchant_no: &request.credentials.merchant_no,
                order_no: &batch.order_no,
                submit_time: request.created_at().format(SUBMIT_TIME_FORMAT).to_string(),
                transactions: &batch.transactions,
            },
        );
        context.insert("sum", &sum);
        context.insert("count", &count);

        debug!(
            "encoding batch {} with {} items, control sum {}",
            batch.order_no, count, sum
        );
        self.templates.render(BATCH_TRANSACTION_TEMPLATE, &context)
    }

    fn decode_batch_transaction(&self, content: &str) -> Result<Response> {
        let document: wire::BatchTransactionDocument =
            quick_xml::de::from_str(content).map_err(|e| Error::Xml(e.to_string()))?;

        let code = document.info.return_code.unwrap_or_default();
        let message = document.info.error_msg.unwrap_or_default();

        let mut order_no = None;
        let mut transactions = Vec::new();

        if BATCH_TRANSACTION_SUCCESS_CODES.contains(&code.as_str()) {
            order_no = document.info.request_serial_no;
            if let Some(body) = document.body {
                for detail in body.details.items {
                    transactions.push(Transaction {
                        serial_no: detail.serial_no.unwrap_or_default(),
                        code: detail.return_code,
                        message: detail.error_msg,
                        ..Transaction::default()
                    });
                }
            }
        } else {
            debug!("batch rejected with code {}: {}", code, message);
        }

        Ok(Response::new(
            code,
            message,
            content.to_string(),
            ResponseBody::BatchTransaction {
                order_no,
                transactions,
            },
        ))
    }
}
