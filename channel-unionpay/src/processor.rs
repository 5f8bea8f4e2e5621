//! Round-trip processor for the channel

use crate::converter::UnionPayConverter;
use crate::cryptor::UnionPayCryptor;
use crate::metrics::{CHANNEL_REQUESTS_TOTAL, CHANNEL_REQUEST_DURATION};
use channel_core::{
    Converter, HttpTransport, Processor, Request, Response, Result, Transport,
};
use std::time::Instant;
use tracing::{debug, info};

/// Executes the convert → sign → transmit → verify → parse round trip
///
/// Terminal on first failure; no step is retried and there is no partial
/// success. The processor holds no per-call mutable state, so one instance
/// may be shared across threads; concurrency is bounded only by the
/// transport's pool.
pub struct UnionPayProcessor<T = HttpTransport> {
    transport: T,
    converter: UnionPayConverter,
    cryptor: UnionPayCryptor,
}

impl<T: Transport> UnionPayProcessor<T> {
    /// Create a processor over the given transport
    pub fn new(transport: T, converter: UnionPayConverter, cryptor: UnionPayCryptor) -> Self {
        Self {
            transport,
            converter,
            cryptor,
        }
    }

    fn round_trip(&self, request: &Request) -> Result<Response> {
        info!(
            "executing {} against {}",
            request.kind(),
            request.endpoints.base_url
        );

        let content = self.converter.write_to(request)?;
        let signed = self.cryptor.sign(&content, request)?;
        debug!("signed content: {}", signed);

        let content_type = format!("application/xml; charset={}", request.encoding.charset());
        let body = request.encoding.encode(&signed)?;
        let response_bytes =
            self.transport
                .post(&request.endpoints.base_url, &content_type, body)?;

        let response_text = request.encoding.decode(&response_bytes)?;
        debug!("response content: {}", response_text);

        self.cryptor.verify(&response_text, request)?;
        self.converter.read_from(&response_text, request.kind())
    }
}

impl<T: Transport> Processor for UnionPayProcessor<T> {
    fn execute(&self, request: &Request) -> Result<Response> {
        let kind = request.kind().to_string();
        let started = Instant::now();

        let result = self.round_trip(request);

        CHANNEL_REQUEST_DURATION
            .with_label_values(&[&kind])
            .observe(started.elapsed().as_secs_f64());
        let status = if result.is_ok() { "success" } else { "failure" };
        CHANNEL_REQUESTS_TOTAL
            .with_label_values(&[&kind, status])
            .inc();

        result
    }
}
