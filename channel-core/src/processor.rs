//! Processor contract: one full round trip against a channel

use crate::types::{Request, Response};
use crate::{Error, Result};
use std::collections::HashMap;

/// Executes channel operations end to end
///
/// `execute` is the synchronous round trip; the other operations exist for
/// channels that redirect through hosted pages or push notifications, and
/// default to an explicit [`Error::UnsupportedOperation`].
pub trait Processor {
    /// Execute the request and produce its decoded response
    ///
    /// Fail-fast: the first failing step aborts the round trip, and there is
    /// no partial-success return value.
    fn execute(&self, request: &Request) -> Result<Response>;

    /// Generate redirect parameters for a hosted payment page
    fn generate(&self, _request: &Request) -> Result<HashMap<String, String>> {
        Err(Error::UnsupportedOperation("generate"))
    }

    /// Ingest an asynchronous notification pushed by the channel
    fn handle_notification(&self, _notification: &str) -> Result<Response> {
        Err(Error::UnsupportedOperation("notification"))
    }
}
