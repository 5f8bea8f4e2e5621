//! Signature envelope for GZELINK wire content

use channel_core::{Error, Request, Result};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::error;

/// Empty envelope the rendered request carries at the signing position
pub const SIGNATURE_PLACEHOLDER: &str = "<SIGNED_MSG></SIGNED_MSG>";

const SIGNATURE_PATTERN: &str = "(?s)<SIGNED_MSG>(.*?)</SIGNED_MSG>";

lazy_static! {
    static ref SIGNATURE_RE: Regex = Regex::new(SIGNATURE_PATTERN).unwrap();
}

/// Signs outbound content and verifies inbound content
///
/// Outbound content is fully under our control and carries exactly one
/// literal placeholder, so signing works by literal substring deletion and
/// substitution. Inbound formatting of the envelope is not guaranteed to be
/// canonicalized identically, so verification strips it by pattern instead.
#[derive(Debug, Default)]
pub struct UnionPayCryptor;

impl UnionPayCryptor {
    /// Create a cryptor
    pub fn new() -> Self {
        Self
    }

    /// Sign `content`, filling the placeholder with the hex-encoded signature
    ///
    /// The signature covers the content with the placeholder deleted, encoded
    /// with the request's declared wire encoding.
    pub fn sign(&self, content: &str, request: &Request) -> Result<String> {
        if !content.contains(SIGNATURE_PLACEHOLDER) {
            return Err(Error::Validation(
                "content has no signature placeholder to fill".to_string(),
            ));
        }

        let key = request.credentials.signing_key()?;
        let canonical = content.replace(SIGNATURE_PLACEHOLDER, "");
        let signature = key.sign(&request.encoding.encode(&canonical)?);
        let envelope = format!("<SIGNED_MSG>{}</SIGNED_MSG>", hex::encode(signature));
        Ok(content.replace(SIGNATURE_PLACEHOLDER, &envelope))
    }

    /// Verify the signature envelope in `content`
    ///
    /// The round trip proceeds only on a positively confirmed signature; a
    /// missing envelope, malformed hex, or an unconfirmed signature all abort.
    pub fn verify(&self, content: &str, request: &Request) -> Result<()> {
        let captures = SIGNATURE_RE
            .captures(content)
            .ok_or(Error::MissingSignature)?;
        let claimed = captures.get(1).map(|m| m.as_str()).unwrap_or_default();

        let signature = hex::decode(claimed).map_err(|_| {
            error!("claimed signature '{}' is not valid hex", claimed);
            Error::SignatureInvalid
        })?;

        let key = request.credentials.verifying_key()?;
        let canonical = SIGNATURE_RE.replace_all(content, "");
        if key.verify(&request.encoding.encode(&canonical)?, &signature) {
            Ok(())
        } else {
            error!("invalid signature '{}' found in content", claimed);
            Err(Error::SignatureInvalid)
        }
    }
}
