//! Key material loading and signature primitives
//!
//! Key material travels as base64-encoded DER documents inside request
//! credentials. Loading turns it into usable key objects; signing and
//! verification operate on raw byte slices so callers decide canonical
//! form and text encoding.

use crate::{Error, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use ed25519_dalek::{Signer as _, Verifier as _};
use pkcs8::{DecodePrivateKey, DecodePublicKey};
use serde::{Deserialize, Serialize};

/// Signature algorithm for the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignatureAlgorithm {
    /// Ed25519
    Ed25519,
    /// ECDSA over secp256k1 with SHA-256
    EcdsaK256,
}

impl std::fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignatureAlgorithm::Ed25519 => write!(f, "ed25519"),
            SignatureAlgorithm::EcdsaK256 => write!(f, "ecdsa-k256"),
        }
    }
}

/// Private key document kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrivateKeyKind {
    /// Plain PKCS#8 DER
    Pkcs8,
    /// PBES2-encrypted PKCS#8 DER; requires the key password
    EncryptedPkcs8,
}

/// Public key material kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PublicKeyKind {
    /// X.509 SubjectPublicKeyInfo DER
    Spki,
    /// Algorithm-native raw bytes
    Raw,
}

/// Loaded signing key
pub enum SigningKey {
    /// Ed25519 signing key
    Ed25519(ed25519_dalek::SigningKey),
    /// secp256k1 ECDSA signing key
    EcdsaK256(k256::ecdsa::SigningKey),
}

impl SigningKey {
    /// Sign data bytes, returning the raw signature bytes
    pub fn sign(&self, data: &[u8]) -> Vec<u8> {
        match self {
            SigningKey::Ed25519(key) => key.sign(data).to_bytes().to_vec(),
            SigningKey::EcdsaK256(key) => {
                let signature: k256::ecdsa::Signature = key.sign(data);
                signature.to_bytes().to_vec()
            }
        }
    }
}

/// Loaded verifying key
pub enum VerifyingKey {
    /// Ed25519 verifying key
    Ed25519(ed25519_dalek::VerifyingKey),
    /// secp256k1 ECDSA verifying key
    EcdsaK256(k256::ecdsa::VerifyingKey),
}

impl VerifyingKey {
    /// Verify a signature over data bytes
    ///
    /// Returns `false` for malformed signature bytes as well as for a
    /// signature that does not match; loading errors never panic here.
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        match self {
            VerifyingKey::Ed25519(key) => ed25519_dalek::Signature::from_slice(signature)
                .map(|sig| key.verify(data, &sig).is_ok())
                .unwrap_or(false),
            VerifyingKey::EcdsaK256(key) => k256::ecdsa::Signature::from_slice(signature)
                .map(|sig| key.verify(data, &sig).is_ok())
                .unwrap_or(false),
        }
    }
}

fn decode_base64(content: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(content.trim())
        .map_err(|e| Error::KeyMaterial(format!("key material is not valid base64: {e}")))
}

/// Create a signing key from base64-encoded private key material
pub fn private_key_from(
    algorithm: SignatureAlgorithm,
    kind: PrivateKeyKind,
    content: &str,
    password: Option<&str>,
) -> Result<SigningKey> {
    let der = decode_base64(content)?;
    let der = match kind {
        PrivateKeyKind::Pkcs8 => der,
        PrivateKeyKind::EncryptedPkcs8 => {
            let password = password.ok_or_else(|| {
                Error::KeyMaterial("password required for encrypted private key".to_string())
            })?;
            let encrypted = pkcs8::EncryptedPrivateKeyInfo::try_from(der.as_slice())
                .map_err(|e| Error::KeyMaterial(format!("malformed encrypted key: {e}")))?;
            let document = encrypted
                .decrypt(password)
                .map_err(|e| Error::KeyMaterial(format!("failed to decrypt private key: {e}")))?;
            document.as_bytes().to_vec()
        }
    };

    match algorithm {
        SignatureAlgorithm::Ed25519 => ed25519_dalek::SigningKey::from_pkcs8_der(&der)
            .map(SigningKey::Ed25519)
            .map_err(|e| Error::KeyMaterial(format!("failed to load ed25519 private key: {e}"))),
        SignatureAlgorithm::EcdsaK256 => k256::ecdsa::SigningKey::from_pkcs8_der(&der)
            .map(SigningKey::EcdsaK256)
            .map_err(|e| Error::KeyMaterial(format!("failed to load ecdsa private key: {e}"))),
    }
}

/// Create a verifying key from base64-encoded public key material
pub fn public_key_from(
    algorithm: SignatureAlgorithm,
    kind: PublicKeyKind,
    content: &str,
) -> Result<VerifyingKey> {
    let material = decode_base64(content)?;

    match (algorithm, kind) {
        (SignatureAlgorithm::Ed25519, PublicKeyKind::Spki) => {
            ed25519_dalek::VerifyingKey::from_public_key_der(&material)
                .map(VerifyingKey::Ed25519)
                .map_err(|e| Error::KeyMaterial(format!("failed to load ed25519 public key: {e}")))
        }
        (SignatureAlgorithm::Ed25519, PublicKeyKind::Raw) => {
            let bytes: &[u8; 32] = material.as_slice().try_into().map_err(|_| {
                Error::KeyMaterial(format!(
                    "raw ed25519 public key must be 32 bytes, got {}",
                    material.len()
                ))
            })?;
            ed25519_dalek::VerifyingKey::from_bytes(bytes)
                .map(VerifyingKey::Ed25519)
                .map_err(|e| Error::KeyMaterial(format!("failed to load ed25519 public key: {e}")))
        }
        (SignatureAlgorithm::EcdsaK256, PublicKeyKind::Spki) => {
            k256::ecdsa::VerifyingKey::from_public_key_der(&material)
                .map(VerifyingKey::EcdsaK256)
                .map_err(|e| Error::KeyMaterial(format!("failed to load ecdsa public key: {e}")))
        }
        (SignatureAlgorithm::EcdsaK256, PublicKeyKind::Raw) => {
            k256::ecdsa::VerifyingKey::from_sec1_bytes(&material)
                .map(VerifyingKey::EcdsaK256)
                .map_err(|e| Error::KeyMaterial(format!("failed to load ecdsa public key: {e}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkcs8::{EncodePrivateKey, EncodePublicKey};
    use rand::rngs::OsRng;

    fn ed25519_pair() -> (String, String) {
        let key = ed25519_dalek::SigningKey::generate(&mut OsRng);
        let private = BASE64.encode(key.to_pkcs8_der().unwrap().as_bytes());
        let public = BASE64.encode(key.verifying_key().to_public_key_der().unwrap().as_bytes());
        (private, public)
    }

    #[test]
    fn test_ed25519_sign_verify_round_trip() {
        let (private, public) = ed25519_pair();
        let signing =
            private_key_from(SignatureAlgorithm::Ed25519, PrivateKeyKind::Pkcs8, &private, None)
                .unwrap();
        let verifying =
            public_key_from(SignatureAlgorithm::Ed25519, PublicKeyKind::Spki, &public).unwrap();

        let data = b"<GZELINK><INFO></INFO></GZELINK>";
        let signature = signing.sign(data);
        assert!(verifying.verify(data, &signature));
        assert!(!verifying.verify(b"tampered", &signature));
    }

    #[test]
    fn test_ed25519_raw_public_key() {
        let key = ed25519_dalek::SigningKey::generate(&mut OsRng);
        let private = BASE64.encode(key.to_pkcs8_der().unwrap().as_bytes());
        let raw_public = BASE64.encode(key.verifying_key().to_bytes());

        let signing =
            private_key_from(SignatureAlgorithm::Ed25519, PrivateKeyKind::Pkcs8, &private, None)
                .unwrap();
        let verifying =
            public_key_from(SignatureAlgorithm::Ed25519, PublicKeyKind::Raw, &raw_public).unwrap();

        let signature = signing.sign(b"payload");
        assert!(verifying.verify(b"payload", &signature));
    }

    #[test]
    fn test_ecdsa_sign_verify_round_trip() {
        let key = k256::ecdsa::SigningKey::random(&mut OsRng);
        let private = BASE64.encode(key.to_pkcs8_der().unwrap().as_bytes());
        let public = BASE64.encode(
            key.verifying_key()
                .to_public_key_der()
                .unwrap()
                .as_bytes(),
        );

        let signing = private_key_from(
            SignatureAlgorithm::EcdsaK256,
            PrivateKeyKind::Pkcs8,
            &private,
            None,
        )
        .unwrap();
        let verifying =
            public_key_from(SignatureAlgorithm::EcdsaK256, PublicKeyKind::Spki, &public).unwrap();

        let data = b"batch content";
        let signature = signing.sign(data);
        assert!(verifying.verify(data, &signature));
        assert!(!verifying.verify(b"other content", &signature));
    }

    #[test]
    fn test_encrypted_private_key() {
        let key = ed25519_dalek::SigningKey::generate(&mut OsRng);
        let plain = key.to_pkcs8_der().unwrap();
        let encrypted = pkcs8::PrivateKeyInfo::try_from(plain.as_bytes())
            .unwrap()
            .encrypt(OsRng, b"123456")
            .unwrap();
        let content = BASE64.encode(encrypted.as_bytes());

        let signing = private_key_from(
            SignatureAlgorithm::Ed25519,
            PrivateKeyKind::EncryptedPkcs8,
            &content,
            Some("123456"),
        )
        .unwrap();
        let raw_public = BASE64.encode(key.verifying_key().to_bytes());
        let verifying =
            public_key_from(SignatureAlgorithm::Ed25519, PublicKeyKind::Raw, &raw_public).unwrap();
        assert!(verifying.verify(b"data", &signing.sign(b"data")));

        // Wrong password
        let result = private_key_from(
            SignatureAlgorithm::Ed25519,
            PrivateKeyKind::EncryptedPkcs8,
            &content,
            Some("654321"),
        );
        assert!(matches!(result, Err(Error::KeyMaterial(_))));

        // Missing password
        let result = private_key_from(
            SignatureAlgorithm::Ed25519,
            PrivateKeyKind::EncryptedPkcs8,
            &content,
            None,
        );
        assert!(matches!(result, Err(Error::KeyMaterial(_))));
    }

    #[test]
    fn test_rejects_invalid_base64() {
        let result = private_key_from(
            SignatureAlgorithm::Ed25519,
            PrivateKeyKind::Pkcs8,
            "not base64!!!",
            None,
        );
        assert!(matches!(result, Err(Error::KeyMaterial(_))));
    }

    #[test]
    fn test_rejects_wrong_algorithm_document() {
        // An ed25519 document fed to the ecdsa loader must fail cleanly.
        let (private, _) = ed25519_pair();
        let result = private_key_from(
            SignatureAlgorithm::EcdsaK256,
            PrivateKeyKind::Pkcs8,
            &private,
            None,
        );
        assert!(matches!(result, Err(Error::KeyMaterial(_))));
    }

    #[test]
    fn test_verify_tolerates_malformed_signature() {
        let (_, public) = ed25519_pair();
        let verifying =
            public_key_from(SignatureAlgorithm::Ed25519, PublicKeyKind::Spki, &public).unwrap();
        assert!(!verifying.verify(b"data", b"short"));
        assert!(!verifying.verify(b"data", &[]));
    }
}
