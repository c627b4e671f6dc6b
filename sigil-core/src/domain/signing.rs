//! Signature schemes.
//!
//! The scheme is part of the chain configuration, never the request:
//! Ed25519 signing is deterministic, Sr25519 (Schnorr over Ristretto with
//! the `"substrate"` signing context) draws a fresh nonce per signature.

use ed25519_dalek::{Signer as _, Verifier as _};
use schnorrkel::{signing_context, ExpansionMode, MiniSecretKey};
use zeroize::Zeroize;

use crate::foundation::{AccountId, Result, Signature64, SecretBytes, SigningError};

pub const SECRET_KEY_LEN: usize = 32;
pub const SIGNATURE_LEN: usize = 64;

const SIGNING_CONTEXT: &[u8] = b"substrate";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SignatureScheme {
    Ed25519,
    Sr25519,
}

impl SignatureScheme {
    /// Wire discriminant of the signature wrapper (`MultiSignature` order).
    pub fn tag(&self) -> u8 {
        match self {
            SignatureScheme::Ed25519 => 0x00,
            SignatureScheme::Sr25519 => 0x01,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SignatureScheme::Ed25519 => "ed25519",
            SignatureScheme::Sr25519 => "sr25519",
        }
    }
}

/// Derives the public account id for the given secret.
pub fn public_key(scheme: SignatureScheme, secret: &SecretBytes) -> Result<AccountId> {
    let mut seed = seed32(secret)?;
    let result = match scheme {
        SignatureScheme::Ed25519 => {
            let key = ed25519_dalek::SigningKey::from_bytes(&seed);
            Ok(key.verifying_key().to_bytes())
        }
        SignatureScheme::Sr25519 => expand_sr25519(&seed).map(|pair| pair.public.to_bytes()),
    };
    seed.zeroize();
    result
}

/// Signs `message` (a payload or its digest, already resolved by the
/// caller) with the scheme's curve.
pub fn sign(scheme: SignatureScheme, secret: &SecretBytes, message: &[u8]) -> Result<Signature64> {
    let mut seed = seed32(secret)?;
    let result = match scheme {
        SignatureScheme::Ed25519 => {
            let key = ed25519_dalek::SigningKey::from_bytes(&seed);
            Ok(key.sign(message).to_bytes())
        }
        SignatureScheme::Sr25519 => expand_sr25519(&seed)
            .map(|pair| pair.sign(signing_context(SIGNING_CONTEXT).bytes(message)).to_bytes()),
    };
    seed.zeroize();
    result
}

/// Checks `signature` over `message` against a public account id.
///
/// Malformed signatures verify as `false`; a malformed public key is an
/// error because it indicates a caller bug rather than a bad signature.
pub fn verify(
    scheme: SignatureScheme,
    public: &AccountId,
    message: &[u8],
    signature: &Signature64,
) -> Result<bool> {
    match scheme {
        SignatureScheme::Ed25519 => {
            let key = ed25519_dalek::VerifyingKey::from_bytes(public)
                .map_err(|e| key_error(scheme, e.to_string()))?;
            let sig = ed25519_dalek::Signature::from_bytes(signature);
            Ok(key.verify(message, &sig).is_ok())
        }
        SignatureScheme::Sr25519 => {
            let key = schnorrkel::PublicKey::from_bytes(public)
                .map_err(|e| key_error(scheme, e.to_string()))?;
            let Ok(sig) = schnorrkel::Signature::from_bytes(signature) else {
                return Ok(false);
            };
            Ok(key
                .verify(signing_context(SIGNING_CONTEXT).bytes(message), &sig)
                .is_ok())
        }
    }
}

fn seed32(secret: &SecretBytes) -> Result<[u8; SECRET_KEY_LEN]> {
    <[u8; SECRET_KEY_LEN]>::try_from(secret.expose()).map_err(|_| SigningError::KeyLength {
        expected: SECRET_KEY_LEN,
        actual: secret.len(),
    })
}

fn expand_sr25519(seed: &[u8; SECRET_KEY_LEN]) -> Result<schnorrkel::Keypair> {
    let mini = MiniSecretKey::from_bytes(seed)
        .map_err(|e| key_error(SignatureScheme::Sr25519, e.to_string()))?;
    Ok(mini.expand_to_keypair(ExpansionMode::Ed25519))
}

fn key_error(scheme: SignatureScheme, details: String) -> SigningError {
    SigningError::Key { scheme: scheme.name(), details }
}
