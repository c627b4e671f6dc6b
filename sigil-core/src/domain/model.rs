//! Input and output records of the signing pipeline.

use serde::{Deserialize, Serialize};

use crate::domain::call::Call;
use crate::domain::era::Era;
use crate::foundation::{ErrorContext, Hash32, Result, SecretBytes, Signature64};

/// One signing request, consumed whole and dropped when the call returns.
///
/// Deliberately not serializable: it carries the private key.
#[derive(Debug)]
pub struct SigningRequest {
    /// Era checkpoint hash; the genesis hash for immortal submissions.
    pub block_hash: Hash32,
    pub genesis_hash: Hash32,
    pub nonce: u32,
    pub spec_version: u32,
    pub transaction_version: u32,
    /// Network identifier; must agree with the pipeline's configuration.
    pub network: u16,
    pub private_key: SecretBytes,
    pub tip: u128,
    pub era: Era,
    pub call: Call,
}

/// Successful result: the network-ready bytes plus the raw signature.
#[derive(Clone, Debug)]
pub struct SignedExtrinsic {
    pub encoded: Vec<u8>,
    pub signature: Signature64,
}

/// External output record.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SigningOutput {
    pub encoded: Vec<u8>,
    pub signature: Vec<u8>,
    pub error: Option<ErrorContext>,
}

impl SigningOutput {
    /// Folds a pipeline result into the record form: either the encoded
    /// bytes, or an error context with no partial output.
    pub fn from_result(result: Result<SignedExtrinsic>) -> Self {
        match result {
            Ok(signed) => Self {
                encoded: signed.encoded,
                signature: signed.signature.to_vec(),
                error: None,
            },
            Err(err) => Self {
                encoded: Vec::new(),
                signature: Vec::new(),
                error: Some(err.context()),
            },
        }
    }
}
