//! Canonical signing payload.
//!
//! Field order is fixed by the runtime and non-negotiable:
//! call bytes, era, compact nonce, compact tip, spec version (u32 LE),
//! transaction version (u32 LE), genesis hash, era checkpoint hash. The
//! checkpoint is the request's block hash exactly as supplied; for immortal
//! submissions callers pass the genesis hash there.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

use crate::domain::era::Era;
use crate::domain::scale;
use crate::foundation::Hash32;

type Blake2b256 = Blake2b<U32>;

/// Payloads longer than this are replaced by their blake2b-256 digest
/// before signing. The runtime applies the same rule when verifying, so
/// this threshold is part of the wire contract, not a tuning knob.
pub const MAX_DIRECT_SIGN_LEN: usize = 256;

pub const PAYLOAD_DIGEST_LEN: usize = 32;

/// The era/nonce/tip triple; appears in the signed payload and again in the
/// assembled extrinsic.
#[derive(Clone, Copy, Debug)]
pub struct TxExtra {
    pub era: Era,
    pub nonce: u32,
    pub tip: u128,
}

impl TxExtra {
    pub fn encode_to(&self, out: &mut Vec<u8>) {
        self.era.encode_to(out);
        scale::encode_compact(self.nonce as u128, out);
        scale::encode_compact(self.tip, out);
    }
}

/// Ephemeral bytes assembled solely to be signed; never transmitted.
#[derive(Clone, Debug)]
pub struct SigningPayload {
    bytes: Vec<u8>,
}

/// What the signer actually operates on, resolved once per call.
#[derive(Clone, Debug)]
pub enum SignTarget<'a> {
    Direct(&'a [u8]),
    Hashed(Hash32),
}

impl SigningPayload {
    pub fn build(
        call: &[u8],
        extra: &TxExtra,
        spec_version: u32,
        transaction_version: u32,
        genesis_hash: &Hash32,
        checkpoint_hash: &Hash32,
    ) -> Self {
        let mut bytes = Vec::with_capacity(call.len() + 80);
        bytes.extend_from_slice(call);
        extra.encode_to(&mut bytes);
        bytes.extend_from_slice(&spec_version.to_le_bytes());
        bytes.extend_from_slice(&transaction_version.to_le_bytes());
        bytes.extend_from_slice(genesis_hash);
        bytes.extend_from_slice(checkpoint_hash);
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn sign_target(&self) -> SignTarget<'_> {
        if self.bytes.len() > MAX_DIRECT_SIGN_LEN {
            SignTarget::Hashed(blake2b_256(&self.bytes))
        } else {
            SignTarget::Direct(&self.bytes)
        }
    }
}

impl<'a> SignTarget<'a> {
    pub fn message(&self) -> &[u8] {
        match self {
            SignTarget::Direct(bytes) => bytes,
            SignTarget::Hashed(digest) => digest,
        }
    }

    pub fn is_hashed(&self) -> bool {
        matches!(self, SignTarget::Hashed(_))
    }
}

pub fn blake2b_256(data: &[u8]) -> Hash32 {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    hasher.finalize().into()
}
