use sigil_core::domain::payload::TxExtra;
use sigil_core::{AccountAddress, Call, Era, SecretBytes, SigningRequest};

use crate::fixtures::constants::*;

/// Request against the Kusama fixtures with the given call and nonce.
pub fn kusama_request(call: Call, nonce: u32) -> SigningRequest {
    SigningRequest {
        block_hash: BLOCK_HASH,
        genesis_hash: GENESIS_HASH_KSM,
        nonce,
        spec_version: SPEC_VERSION,
        transaction_version: TRANSACTION_VERSION,
        network: 2,
        private_key: SecretBytes::new(TEST_PRIVATE_KEY.to_vec()),
        tip: 0,
        era: Era::Immortal,
        call,
    }
}

/// Conformance vector 2: immortal transfer anchored at the genesis hash.
pub fn vector2_request() -> SigningRequest {
    let mut request = kusama_request(
        Call::Transfer {
            dest: AccountAddress::Ss58(DEST_ADDRESS_KSM.to_string()),
            value: 10_000_000_000,
        },
        1,
    );
    request.block_hash = GENESIS_HASH_KSM;
    request
}

/// The era/nonce/tip triple of conformance vector 1.
pub fn vector1_extra() -> TxExtra {
    TxExtra { era: Era::Immortal, nonce: 0, tip: 0 }
}
