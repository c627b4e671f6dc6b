use std::str::FromStr;

use sigil_core::domain::address::{
    Ss58Address, NETWORK_KUSAMA, NETWORK_PARALLEL, NETWORK_POLKADOT, NETWORK_POLYMESH,
    NETWORK_SUBSTRATE,
};
use sigil_core::ErrorCode;

use crate::fixtures::*;

#[test]
fn encodes_known_networks() {
    let cases = [
        (NETWORK_POLKADOT, ADDRESS_POLKADOT),
        (NETWORK_KUSAMA, ADDRESS_KUSAMA),
        (NETWORK_POLYMESH, ADDRESS_POLYMESH),
        (NETWORK_SUBSTRATE, ADDRESS_SUBSTRATE),
        (NETWORK_PARALLEL, ADDRESS_PARALLEL),
    ];
    for (network, expected) in cases {
        let address = Ss58Address::new(network, TEST_PUBLIC_KEY).expect("valid network");
        assert_eq!(address.encode(), expected, "network {network}");
    }
}

#[test]
fn decodes_conformance_destination() {
    let address = Ss58Address::from_str(DEST_ADDRESS_KSM).expect("valid address");
    assert_eq!(address.network(), NETWORK_KUSAMA);
    assert_eq!(address.public_key(), &DEST_PUBLIC_KEY);
}

#[test]
fn round_trips_one_and_two_byte_prefixes() {
    for network in [0u16, 2, 42, 63, 64, 172, 255, 16_383] {
        let address = Ss58Address::new(network, DEST_PUBLIC_KEY).expect("valid network");
        let decoded = Ss58Address::from_str(&address.encode()).expect("round trip");
        assert_eq!(decoded, address, "network {network}");
    }
}

#[test]
fn rejects_network_id_out_of_range() {
    let err = Ss58Address::new(16_384, TEST_PUBLIC_KEY).expect_err("out of range");
    assert_eq!(err.code(), ErrorCode::Address);
}

#[test]
fn rejects_single_character_corruption() {
    // Flip the final character to a different alphabet character.
    let mut corrupted = ADDRESS_KUSAMA.to_string();
    corrupted.pop();
    corrupted.push('D');
    assert_ne!(corrupted, ADDRESS_KUSAMA);
    let err = Ss58Address::from_str(&corrupted).expect_err("corrupted checksum");
    assert_eq!(err.code(), ErrorCode::Address);
}

#[test]
fn rejects_invalid_alphabet() {
    // '0', 'O', 'I' and 'l' are outside the base-58 alphabet.
    let err = Ss58Address::from_str("0twdfrhECFs3FpvCGoiE4hwRC4UsSiM8WL899HjRdQbfYZY")
        .expect_err("bad alphabet");
    assert_eq!(err.code(), ErrorCode::Address);
}

#[test]
fn rejects_truncated_and_reserved_payloads() {
    assert!(Ss58Address::from_str("").is_err());

    // Valid base-58, wrong payload length.
    let short = bs58::encode([0x02, 0xAA, 0xBB]).into_string();
    assert!(Ss58Address::from_str(&short).is_err());

    // First byte in the reserved range (>= 128).
    let mut raw = vec![0x80u8];
    raw.extend_from_slice(&TEST_PUBLIC_KEY);
    raw.extend_from_slice(&[0x00, 0x00]);
    let reserved = bs58::encode(raw).into_string();
    assert!(Ss58Address::from_str(&reserved).is_err());
}
