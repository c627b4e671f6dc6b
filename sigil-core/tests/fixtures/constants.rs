//! Shared byte vectors for the Kusama conformance fixtures.

use hex_literal::hex;

pub const GENESIS_HASH_KSM: [u8; 32] =
    hex!("b0a8d493285c2df73290dfb7e61f870f17b41801197a149ca93654499ea3dafe");

pub const BLOCK_HASH: [u8; 32] =
    hex!("4955dd4813f3e91ef3fd5a825b928af2fc50a71380085f753ccef00bb1582891");

/// Destination account of conformance vector 1.
pub const TEST_PUBLIC_KEY: [u8; 32] =
    hex!("88dc3417d5058ec4b4503e0c12ea1a0a89be200fe98922423d4334014fa6b0ee");

/// Signing key of conformance vector 2 (Ed25519 seed).
pub const TEST_PRIVATE_KEY: [u8; 32] =
    hex!("8cdc538e96f460da9d639afc5c226f477ce98684d77fb31e88db74c1f1dd86b2");

/// Ed25519 public key of [`TEST_PRIVATE_KEY`].
pub const TEST_SIGNER_PUBLIC_KEY: [u8; 32] =
    hex!("f41296779fd61a5bed6c2f506cc6c9ea93d6aeb357b9c69717193f434ba24ae7");

/// Destination of conformance vector 2, in Kusama SS58 form.
pub const DEST_ADDRESS_KSM: &str = "CtwdfrhECFs3FpvCGoiE4hwRC4UsSiM8WL899HjRdQbfYZY";

/// Raw account id behind [`DEST_ADDRESS_KSM`].
pub const DEST_PUBLIC_KEY: [u8; 32] =
    hex!("0e33fdfb980e4499e5c3576e742a563b6a4fc0f6f598b1917fd7a6fe393ffc72");

/// SS58 renderings of [`TEST_PUBLIC_KEY`] under various network prefixes.
pub const ADDRESS_KUSAMA: &str = "FfmSiZNJP72xtSaXiP2iUhBwWeMEvmjPrxY2ViVkWaeChDC";
pub const ADDRESS_POLKADOT: &str = "146SvjUZXoMaemdeiecyxgALeYMm8ZWh1yrGo8RtpoPfe7WL";
pub const ADDRESS_SUBSTRATE: &str = "5FA9nQDVg267DEd8m1ZypXLBnvN7SFxYwV7ndqSYGiN9TTpu";
pub const ADDRESS_POLYMESH: &str = "2FYN2dyQ9HrJXUVDb3BGVVMSQN5Hnm4wHGVrBL9WP4XX1sMM";
pub const ADDRESS_PARALLEL: &str = "p8E31LASR1GQvrf4aWPubLczC1oSNWhG3zWgmFcqFq94JeAvq";

/// Vector 1: balances transfer of 12345 to [`TEST_PUBLIC_KEY`], nonce 0.
pub const VECTOR1_CALL: &[u8] = &hex!(
    "040088dc3417d5058ec4b4503e0c12ea1a0a89be200fe98922423d4334014fa6b0eee5c0"
);

pub const VECTOR1_PAYLOAD: &[u8] = &hex!(
    "040088dc3417d5058ec4b4503e0c12ea1a0a89be200fe98922423d4334014fa6b0ee"
    "e5c0000000e307000002000000"
    "b0a8d493285c2df73290dfb7e61f870f17b41801197a149ca93654499ea3dafe"
    "4955dd4813f3e91ef3fd5a825b928af2fc50a71380085f753ccef00bb1582891"
);

/// Ed25519 signature over [`VECTOR1_PAYLOAD`] recorded by the upstream
/// fixture (the matching secret is not published).
pub const VECTOR1_SIGNATURE: [u8; 64] = hex!(
    "71a827da70c66e2f74b5057bb678f16bbe907a97fa5f300021157fc54525ff84"
    "5bbc67c40fa80caf9095363ace88f019fcafcde34123e44c13e9e1068534d90e"
);

pub const VECTOR1_EXTRINSIC: &[u8] = &hex!(
    "2502"
    "8488dc3417d5058ec4b4503e0c12ea1a0a89be200fe98922423d4334014fa6b0ee"
    "0071a827da70c66e2f74b5057bb678f16bbe907a97fa5f300021157fc54525ff84"
    "5bbc67c40fa80caf9095363ace88f019fcafcde34123e44c13e9e1068534d90e"
    "000000"
    "040088dc3417d5058ec4b4503e0c12ea1a0a89be200fe98922423d4334014fa6b0eee5c0"
);

/// Vector 2: transfer of 10_000_000_000 to [`DEST_ADDRESS_KSM`], nonce 1,
/// signed with [`TEST_PRIVATE_KEY`], block hash = genesis hash.
pub const VECTOR2_EXTRINSIC: &[u8] = &hex!(
    "3502"
    "84f41296779fd61a5bed6c2f506cc6c9ea93d6aeb357b9c69717193f434ba24ae7"
    "00cd78b46eff36c433e642d7e9830805aab4f43eef70067ef32c8b2a294c510673"
    "a841c5f8a6e8900c03be40cfa475ae53e6f8aa61961563cb7cc0fa169ef9630d"
    "000400"
    "04000e33fdfb980e4499e5c3576e742a563b6a4fc0f6f598b1917fd7a6fe393ffc720700e40b5402"
);

pub const SPEC_VERSION: u32 = 2019;
pub const TRANSACTION_VERSION: u32 = 2;
