pub type Hash32 = [u8; 32];

/// Raw 32-byte account identifier (a public key on the supported curves).
pub type AccountId = [u8; 32];

pub type Signature64 = [u8; 64];
