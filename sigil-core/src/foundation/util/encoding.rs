use crate::foundation::{Hash32, Result, SigningError};

pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    hex::decode(s.trim_start_matches("0x")).map_err(|e| e.into())
}

pub fn parse_hex_32bytes(s: &str) -> Result<Hash32> {
    let bytes = decode_hex(s)?;
    bytes
        .try_into()
        .map_err(|_| SigningError::invalid_value("expected 32 hex-encoded bytes"))
}
