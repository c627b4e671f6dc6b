//! SS58 account addresses.
//!
//! Wire form: network prefix (one byte below 64, otherwise the two-byte
//! form covering identifiers up to 16383), the 32-byte public key, and a
//! two-byte checksum, all base-58 encoded. The checksum is the first two
//! bytes of blake2b-512 over `"SS58PRE"` followed by prefix and key.

use blake2::{Blake2b512, Digest};
use std::fmt;
use std::str::FromStr;

use crate::foundation::{AccountId, Result, SigningError};

/// Network identifiers registered by the supported chains.
pub const NETWORK_POLKADOT: u16 = 0;
pub const NETWORK_KUSAMA: u16 = 2;
pub const NETWORK_ASTAR: u16 = 5;
pub const NETWORK_ACALA: u16 = 10;
pub const NETWORK_POLYMESH: u16 = 12;
pub const NETWORK_SUBSTRATE: u16 = 42;
pub const NETWORK_PARALLEL: u16 = 172;

/// Largest identifier the two-byte prefix form can carry.
pub const NETWORK_ID_MAX: u16 = 0x3FFF;

const CHECKSUM_PREIMAGE: &[u8] = b"SS58PRE";
const CHECKSUM_LEN: usize = 2;
const KEY_LEN: usize = 32;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ss58Address {
    network: u16,
    public_key: AccountId,
}

impl Ss58Address {
    pub fn new(network: u16, public_key: AccountId) -> Result<Self> {
        if network > NETWORK_ID_MAX {
            return Err(SigningError::Address {
                details: format!("network id {} exceeds {}", network, NETWORK_ID_MAX),
            });
        }
        Ok(Self { network, public_key })
    }

    pub fn network(&self) -> u16 {
        self.network
    }

    pub fn public_key(&self) -> &AccountId {
        &self.public_key
    }

    pub fn encode(&self) -> String {
        let mut data = Vec::with_capacity(2 + KEY_LEN + CHECKSUM_LEN);
        if self.network < 64 {
            data.push(self.network as u8);
        } else {
            data.push(((self.network & 0x00FC) >> 2) as u8 | 0x40);
            data.push((self.network >> 8) as u8 | ((self.network & 0x0003) << 6) as u8);
        }
        data.extend_from_slice(&self.public_key);
        let checksum = checksum(&data);
        data.extend_from_slice(&checksum);
        bs58::encode(data).into_string()
    }
}

impl FromStr for Ss58Address {
    type Err = SigningError;

    fn from_str(s: &str) -> Result<Self> {
        let data = bs58::decode(s)
            .into_vec()
            .map_err(|e| SigningError::Address { details: format!("base58: {}", e) })?;

        let first = *data
            .first()
            .ok_or_else(|| SigningError::address("empty address"))?;
        let (network, prefix_len) = match first {
            0..=63 => (first as u16, 1),
            64..=127 => {
                let second = *data
                    .get(1)
                    .ok_or_else(|| SigningError::address("truncated network prefix"))?;
                let lower = ((first & 0x3F) as u16) << 2 | (second >> 6) as u16;
                let upper = ((second & 0x3F) as u16) << 8;
                (lower | upper, 2)
            }
            _ => {
                return Err(SigningError::Address {
                    details: format!("reserved prefix byte 0x{:02x}", first),
                })
            }
        };

        if data.len() != prefix_len + KEY_LEN + CHECKSUM_LEN {
            return Err(SigningError::Address {
                details: format!("unexpected payload length {}", data.len()),
            });
        }

        let (body, tail) = data.split_at(data.len() - CHECKSUM_LEN);
        if checksum(body) != tail {
            return Err(SigningError::address("checksum mismatch"));
        }

        let mut public_key = [0u8; KEY_LEN];
        public_key.copy_from_slice(&body[prefix_len..]);
        Ok(Self { network, public_key })
    }
}

impl fmt::Display for Ss58Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut hasher = Blake2b512::new();
    hasher.update(CHECKSUM_PREIMAGE);
    hasher.update(data);
    let hash = hasher.finalize();
    [hash[0], hash[1]]
}
