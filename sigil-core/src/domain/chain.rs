//! Per-chain signing configuration.
//!
//! Everything the pipeline needs to know about a target chain is carried in
//! an explicit [`ChainConfig`] value supplied by the caller; there is no
//! process-wide registry. Preset constructors cover the chains whose call
//! tables are known; anything else is built by the caller from its own
//! metadata.

use crate::domain::address;
use crate::domain::call::Call;
use crate::domain::signing::SignatureScheme;
use crate::foundation::{Result, SigningError};

/// Fixed (module_index, call_index) pairs for one chain's runtime.
///
/// A `None` slot means the chain does not expose that call (or its indices
/// are unknown); encoding such a call fails instead of guessing. Pallet
/// indices differ per chain while the call indices inside the balances and
/// staking pallets are stable across the supported runtimes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CallIndexTable {
    pub transfer: Option<(u8, u8)>,
    pub bond: Option<(u8, u8)>,
    pub bond_extra: Option<(u8, u8)>,
    pub unbond: Option<(u8, u8)>,
    pub withdraw_unbonded: Option<(u8, u8)>,
    pub nominate: Option<(u8, u8)>,
    pub chill: Option<(u8, u8)>,
    pub rebond: Option<(u8, u8)>,
}

impl CallIndexTable {
    /// Table for a runtime with the given balances pallet index and,
    /// optionally, a staking pallet index.
    pub fn for_pallets(balances: u8, staking: Option<u8>) -> Self {
        Self {
            transfer: Some((balances, 0x00)),
            bond: staking.map(|s| (s, 0x00)),
            bond_extra: staking.map(|s| (s, 0x01)),
            unbond: staking.map(|s| (s, 0x02)),
            withdraw_unbonded: staking.map(|s| (s, 0x03)),
            nominate: staking.map(|s| (s, 0x05)),
            chill: staking.map(|s| (s, 0x06)),
            rebond: staking.map(|s| (s, 0x13)),
        }
    }

    pub fn lookup(&self, call: &Call, network: u16) -> Result<(u8, u8)> {
        let slot = match call {
            Call::Transfer { .. } => self.transfer,
            Call::Bond { .. } => self.bond,
            Call::BondExtra { .. } => self.bond_extra,
            Call::Unbond { .. } => self.unbond,
            Call::WithdrawUnbonded { .. } => self.withdraw_unbonded,
            Call::Nominate { .. } => self.nominate,
            Call::Chill => self.chill,
            Call::Rebond { .. } => self.rebond,
        };
        slot.ok_or(SigningError::UnsupportedCall { call: call.name(), network })
    }
}

#[derive(Clone, Debug)]
pub struct ChainConfig {
    /// SS58 network identifier; doubles as the address version byte(s).
    pub network: u16,
    pub scheme: SignatureScheme,
    /// Whether accounts appear on the wire as `MultiAddress::Id` (with the
    /// 0x00 discriminant) or as a bare 32-byte account id.
    pub multi_address: bool,
    pub call_indices: CallIndexTable,
}

impl ChainConfig {
    pub fn polkadot() -> Self {
        Self {
            network: address::NETWORK_POLKADOT,
            scheme: SignatureScheme::Ed25519,
            multi_address: true,
            call_indices: CallIndexTable::for_pallets(0x05, Some(0x07)),
        }
    }

    /// Kusama keeps the pre-MultiAddress account encoding.
    pub fn kusama() -> Self {
        Self {
            network: address::NETWORK_KUSAMA,
            scheme: SignatureScheme::Ed25519,
            multi_address: false,
            call_indices: CallIndexTable::for_pallets(0x04, Some(0x06)),
        }
    }

    pub fn substrate_generic() -> Self {
        Self {
            network: address::NETWORK_SUBSTRATE,
            scheme: SignatureScheme::Sr25519,
            multi_address: true,
            call_indices: CallIndexTable::for_pallets(0x04, Some(0x06)),
        }
    }

    /// Preset lookup by network identifier.
    pub fn for_network(network: u16) -> Result<Self> {
        match network {
            address::NETWORK_POLKADOT => Ok(Self::polkadot()),
            address::NETWORK_KUSAMA => Ok(Self::kusama()),
            address::NETWORK_SUBSTRATE => Ok(Self::substrate_generic()),
            other => Err(SigningError::UnknownNetwork(other)),
        }
    }
}
