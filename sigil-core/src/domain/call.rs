//! Call encoding.
//!
//! A call encodes as `[module_index][call_index]` followed by its
//! SCALE-encoded arguments. The (module, call) pair comes from the chain's
//! [`CallIndexTable`](crate::domain::chain::CallIndexTable); the argument
//! shapes are fixed per variant.

use std::str::FromStr;

use crate::domain::address::Ss58Address;
use crate::domain::chain::ChainConfig;
use crate::domain::scale;
use crate::foundation::{AccountId, Result};

/// `MultiAddress::Id` discriminant.
pub const MULTI_ADDRESS_ID: u8 = 0x00;

/// Account destination as supplied by the caller: raw key or SS58 text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AccountAddress {
    PublicKey(AccountId),
    Ss58(String),
}

impl AccountAddress {
    /// Resolves to the raw 32-byte account id.
    ///
    /// SS58 input is accepted for any network; a prefix that differs from
    /// the configured chain is suspicious but not fatal (exchanges routinely
    /// render the same key under several prefixes), so it is only logged.
    pub fn resolve(&self, config: &ChainConfig) -> Result<AccountId> {
        match self {
            AccountAddress::PublicKey(key) => Ok(*key),
            AccountAddress::Ss58(text) => {
                let address = Ss58Address::from_str(text)?;
                if address.network() != config.network {
                    log::warn!(
                        "destination address has network {} but chain is {}",
                        address.network(),
                        config.network
                    );
                }
                Ok(*address.public_key())
            }
        }
    }
}

/// Account id in wire form: bare 32 bytes, or `MultiAddress::Id` on chains
/// that use the tagged representation.
#[derive(Clone, Copy, Debug)]
pub struct MultiAddress {
    account: AccountId,
    tagged: bool,
}

impl MultiAddress {
    pub fn new(account: AccountId, multi_address: bool) -> Self {
        Self { account, tagged: multi_address }
    }

    pub fn encode_to(&self, out: &mut Vec<u8>) {
        if self.tagged {
            out.push(MULTI_ADDRESS_ID);
        }
        out.extend_from_slice(&self.account);
    }
}

/// Where staking rewards are paid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RewardDestination {
    Staked,
    Stash,
    Controller,
    Account(AccountAddress),
    None,
}

impl RewardDestination {
    fn encode_to(&self, config: &ChainConfig, out: &mut Vec<u8>) -> Result<()> {
        match self {
            RewardDestination::Staked => out.push(0x00),
            RewardDestination::Stash => out.push(0x01),
            RewardDestination::Controller => out.push(0x02),
            RewardDestination::Account(address) => {
                out.push(0x03);
                // Always a bare account id, independent of the chain's
                // MultiAddress flag.
                out.extend_from_slice(&address.resolve(config)?);
            }
            RewardDestination::None => out.push(0x04),
        }
        Ok(())
    }
}

/// Closed union of the calls this core can encode.
///
/// Every variant corresponds to one fixed (module, call) slot in the
/// chain's call-index table; dispatch is a plain match.
#[derive(Clone, Debug)]
pub enum Call {
    Transfer { dest: AccountAddress, value: u128 },
    Bond { controller: Option<AccountAddress>, value: u128, reward: RewardDestination },
    BondExtra { value: u128 },
    Unbond { value: u128 },
    WithdrawUnbonded { num_slashing_spans: u32 },
    Nominate { targets: Vec<AccountAddress> },
    Chill,
    Rebond { value: u128 },
}

impl Call {
    pub fn name(&self) -> &'static str {
        match self {
            Call::Transfer { .. } => "transfer",
            Call::Bond { .. } => "bond",
            Call::BondExtra { .. } => "bond_extra",
            Call::Unbond { .. } => "unbond",
            Call::WithdrawUnbonded { .. } => "withdraw_unbonded",
            Call::Nominate { .. } => "nominate",
            Call::Chill => "chill",
            Call::Rebond { .. } => "rebond",
        }
    }
}

pub fn encode_call(call: &Call, config: &ChainConfig) -> Result<Vec<u8>> {
    let (module_index, call_index) = config.call_indices.lookup(call, config.network)?;
    let mut out = vec![module_index, call_index];
    match call {
        Call::Transfer { dest, value } => {
            MultiAddress::new(dest.resolve(config)?, config.multi_address).encode_to(&mut out);
            scale::encode_compact(*value, &mut out);
        }
        Call::Bond { controller, value, reward } => {
            if let Some(controller) = controller {
                MultiAddress::new(controller.resolve(config)?, config.multi_address)
                    .encode_to(&mut out);
            }
            scale::encode_compact(*value, &mut out);
            reward.encode_to(config, &mut out)?;
        }
        Call::BondExtra { value } | Call::Unbond { value } | Call::Rebond { value } => {
            scale::encode_compact(*value, &mut out);
        }
        Call::WithdrawUnbonded { num_slashing_spans } => {
            out.extend_from_slice(&num_slashing_spans.to_le_bytes());
        }
        Call::Nominate { targets } => {
            scale::encode_compact(targets.len() as u128, &mut out);
            for target in targets {
                MultiAddress::new(target.resolve(config)?, config.multi_address)
                    .encode_to(&mut out);
            }
        }
        Call::Chill => {}
    }
    Ok(out)
}
