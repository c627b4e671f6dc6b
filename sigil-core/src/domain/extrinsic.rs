//! Extrinsic format v4.

use crate::domain::call::{MultiAddress, MULTI_ADDRESS_ID};
use crate::domain::payload::TxExtra;
use crate::domain::scale;
use crate::domain::signing::{SignatureScheme, SIGNATURE_LEN};
use crate::foundation::{AccountId, Result, Signature64, SigningError};

pub const EXTRINSIC_VERSION: u8 = 4;
pub const SIGNED_BIT: u8 = 0b1000_0000;

/// Assembles the network-ready transaction bytes.
///
/// Layout inside the compact length prefix: version byte (`0x80` signed bit
/// plus format version 4), signer address, scheme tag, 64-byte signature,
/// era, compact nonce, compact tip, call bytes.
pub fn assemble(
    signer: MultiAddress,
    scheme: SignatureScheme,
    signature: &Signature64,
    extra: &TxExtra,
    call: &[u8],
) -> Vec<u8> {
    let mut body = Vec::with_capacity(call.len() + 128);
    body.push(EXTRINSIC_VERSION | SIGNED_BIT);
    signer.encode_to(&mut body);
    body.push(scheme.tag());
    body.extend_from_slice(signature);
    extra.encode_to(&mut body);
    body.extend_from_slice(call);

    let mut out = Vec::with_capacity(body.len() + 4);
    scale::encode_bytes(&body, &mut out);
    out
}

/// Structural view of an encoded extrinsic, for round-trip checks.
#[derive(Clone, Debug)]
pub struct DecodedExtrinsic {
    pub signer: AccountId,
    pub scheme_tag: u8,
    pub signature: Signature64,
    pub era_bytes: Vec<u8>,
    pub nonce: u32,
    pub tip: u128,
    pub call: Vec<u8>,
}

/// Splits an encoded extrinsic back into its fields.
///
/// `multi_address` must match the chain that produced the bytes, since the
/// bare account form is not self-describing.
pub fn decode(encoded: &[u8], multi_address: bool) -> Result<DecodedExtrinsic> {
    let (body, consumed) = scale::decode_bytes(encoded)?;
    if consumed != encoded.len() {
        return Err(SigningError::codec("trailing bytes after extrinsic"));
    }

    let mut cursor = Cursor { data: body, pos: 0 };
    let version = cursor.take_byte()?;
    if version != (EXTRINSIC_VERSION | SIGNED_BIT) {
        return Err(SigningError::Codec {
            details: format!("unexpected extrinsic version byte 0x{:02x}", version),
        });
    }

    if multi_address {
        let tag = cursor.take_byte()?;
        if tag != MULTI_ADDRESS_ID {
            return Err(SigningError::Codec {
                details: format!("unsupported MultiAddress discriminant 0x{:02x}", tag),
            });
        }
    }
    let mut signer: AccountId = [0; 32];
    signer.copy_from_slice(cursor.take(32)?);

    let scheme_tag = cursor.take_byte()?;
    let mut signature: Signature64 = [0; SIGNATURE_LEN];
    signature.copy_from_slice(cursor.take(SIGNATURE_LEN)?);

    let era_first = cursor.take_byte()?;
    let era_bytes = if era_first == 0 {
        vec![era_first]
    } else {
        vec![era_first, cursor.take_byte()?]
    };

    let (nonce, used) = scale::decode_compact(cursor.rest())?;
    cursor.pos += used;
    let nonce = u32::try_from(nonce)
        .map_err(|_| SigningError::codec("nonce exceeds u32"))?;

    let (tip, used) = scale::decode_compact(cursor.rest())?;
    cursor.pos += used;

    let call = cursor.rest().to_vec();
    if call.len() < 2 {
        return Err(SigningError::codec("call bytes shorter than a call index"));
    }

    Ok(DecodedExtrinsic { signer, scheme_tag, signature, era_bytes, nonce, tip, call })
}

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.data.len() < self.pos + len {
            return Err(SigningError::codec("extrinsic body truncated"));
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn take_byte(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}
