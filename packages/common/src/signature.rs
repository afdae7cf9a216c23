//! Recoverable secp256k1 signatures and EVM-style signer addresses.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, StdError, StdResult};

use crate::hash::keccak256;

/// Signature components as produced by `ethers.utils.splitSignature`
#[cw_serde]
pub struct RecoverableSignature {
    /// 32-byte `r` component
    pub r: Binary,
    /// 32-byte `s` component
    pub s: Binary,
    /// Recovery id, either Ethereum style (27/28) or raw (0/1)
    pub v: u8,
}

impl RecoverableSignature {
    pub fn new(r: [u8; 32], s: [u8; 32], v: u8) -> Self {
        Self {
            r: Binary::from(r.to_vec()),
            s: Binary::from(s.to_vec()),
            v,
        }
    }

    /// 64-byte `r || s` plus the raw recovery id, or `None` if malformed
    pub fn to_compact(&self) -> Option<([u8; 64], u8)> {
        if self.r.len() != 32 || self.s.len() != 32 {
            return None;
        }
        let recovery_id = match self.v {
            0 | 1 => self.v,
            27 | 28 => self.v - 27,
            _ => return None,
        };

        let mut compact = [0u8; 64];
        compact[..32].copy_from_slice(self.r.as_slice());
        compact[32..].copy_from_slice(self.s.as_slice());
        Some((compact, recovery_id))
    }
}

/// Derive the EVM address of an uncompressed secp256k1 public key.
///
/// Expects the 65-byte SEC1 form (`0x04 || x || y`); the address is the last
/// 20 bytes of `keccak256(x || y)`.
pub fn evm_address_from_pubkey(pubkey: &[u8]) -> Option<[u8; 20]> {
    if pubkey.len() != 65 || pubkey[0] != 0x04 {
        return None;
    }
    let hash = keccak256(&pubkey[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Some(address)
}

/// Parse a 0x-prefixed (or bare) 40 hex char EVM address
pub fn parse_evm_address(addr: &str) -> StdResult<[u8; 20]> {
    let hex_str = addr.strip_prefix("0x").unwrap_or(addr);

    if hex_str.len() != 40 {
        return Err(StdError::generic_err(format!(
            "Invalid EVM address length: expected 40 hex chars, got {}",
            hex_str.len()
        )));
    }

    let mut result = [0u8; 20];
    hex::decode_to_slice(hex_str, &mut result)
        .map_err(|e| StdError::generic_err(format!("Invalid hex: {}", e)))?;
    Ok(result)
}

/// Encode 20 bytes as a lowercase EVM hex string with 0x prefix
pub fn format_evm_address(bytes: &[u8; 20]) -> String {
    format!("0x{}", hex::encode(bytes))
}
