//! Canonical transfer intent encoding
//!
//! The validator authorizes a `Redeem` by signing the hash of this encoding,
//! and the destination bridge rebuilds it from the `Redeem` arguments. Any
//! difference in field order, width or address handling makes the bridge
//! recover a different signer instead of failing to decode, so this layout is
//! a wire contract. Bump [`INTENT_ENCODING_VERSION`] together with the
//! validator whenever it changes.
//!
//! # Byte Layout (160 bytes total)
//! - Bytes 0-31:    receiver (address word)
//! - Bytes 32-63:   token on the destination chain (address word)
//! - Bytes 64-95:   destination chain id (uint256, big-endian, left-padded)
//! - Bytes 96-127:  amount (uint256, big-endian, left-padded)
//! - Bytes 128-159: nonce (uint256, big-endian, left-padded)
//!
//! For EVM addresses this is byte-identical to Solidity
//! `abi.encode(address receiver, address token, uint256 chainId, uint256 amount, uint256 nonce)`.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

use crate::hash::{eth_signed_message_hash, keccak256};

/// Version of the encoding below, reported by the bridge `Config` query
pub const INTENT_ENCODING_VERSION: u8 = 1;

/// Length of [`TransferIntent::encode`] output
pub const INTENT_ENCODED_LEN: usize = 5 * 32;

/// The tuple a validator signs to authorize one redeem
#[cw_serde]
pub struct TransferIntent {
    /// Receiver on the destination chain
    pub receiver: String,
    /// Token address on the destination chain
    pub token: String,
    /// Destination chain id
    pub chain_id: u64,
    /// Amount in the token's smallest unit
    pub amount: Uint128,
    /// Per-user nonce
    pub nonce: u64,
}

impl TransferIntent {
    pub fn new(
        receiver: impl Into<String>,
        token: impl Into<String>,
        chain_id: u64,
        amount: Uint128,
        nonce: u64,
    ) -> Self {
        Self {
            receiver: receiver.into(),
            token: token.into(),
            chain_id,
            amount,
            nonce,
        }
    }

    /// Serialize into the fixed 160-byte layout
    pub fn encode(&self) -> [u8; INTENT_ENCODED_LEN] {
        let mut data = [0u8; INTENT_ENCODED_LEN];

        data[0..32].copy_from_slice(&address_word(&self.receiver));
        data[32..64].copy_from_slice(&address_word(&self.token));

        // u64 (8 bytes) goes into bytes 24-31 of its word
        data[64 + 24..96].copy_from_slice(&self.chain_id.to_be_bytes());

        // u128 (16 bytes) goes into bytes 16-31 of its word
        data[96 + 16..128].copy_from_slice(&self.amount.u128().to_be_bytes());

        data[128 + 24..160].copy_from_slice(&self.nonce.to_be_bytes());

        data
    }

    /// `keccak256(encode())`
    pub fn hash(&self) -> [u8; 32] {
        keccak256(&self.encode())
    }

    /// The digest that is actually signed (Ethereum signed message of [`Self::hash`])
    pub fn signing_digest(&self) -> [u8; 32] {
        eth_signed_message_hash(&self.hash())
    }
}

/// Encode an address as one 32-byte word.
///
/// - `0x` + 40 hex chars (EVM): raw 20 bytes left-padded, same as ABI `address`
/// - anything else (bech32 accounts, CW20 contracts, denoms): keccak256 of the string
pub fn address_word(addr: &str) -> [u8; 32] {
    if let Some(raw) = decode_evm_hex(addr) {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&raw);
        return word;
    }
    keccak256(addr.as_bytes())
}

fn decode_evm_hex(addr: &str) -> Option<[u8; 20]> {
    let hex_str = addr.strip_prefix("0x")?;
    if hex_str.len() != 40 {
        return None;
    }
    let mut raw = [0u8; 20];
    hex::decode_to_slice(hex_str, &mut raw).ok()?;
    Some(raw)
}
