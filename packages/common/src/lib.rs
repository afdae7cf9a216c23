//! Common - Shared Transfer Intent Codec for T2T Bridge Contracts
//!
//! This package holds the one canonical encoding of a transfer intent. The
//! bridge contract uses it to verify `Redeem` signatures and off-chain
//! validators/relayers use it to produce them, so both sides always hash the
//! same bytes.
//!
//! The `signer` feature adds [`ValidatorKey`] for off-chain signing. It pulls
//! in `k256` and is never enabled by the contracts themselves.

pub mod hash;
pub mod intent;
pub mod signature;
#[cfg(feature = "signer")]
pub mod signer;

pub use hash::{bytes32_to_hex, eth_signed_message_hash, keccak256};
pub use intent::{address_word, TransferIntent, INTENT_ENCODED_LEN, INTENT_ENCODING_VERSION};
pub use signature::{
    evm_address_from_pubkey, format_evm_address, parse_evm_address, RecoverableSignature,
};
#[cfg(feature = "signer")]
pub use signer::{SignerError, ValidatorKey};
