//! T2T Bridge Contract - Validator-Authorized Burn-and-Mint Bridging
//!
//! One instance is deployed per chain. Instances never talk to each other;
//! an off-chain relayer carries announcements from one to the other.
//!
//! # Outgoing Flow (Swap)
//! 1. User approves this contract to burn `amount` of a whitelisted token
//! 2. User calls `Swap`; tokens are burned and the nonce is consumed
//! 3. A `swap_initiated` event announces the intent for the destination chain
//!
//! # Incoming Flow (Redeem)
//! 1. The validator signs the transfer intent observed on the source chain
//! 2. The receiver calls `Redeem` with that signature
//! 3. The signature, chain binding and nonce are checked, then tokens are minted
//!
//! # Security
//! - Single validator signature authorizes every mint
//! - Signed intent binds receiver, token, chain, amount and nonce
//! - Per-user nonces are consumed once and never released
//! - All checks run before any state is written

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod signature;
pub mod state;

pub use crate::error::ContractError;
pub use crate::signature::{recover_signer, verify_validator_signature};
pub use common::{TransferIntent, INTENT_ENCODING_VERSION};
