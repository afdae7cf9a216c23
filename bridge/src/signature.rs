//! Validator signature verification.
//!
//! The validator signs `keccak256(encoded intent)` as an Ethereum signed
//! message. Recovery goes through the host's secp256k1 API, so no curve code
//! is compiled into the contract.

use common::{eth_signed_message_hash, evm_address_from_pubkey, keccak256, RecoverableSignature};
use cosmwasm_std::Api;

use crate::error::ContractError;

/// Recover the EVM address that signed a canonical intent encoding.
///
/// Any malformed signature, or one the host cannot recover, is reported as
/// `InvalidSignature`.
pub fn recover_signer(
    api: &dyn Api,
    encoded: &[u8],
    signature: &RecoverableSignature,
) -> Result<[u8; 20], ContractError> {
    let (compact, recovery_id) = signature
        .to_compact()
        .ok_or(ContractError::InvalidSignature)?;

    let digest = eth_signed_message_hash(&keccak256(encoded));
    let pubkey = api
        .secp256k1_recover_pubkey(&digest, &compact, recovery_id)
        .map_err(|_| ContractError::InvalidSignature)?;

    evm_address_from_pubkey(&pubkey).ok_or(ContractError::InvalidSignature)
}

/// Check that `signature` over `encoded` was produced by `validator`
pub fn verify_validator_signature(
    api: &dyn Api,
    encoded: &[u8],
    signature: &RecoverableSignature,
    validator: &[u8; 20],
) -> Result<(), ContractError> {
    let signer = recover_signer(api, encoded, signature)?;
    if &signer != validator {
        return Err(ContractError::InvalidSignature);
    }
    Ok(())
}
