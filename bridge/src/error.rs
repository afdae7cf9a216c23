//! Error types for the T2T Bridge contract
//!
//! Token contract failures (missing mint/burn role, insufficient allowance or
//! balance) are not represented here: they abort the transaction as the token
//! contract's own error.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only the receiver can collect the tokens")]
    NotReceiver,

    // ========================================================================
    // Whitelist Errors
    // ========================================================================

    #[error("Chain not supported: {chain_id}")]
    ChainNotSupported { chain_id: u64 },

    #[error("Token not supported: {token} for chain {chain_id}")]
    TokenNotSupported { token: String, chain_id: u64 },

    // ========================================================================
    // Replay & Authorization Proof Errors
    // ========================================================================

    #[error("Nonce already used: {nonce}")]
    NonceAlreadyUsed { nonce: u64 },

    #[error("Wrong chain: this transaction is for chain {target}, not {this_chain}")]
    WrongChain { target: u64, this_chain: u64 },

    #[error("Invalid signature")]
    InvalidSignature,

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid chain ID: {chain_id}")]
    InvalidChainId { chain_id: u64 },
}
