//! Message types for the T2T Bridge contract

use common::RecoverableSignature;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};

use crate::state::IntentStatus;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address for whitelist management (defaults to the instantiator)
    pub admin: Option<String>,
    /// Validator EVM address (0x-prefixed hex) whose signatures authorize redeems
    pub validator: String,
    /// Chain id of the chain this instance runs on
    pub this_chain_id: u64,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Whitelist Administration (admin only)
    // ========================================================================
    /// Enable or disable a chain as swap destination / redeem target
    UpdateChainById { chain_id: u64, enabled: bool },

    /// Map a local token to its counterpart on `chain_id`
    IncludeToken {
        /// CW20 contract on this chain
        local_token: String,
        /// Token address on the destination chain
        remote_token: String,
        /// Destination chain id
        chain_id: u64,
    },

    /// Remove the mapping of a local token for `chain_id`
    ExcludeToken { local_token: String, chain_id: u64 },

    // ========================================================================
    // Transfers
    // ========================================================================
    /// Burn `amount` of `token` from the caller and announce the transfer.
    ///
    /// The caller must have granted this contract a CW20 allowance of at
    /// least `amount`.
    Swap {
        /// Receiver on the destination chain
        receiver: String,
        /// Local token to burn
        token: String,
        amount: Uint128,
        /// Destination chain id
        chain_id: u64,
        /// Caller-chosen nonce, usable once per caller
        nonce: u64,
    },

    /// Mint tokens announced on another chain, authorized by the validator.
    ///
    /// Authorization: the receiver only
    Redeem {
        receiver: String,
        /// Token on this chain
        token: String,
        amount: Uint128,
        nonce: u64,
        /// Chain the signed intent was issued for (must be this chain)
        chain_id: u64,
        signature: RecoverableSignature,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Returns swap/redeem counters
    #[returns(StatsResponse)]
    Stats {},

    /// Whether a chain is whitelisted
    #[returns(ChainSupportedResponse)]
    IsChainSupported { chain_id: u64 },

    /// Whether a local token is bridgeable to a chain
    #[returns(TokenSupportedResponse)]
    IsTokenSupported { token: String, chain_id: u64 },

    /// Whether a user's nonce has been consumed
    #[returns(NonceStatusResponse)]
    NonceStatus { user: String, nonce: u64 },

    /// List whitelisted chains (paginated)
    #[returns(SupportedChainsResponse)]
    SupportedChains {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Get the remote counterpart of a local token
    #[returns(Option<TokenMappingResponse>)]
    TokenMapping { token: String, chain_id: u64 },

    /// List all token mappings (paginated)
    #[returns(TokenMappingsResponse)]
    TokenMappings {
        /// Pagination cursor: (local token, chain_id) of the last entry seen
        start_after: Option<(String, u64)>,
        limit: Option<u32>,
    },

    /// Outgoing intent announced by `sender` with `nonce`
    #[returns(Option<SwapResponse>)]
    Swap { sender: String, nonce: u64 },

    /// Incoming intent completed for `receiver` with `nonce`
    #[returns(Option<RedemptionResponse>)]
    Redemption { receiver: String, nonce: u64 },

    /// Compute the payload a validator must sign for a redeem
    #[returns(IntentHashResponse)]
    ComputeIntentHash {
        receiver: String,
        token: String,
        chain_id: u64,
        amount: Uint128,
        nonce: u64,
    },
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    /// Validator EVM address, lowercase 0x hex
    pub validator: String,
    pub this_chain_id: u64,
    /// Version of the signed intent encoding
    pub intent_encoding_version: u8,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_swaps: u64,
    pub total_redemptions: u64,
}

#[cw_serde]
pub struct ChainSupportedResponse {
    pub chain_id: u64,
    pub supported: bool,
}

#[cw_serde]
pub struct TokenSupportedResponse {
    pub token: String,
    pub chain_id: u64,
    pub supported: bool,
}

#[cw_serde]
pub struct NonceStatusResponse {
    pub user: String,
    pub nonce: u64,
    pub used: bool,
}

#[cw_serde]
pub struct SupportedChainsResponse {
    pub chains: Vec<u64>,
}

#[cw_serde]
pub struct TokenMappingResponse {
    pub local_token: Addr,
    pub remote_token: String,
    pub chain_id: u64,
}

#[cw_serde]
pub struct TokenMappingsResponse {
    pub mappings: Vec<TokenMappingResponse>,
}

#[cw_serde]
pub struct SwapResponse {
    pub sender: Addr,
    pub receiver: String,
    pub local_token: Addr,
    pub remote_token: String,
    pub dest_chain_id: u64,
    pub amount: Uint128,
    pub nonce: u64,
    pub status: IntentStatus,
    pub timestamp: Timestamp,
}

#[cw_serde]
pub struct RedemptionResponse {
    pub receiver: Addr,
    pub token: Addr,
    pub amount: Uint128,
    pub nonce: u64,
    pub status: IntentStatus,
    pub timestamp: Timestamp,
}

#[cw_serde]
pub struct IntentHashResponse {
    /// Canonical 160-byte encoding
    pub encoded: Binary,
    /// keccak256 of `encoded`
    pub intent_hash: Binary,
    /// Ethereum signed-message digest of `intent_hash` (what the validator signs)
    pub signing_digest: Binary,
}
