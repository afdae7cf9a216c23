//! State definitions for the T2T Bridge contract
//!
//! All whitelist, mapping and nonce state is owned by this instance. Nothing
//! here is ever read or written by another chain's instance.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration, fixed at instantiation
#[cw_serde]
pub struct Config {
    /// Address allowed to change whitelists and token mappings
    pub admin: Addr,
    /// EVM-style address whose signature authorizes every redeem
    pub validator: [u8; 20],
    /// Chain id this instance considers its own
    pub this_chain_id: u64,
}

/// Bridge statistics
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    /// Number of successful swaps (burns)
    pub total_swaps: u64,
    /// Number of successful redeems (mints)
    pub total_redemptions: u64,
}

// ============================================================================
// Two-Phase Intent Records
// ============================================================================

/// Lifecycle of a transfer intent as seen by one instance
#[cw_serde]
pub enum IntentStatus {
    /// Tokens burned here, waiting for the destination leg
    Announced,
    /// Tokens minted here, intent consumed
    Completed,
}

/// Outgoing intent recorded by `Swap`
#[cw_serde]
pub struct SwapRecord {
    pub sender: Addr,
    /// Receiver on the destination chain
    pub receiver: String,
    /// Token burned on this chain
    pub local_token: Addr,
    /// Counterpart token on the destination chain
    pub remote_token: String,
    pub dest_chain_id: u64,
    pub amount: Uint128,
    pub nonce: u64,
    pub status: IntentStatus,
    pub timestamp: Timestamp,
}

/// Incoming intent recorded by `Redeem`
#[cw_serde]
pub struct RedemptionRecord {
    pub receiver: Addr,
    /// Token minted on this chain
    pub token: Addr,
    pub amount: Uint128,
    pub nonce: u64,
    pub status: IntentStatus,
    pub timestamp: Timestamp,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:t2t-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default page size for enumeration queries
pub const DEFAULT_LIMIT: u32 = 10;

/// Maximum page size for enumeration queries
pub const MAX_LIMIT: u32 = 50;

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Bridge statistics
pub const STATS: Item<Stats> = Item::new("stats");

/// Whitelisted chains. Only enabled chains are stored.
/// Key: chain_id, Value: always true
pub const SUPPORTED_CHAINS: Map<u64, bool> = Map::new("supported_chains");

/// Bridgeable tokens per destination chain
/// Key: (local token, destination chain_id), Value: token address on that chain
pub const TOKEN_MAPPINGS: Map<(&Addr, u64), String> = Map::new("token_mappings");

/// Consumed nonces, shared by `Swap` (sender) and `Redeem` (receiver).
/// Append-only: entries are never removed.
/// Key: (user, nonce), Value: always true
pub const USED_NONCES: Map<(&Addr, u64), bool> = Map::new("used_nonces");

/// Announced outgoing intents
/// Key: (sender, nonce)
pub const SWAPS: Map<(&Addr, u64), SwapRecord> = Map::new("swaps");

/// Completed incoming intents
/// Key: (receiver, nonce)
pub const REDEMPTIONS: Map<(&Addr, u64), RedemptionRecord> = Map::new("redemptions");
