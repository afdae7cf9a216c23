//! Query handlers for the T2T Bridge contract.
//!
//! All queries are read-only and callable by anyone.

use common::{format_evm_address, TransferIntent, INTENT_ENCODING_VERSION};
use cosmwasm_std::{Binary, Deps, Order, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::msg::{
    ChainSupportedResponse, ConfigResponse, IntentHashResponse, NonceStatusResponse,
    RedemptionResponse, StatsResponse, SupportedChainsResponse, SwapResponse,
    TokenMappingResponse, TokenMappingsResponse, TokenSupportedResponse,
};
use crate::state::{
    CONFIG, DEFAULT_LIMIT, MAX_LIMIT, REDEMPTIONS, STATS, SUPPORTED_CHAINS, SWAPS,
    TOKEN_MAPPINGS, USED_NONCES,
};

// ============================================================================
// Core Queries
// ============================================================================

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        validator: format_evm_address(&config.validator),
        this_chain_id: config.this_chain_id,
        intent_encoding_version: INTENT_ENCODING_VERSION,
    })
}

/// Query swap/redeem counters.
pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.may_load(deps.storage)?.unwrap_or_default();
    Ok(StatsResponse {
        total_swaps: stats.total_swaps,
        total_redemptions: stats.total_redemptions,
    })
}

// ============================================================================
// Whitelist Queries
// ============================================================================

pub fn query_is_chain_supported(deps: Deps, chain_id: u64) -> StdResult<ChainSupportedResponse> {
    Ok(ChainSupportedResponse {
        chain_id,
        supported: SUPPORTED_CHAINS.has(deps.storage, chain_id),
    })
}

/// A token that is not a valid address is reported as unsupported.
pub fn query_is_token_supported(
    deps: Deps,
    token: String,
    chain_id: u64,
) -> StdResult<TokenSupportedResponse> {
    let supported = match deps.api.addr_validate(&token) {
        Ok(addr) => TOKEN_MAPPINGS.has(deps.storage, (&addr, chain_id)),
        Err(_) => false,
    };
    Ok(TokenSupportedResponse {
        token,
        chain_id,
        supported,
    })
}

/// List whitelisted chains in ascending order.
pub fn query_supported_chains(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<SupportedChainsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let chains = SUPPORTED_CHAINS
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;

    Ok(SupportedChainsResponse { chains })
}

pub fn query_token_mapping(
    deps: Deps,
    token: String,
    chain_id: u64,
) -> StdResult<Option<TokenMappingResponse>> {
    let local_token = deps.api.addr_validate(&token)?;
    let mapping = TOKEN_MAPPINGS.may_load(deps.storage, (&local_token, chain_id))?;
    Ok(mapping.map(|remote_token| TokenMappingResponse {
        local_token,
        remote_token,
        chain_id,
    }))
}

/// List token mappings ordered by (local token, chain id).
pub fn query_token_mappings(
    deps: Deps,
    start_after: Option<(String, u64)>,
    limit: Option<u32>,
) -> StdResult<TokenMappingsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .as_ref()
        .map(|(token, chain_id)| deps.api.addr_validate(token).map(|addr| (addr, *chain_id)))
        .transpose()?;
    let start = start_addr
        .as_ref()
        .map(|(addr, chain_id)| Bound::exclusive((addr, *chain_id)));

    let mappings = TOKEN_MAPPINGS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let ((local_token, chain_id), remote_token) = item?;
            Ok(TokenMappingResponse {
                local_token,
                remote_token,
                chain_id,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TokenMappingsResponse { mappings })
}

// ============================================================================
// Nonce & Intent Queries
// ============================================================================

pub fn query_nonce_status(deps: Deps, user: String, nonce: u64) -> StdResult<NonceStatusResponse> {
    let addr = deps.api.addr_validate(&user)?;
    Ok(NonceStatusResponse {
        used: USED_NONCES.has(deps.storage, (&addr, nonce)),
        user,
        nonce,
    })
}

/// Query an announced outgoing intent.
pub fn query_swap(deps: Deps, sender: String, nonce: u64) -> StdResult<Option<SwapResponse>> {
    let sender = deps.api.addr_validate(&sender)?;
    let record = SWAPS.may_load(deps.storage, (&sender, nonce))?;
    Ok(record.map(|r| SwapResponse {
        sender: r.sender,
        receiver: r.receiver,
        local_token: r.local_token,
        remote_token: r.remote_token,
        dest_chain_id: r.dest_chain_id,
        amount: r.amount,
        nonce: r.nonce,
        status: r.status,
        timestamp: r.timestamp,
    }))
}

/// Query a completed incoming intent.
pub fn query_redemption(
    deps: Deps,
    receiver: String,
    nonce: u64,
) -> StdResult<Option<RedemptionResponse>> {
    let receiver = deps.api.addr_validate(&receiver)?;
    let record = REDEMPTIONS.may_load(deps.storage, (&receiver, nonce))?;
    Ok(record.map(|r| RedemptionResponse {
        receiver: r.receiver,
        token: r.token,
        amount: r.amount,
        nonce: r.nonce,
        status: r.status,
        timestamp: r.timestamp,
    }))
}

/// Compute the bytes a validator signs for a redeem.
///
/// Uses the same codec the contract verifies against, so relayers do not
/// have to re-implement it.
pub fn query_compute_intent_hash(
    receiver: String,
    token: String,
    chain_id: u64,
    amount: Uint128,
    nonce: u64,
) -> StdResult<IntentHashResponse> {
    let intent = TransferIntent::new(receiver, token, chain_id, amount, nonce);
    Ok(IntentHashResponse {
        encoded: Binary::from(intent.encode().to_vec()),
        intent_hash: Binary::from(intent.hash().to_vec()),
        signing_digest: Binary::from(intent.signing_digest().to_vec()),
    })
}
