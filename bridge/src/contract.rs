//! T2T Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use common::{format_evm_address, parse_evm_address};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_exclude_token, execute_include_token, execute_redeem, execute_swap,
    execute_update_chain_by_id,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_compute_intent_hash, query_config, query_is_chain_supported, query_is_token_supported,
    query_nonce_status, query_redemption, query_stats, query_supported_chains, query_swap,
    query_token_mapping, query_token_mappings,
};
use crate::state::{Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, STATS};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // Admin defaults to the deployer
    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender,
    };

    let validator =
        parse_evm_address(&msg.validator).map_err(|e| ContractError::InvalidAddress {
            reason: format!("validator: {}", e),
        })?;

    if msg.this_chain_id == 0 {
        return Err(ContractError::InvalidChainId {
            chain_id: msg.this_chain_id,
        });
    }

    let config = Config {
        admin,
        validator,
        this_chain_id: msg.this_chain_id,
    };
    CONFIG.save(deps.storage, &config)?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("validator", format_evm_address(&config.validator))
        .add_attribute("this_chain_id", config.this_chain_id.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Whitelist administration
        ExecuteMsg::UpdateChainById { chain_id, enabled } => {
            execute_update_chain_by_id(deps, info, chain_id, enabled)
        }
        ExecuteMsg::IncludeToken {
            local_token,
            remote_token,
            chain_id,
        } => execute_include_token(deps, info, local_token, remote_token, chain_id),
        ExecuteMsg::ExcludeToken {
            local_token,
            chain_id,
        } => execute_exclude_token(deps, info, local_token, chain_id),

        // Transfers
        ExecuteMsg::Swap {
            receiver,
            token,
            amount,
            chain_id,
            nonce,
        } => execute_swap(deps, env, info, receiver, token, amount, chain_id, nonce),
        ExecuteMsg::Redeem {
            receiver,
            token,
            amount,
            nonce,
            chain_id,
            signature,
        } => execute_redeem(
            deps, env, info, receiver, token, amount, nonce, chain_id, signature,
        ),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
        QueryMsg::IsChainSupported { chain_id } => {
            to_json_binary(&query_is_chain_supported(deps, chain_id)?)
        }
        QueryMsg::IsTokenSupported { token, chain_id } => {
            to_json_binary(&query_is_token_supported(deps, token, chain_id)?)
        }
        QueryMsg::NonceStatus { user, nonce } => {
            to_json_binary(&query_nonce_status(deps, user, nonce)?)
        }
        QueryMsg::SupportedChains { start_after, limit } => {
            to_json_binary(&query_supported_chains(deps, start_after, limit)?)
        }
        QueryMsg::TokenMapping { token, chain_id } => {
            to_json_binary(&query_token_mapping(deps, token, chain_id)?)
        }
        QueryMsg::TokenMappings { start_after, limit } => {
            to_json_binary(&query_token_mappings(deps, start_after, limit)?)
        }
        QueryMsg::Swap { sender, nonce } => to_json_binary(&query_swap(deps, sender, nonce)?),
        QueryMsg::Redemption { receiver, nonce } => {
            to_json_binary(&query_redemption(deps, receiver, nonce)?)
        }
        QueryMsg::ComputeIntentHash {
            receiver,
            token,
            chain_id,
            amount,
            nonce,
        } => to_json_binary(&query_compute_intent_hash(
            receiver, token, chain_id, amount, nonce,
        )?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if STATS.may_load(deps.storage)?.is_none() {
        STATS.save(deps.storage, &Stats::default())?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
