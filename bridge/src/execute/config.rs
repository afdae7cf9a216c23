//! Whitelist administration handlers.
//!
//! This module handles:
//! - Chain whitelist (enable/disable)
//! - Token mappings (include/exclude)

use cosmwasm_std::{Deps, DepsMut, Event, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{CONFIG, SUPPORTED_CHAINS, TOKEN_MAPPINGS};

fn ensure_admin(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

// ============================================================================
// Chain Whitelist
// ============================================================================

/// Enable or disable a chain. Setting the current value again is a no-op
/// that still emits the event.
pub fn execute_update_chain_by_id(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    enabled: bool,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    if enabled {
        SUPPORTED_CHAINS.save(deps.storage, chain_id, &true)?;
    } else {
        SUPPORTED_CHAINS.remove(deps.storage, chain_id);
    }

    Ok(Response::new()
        .add_attribute("action", "update_chain_by_id")
        .add_event(
            Event::new("chain_by_id_updated")
                .add_attribute("chain_id", chain_id.to_string())
                .add_attribute("enabled", enabled.to_string()),
        ))
}

// ============================================================================
// Token Mappings
// ============================================================================

/// Map `local_token` to `remote_token` for `chain_id`, overwriting any
/// previous mapping.
pub fn execute_include_token(
    deps: DepsMut,
    info: MessageInfo,
    local_token: String,
    remote_token: String,
    chain_id: u64,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    let local_token = deps.api.addr_validate(&local_token)?;
    if remote_token.trim().is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "remote_token cannot be empty".to_string(),
        });
    }

    TOKEN_MAPPINGS.save(deps.storage, (&local_token, chain_id), &remote_token)?;

    Ok(Response::new()
        .add_attribute("action", "include_token")
        .add_event(
            Event::new("token_included")
                .add_attribute("local_token", local_token)
                .add_attribute("remote_token", remote_token)
                .add_attribute("chain_id", chain_id.to_string()),
        ))
}

/// Remove the mapping of `local_token` for `chain_id`. Removing an absent
/// mapping succeeds.
pub fn execute_exclude_token(
    deps: DepsMut,
    info: MessageInfo,
    local_token: String,
    chain_id: u64,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    let local_token = deps.api.addr_validate(&local_token)?;
    let existed = TOKEN_MAPPINGS.has(deps.storage, (&local_token, chain_id));
    TOKEN_MAPPINGS.remove(deps.storage, (&local_token, chain_id));

    Ok(Response::new()
        .add_attribute("action", "exclude_token")
        .add_event(
            Event::new("token_excluded")
                .add_attribute("local_token", local_token)
                .add_attribute("chain_id", chain_id.to_string())
                .add_attribute("existed", existed.to_string()),
        ))
}
