//! Outgoing transfer handler (Swap).
//!
//! Burns the caller's tokens on this chain and announces the intent for the
//! destination chain. The relayer picks up the `swap_initiated` event.

use cosmwasm_std::{to_json_binary, DepsMut, Env, Event, MessageInfo, Response, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::state::{
    IntentStatus, SwapRecord, CONFIG, STATS, SUPPORTED_CHAINS, SWAPS, TOKEN_MAPPINGS, USED_NONCES,
};

/// Execute handler for burning tokens bound for another chain.
///
/// Guards run in order: destination chain, token mapping, nonce, amount,
/// receiver.
/// Nothing is written until all of them pass.
#[allow(clippy::too_many_arguments)]
pub fn execute_swap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    receiver: String,
    token: String,
    amount: Uint128,
    chain_id: u64,
    nonce: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if !SUPPORTED_CHAINS.has(deps.storage, chain_id) {
        return Err(ContractError::ChainNotSupported { chain_id });
    }

    let not_supported = || ContractError::TokenNotSupported {
        token: token.clone(),
        chain_id,
    };
    let local_token = deps
        .api
        .addr_validate(&token)
        .map_err(|_| not_supported())?;
    let remote_token = TOKEN_MAPPINGS
        .may_load(deps.storage, (&local_token, chain_id))?
        .ok_or_else(not_supported)?;

    if USED_NONCES.has(deps.storage, (&info.sender, nonce)) {
        return Err(ContractError::NonceAlreadyUsed { nonce });
    }

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }

    if receiver.trim().is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "receiver cannot be empty".to_string(),
        });
    }

    // Bookkeeping first; a failing burn reverts all of it
    USED_NONCES.save(deps.storage, (&info.sender, nonce), &true)?;

    let record = SwapRecord {
        sender: info.sender.clone(),
        receiver: receiver.clone(),
        local_token: local_token.clone(),
        remote_token: remote_token.clone(),
        dest_chain_id: chain_id,
        amount,
        nonce,
        status: IntentStatus::Announced,
        timestamp: env.block.time,
    };
    SWAPS.save(deps.storage, (&info.sender, nonce), &record)?;

    STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.total_swaps += 1;
        Ok(stats)
    })?;

    let burn = WasmMsg::Execute {
        contract_addr: local_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::BurnFrom {
            owner: info.sender.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(burn)
        .add_attribute("action", "swap")
        .add_event(
            Event::new("swap_initiated")
                .add_attribute("receiver", receiver)
                .add_attribute("token", remote_token)
                .add_attribute("chain_to", chain_id.to_string())
                .add_attribute("amount", amount)
                .add_attribute("nonce", nonce.to_string())
                .add_attribute("chain_from", config.this_chain_id.to_string())
                .add_attribute("sender", info.sender),
        ))
}
