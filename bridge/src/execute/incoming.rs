//! Incoming transfer handler (Redeem).
//!
//! Mints tokens announced on another chain once the validator's signature
//! over the transfer intent checks out.

use common::{RecoverableSignature, TransferIntent};
use cosmwasm_std::{to_json_binary, DepsMut, Env, Event, MessageInfo, Response, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::signature::verify_validator_signature;
use crate::state::{IntentStatus, RedemptionRecord, CONFIG, REDEMPTIONS, STATS, USED_NONCES};

/// Execute handler for minting a validator-authorized transfer.
///
/// Guards run in order: caller is receiver, chain binding, signature, nonce.
/// The nonce is only consumed after the signature has been verified, so a
/// forged call cannot burn someone else's nonce.
#[allow(clippy::too_many_arguments)]
pub fn execute_redeem(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    receiver: String,
    token: String,
    amount: Uint128,
    nonce: u64,
    chain_id: u64,
    signature: RecoverableSignature,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender.as_str() != receiver {
        return Err(ContractError::NotReceiver);
    }
    let receiver_addr = info.sender.clone();

    if chain_id != config.this_chain_id {
        return Err(ContractError::WrongChain {
            target: chain_id,
            this_chain: config.this_chain_id,
        });
    }

    // The intent is rebuilt from the caller's own arguments, exactly as signed
    let intent = TransferIntent::new(receiver.as_str(), token.as_str(), chain_id, amount, nonce);
    verify_validator_signature(
        deps.api,
        &intent.encode(),
        &signature,
        &config.validator,
    )?;

    if USED_NONCES.has(deps.storage, (&receiver_addr, nonce)) {
        return Err(ContractError::NonceAlreadyUsed { nonce });
    }

    let token_addr = deps.api.addr_validate(&token)?;

    USED_NONCES.save(deps.storage, (&receiver_addr, nonce), &true)?;

    let record = RedemptionRecord {
        receiver: receiver_addr.clone(),
        token: token_addr.clone(),
        amount,
        nonce,
        status: IntentStatus::Completed,
        timestamp: env.block.time,
    };
    REDEMPTIONS.save(deps.storage, (&receiver_addr, nonce), &record)?;

    STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.total_redemptions += 1;
        Ok(stats)
    })?;

    let mint = WasmMsg::Execute {
        contract_addr: token_addr.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: receiver_addr.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(mint)
        .add_attribute("action", "redeem")
        .add_event(
            Event::new("redeem_initiated")
                .add_attribute("receiver", receiver_addr)
                .add_attribute("token", token_addr)
                .add_attribute("amount", amount)
                .add_attribute("nonce", nonce.to_string()),
        ))
}
