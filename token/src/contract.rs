use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Order, Response,
    StdError, StdResult, Uint128,
};
use cw2::set_contract_version;
use cw20::MinterResponse;
use cw20_base::allowances::{
    execute_burn_from, execute_decrease_allowance, execute_increase_allowance,
    execute_transfer_from, query_allowance,
};
use cw20_base::contract::{
    execute_burn, execute_send, execute_transfer, query_balance, query_token_info,
};
use cw20_base::state::{BALANCES, TOKEN_INFO};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{
    AdminResponse, ExecuteMsg, HasRoleResponse, InstantiateMsg, QueryMsg, Role,
    RoleMembersResponse,
};
use crate::state::{ADMIN, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_LIMIT, MAX_LIMIT, ROLES};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender.clone(),
    };

    // The base minter slot only carries the cap; minting is gated by roles
    let base_msg = cw20_base::msg::InstantiateMsg {
        name: msg.name,
        symbol: msg.symbol,
        decimals: msg.decimals,
        initial_balances: msg.initial_balances,
        mint: msg.cap.map(|cap| MinterResponse {
            minter: admin.to_string(),
            cap: Some(cap),
        }),
        marketing: None,
    };
    cw20_base::contract::instantiate(deps.branch(), env, info, base_msg)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    ADMIN.save(deps.storage, &admin)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Transfer { recipient, amount } => {
            Ok(execute_transfer(deps, env, info, recipient, amount)?)
        }
        ExecuteMsg::Burn { amount } => Ok(execute_burn(deps, env, info, amount)?),
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => Ok(execute_send(deps, env, info, contract, amount, msg)?),
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_increase_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_decrease_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => Ok(execute_transfer_from(
            deps, env, info, owner, recipient, amount,
        )?),
        ExecuteMsg::BurnFrom { owner, amount } => {
            ensure_role(deps.as_ref(), &info, Role::Burner)?;
            Ok(execute_burn_from(deps, env, info, owner, amount)?)
        }
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, info, recipient, amount),
        ExecuteMsg::GrantRole { role, account } => execute_grant_role(deps, info, role, account),
        ExecuteMsg::RevokeRole { role, account } => {
            execute_revoke_role(deps, info, role, account)
        }
    }
}

fn ensure_role(deps: Deps, info: &MessageInfo, role: Role) -> Result<(), ContractError> {
    if !ROLES.has(deps.storage, (role.as_str(), &info.sender)) {
        return Err(ContractError::MissingRole { role });
    }
    Ok(())
}

fn ensure_admin(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let admin = ADMIN.load(deps.storage)?;
    if info.sender != admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_role(deps.as_ref(), &info, Role::Minter)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    let mut token_info = TOKEN_INFO.load(deps.storage)?;
    token_info.total_supply = token_info
        .total_supply
        .checked_add(amount)
        .map_err(StdError::from)?;
    if let Some(cap) = token_info.get_cap() {
        if token_info.total_supply > cap {
            return Err(ContractError::CannotExceedCap);
        }
    }
    TOKEN_INFO.save(deps.storage, &token_info)?;

    let recipient_addr = deps.api.addr_validate(&recipient)?;
    BALANCES.update(
        deps.storage,
        &recipient_addr,
        |balance: Option<Uint128>| -> StdResult<_> {
            Ok(balance.unwrap_or_default().checked_add(amount)?)
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("to", recipient)
        .add_attribute("amount", amount)
        .add_attribute("minter", info.sender))
}

fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    account: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    let account = deps.api.addr_validate(&account)?;
    ROLES.save(deps.storage, (role.as_str(), &account), &true)?;

    Ok(Response::new()
        .add_attribute("action", "grant_role")
        .add_event(
            Event::new("role_granted")
                .add_attribute("role", role.as_str())
                .add_attribute("account", account)
                .add_attribute("sender", info.sender),
        ))
}

fn execute_revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    account: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    let account = deps.api.addr_validate(&account)?;
    ROLES.remove(deps.storage, (role.as_str(), &account));

    Ok(Response::new()
        .add_attribute("action", "revoke_role")
        .add_event(
            Event::new("role_revoked")
                .add_attribute("role", role.as_str())
                .add_attribute("account", account)
                .add_attribute("sender", info.sender),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::HasRole { role, account } => {
            to_json_binary(&query_has_role(deps, role, account)?)
        }
        QueryMsg::RoleMembers {
            role,
            start_after,
            limit,
        } => to_json_binary(&query_role_members(deps, role, start_after, limit)?),
        QueryMsg::Admin {} => to_json_binary(&query_admin(deps)?),
    }
}

fn query_has_role(deps: Deps, role: Role, account: String) -> StdResult<HasRoleResponse> {
    let addr = deps.api.addr_validate(&account)?;
    Ok(HasRoleResponse {
        role,
        has_role: ROLES.has(deps.storage, (role.as_str(), &addr)),
        account,
    })
}

fn query_role_members(
    deps: Deps,
    role: Role,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<RoleMembersResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let members = ROLES
        .prefix(role.as_str())
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|addr| addr.to_string()))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(RoleMembersResponse { role, members })
}

fn query_admin(deps: Deps) -> StdResult<AdminResponse> {
    let admin = ADMIN.load(deps.storage)?;
    Ok(AdminResponse {
        admin: admin.to_string(),
    })
}
