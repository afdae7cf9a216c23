//! Two-chain test fixture shared by the bridge integration tests.
//!
//! Mirrors a real deployment: one bridge per chain (80001 and 97), each with
//! its own token, each whitelisting the other chain and mapping its token to
//! the other side's token. Both bridges trust the same validator key.

#![allow(dead_code)]

use common::{RecoverableSignature, TransferIntent, ValidatorKey};
use cosmwasm_std::{Addr, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use bridge::msg::{ExecuteMsg, InstantiateMsg, NonceStatusResponse, QueryMsg};
use token::msg::{
    ExecuteMsg as TokenExecuteMsg, InstantiateMsg as TokenInstantiateMsg,
    QueryMsg as TokenQueryMsg, Role,
};

pub const CHAIN_A: u64 = 80001;
pub const CHAIN_B: u64 = 97;

/// Hardhat account #0
pub const VALIDATOR_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

pub const INITIAL_BALANCE: u128 = 1_000_000_000;

// ============================================================================
// Contracts
// ============================================================================

pub fn contract_bridge() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        bridge::contract::execute,
        bridge::contract::instantiate,
        bridge::contract::query,
    );
    Box::new(contract)
}

pub fn contract_token() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        token::contract::execute,
        token::contract::instantiate,
        token::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Fixture
// ============================================================================

pub struct TestEnv {
    pub app: App,
    pub admin: Addr,
    pub user: Addr,
    pub other_user: Addr,
    /// Token on chain A, held by `user`
    pub token_a: Addr,
    /// Token on chain B, starts with zero supply
    pub token_b: Addr,
    pub bridge_a: Addr,
    pub bridge_b: Addr,
    pub validator: ValidatorKey,
}

/// Bridges and tokens only, no whitelist or roles
pub fn setup_bare() -> TestEnv {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");
    let user = Addr::unchecked("terra1user");
    let other_user = Addr::unchecked("terra1other");
    let validator = ValidatorKey::from_hex(VALIDATOR_KEY).unwrap();

    let token_code = app.store_code(contract_token());
    let bridge_code = app.store_code(contract_bridge());

    let token_a = app
        .instantiate_contract(
            token_code,
            admin.clone(),
            &TokenInstantiateMsg {
                name: "Mock Token A".to_string(),
                symbol: "MTK".to_string(),
                decimals: 18,
                initial_balances: vec![Cw20Coin {
                    address: user.to_string(),
                    amount: Uint128::new(INITIAL_BALANCE),
                }],
                admin: None,
                cap: None,
            },
            &[],
            "token-a",
            None,
        )
        .unwrap();

    let token_b = app
        .instantiate_contract(
            token_code,
            admin.clone(),
            &TokenInstantiateMsg {
                name: "Mock Token B".to_string(),
                symbol: "BTK".to_string(),
                decimals: 18,
                initial_balances: vec![],
                admin: None,
                cap: None,
            },
            &[],
            "token-b",
            None,
        )
        .unwrap();

    let bridge_a = instantiate_bridge(&mut app, bridge_code, &admin, &validator, CHAIN_A);
    let bridge_b = instantiate_bridge(&mut app, bridge_code, &admin, &validator, CHAIN_B);

    TestEnv {
        app,
        admin,
        user,
        other_user,
        token_a,
        token_b,
        bridge_a,
        bridge_b,
        validator,
    }
}

fn instantiate_bridge(
    app: &mut App,
    code_id: u64,
    admin: &Addr,
    validator: &ValidatorKey,
    chain_id: u64,
) -> Addr {
    app.instantiate_contract(
        code_id,
        admin.clone(),
        &InstantiateMsg {
            admin: None,
            validator: validator.address_hex(),
            this_chain_id: chain_id,
        },
        &[],
        format!("t2t-bridge-{}", chain_id),
        Some(admin.to_string()),
    )
    .unwrap()
}

/// Fully wired two-chain deployment with `user` approved on bridge A
pub fn setup() -> TestEnv {
    let mut env = setup_bare();
    let admin = env.admin.clone();

    // Each side whitelists the other
    env.app
        .execute_contract(
            admin.clone(),
            env.bridge_a.clone(),
            &ExecuteMsg::UpdateChainById {
                chain_id: CHAIN_B,
                enabled: true,
            },
            &[],
        )
        .unwrap();
    env.app
        .execute_contract(
            admin.clone(),
            env.bridge_b.clone(),
            &ExecuteMsg::UpdateChainById {
                chain_id: CHAIN_A,
                enabled: true,
            },
            &[],
        )
        .unwrap();

    env.app
        .execute_contract(
            admin.clone(),
            env.bridge_a.clone(),
            &ExecuteMsg::IncludeToken {
                local_token: env.token_a.to_string(),
                remote_token: env.token_b.to_string(),
                chain_id: CHAIN_B,
            },
            &[],
        )
        .unwrap();
    env.app
        .execute_contract(
            admin.clone(),
            env.bridge_b.clone(),
            &ExecuteMsg::IncludeToken {
                local_token: env.token_b.to_string(),
                remote_token: env.token_a.to_string(),
                chain_id: CHAIN_A,
            },
            &[],
        )
        .unwrap();

    // Bridges need both capabilities on their local token
    for (token, bridge) in [
        (env.token_a.clone(), env.bridge_a.clone()),
        (env.token_b.clone(), env.bridge_b.clone()),
    ] {
        for role in [Role::Minter, Role::Burner] {
            grant_role(&mut env.app, &admin, &token, role, &bridge).unwrap();
        }
    }

    let user = env.user.clone();
    let token_a = env.token_a.clone();
    let bridge_a = env.bridge_a.to_string();
    approve(&mut env, &user, &token_a, &bridge_a, INITIAL_BALANCE);

    env
}

// ============================================================================
// Actions
// ============================================================================

pub fn grant_role(
    app: &mut App,
    admin: &Addr,
    token: &Addr,
    role: Role,
    account: &Addr,
) -> anyhow::Result<AppResponse> {
    app.execute_contract(
        admin.clone(),
        token.clone(),
        &TokenExecuteMsg::GrantRole {
            role,
            account: account.to_string(),
        },
        &[],
    )
}

pub fn revoke_role(
    app: &mut App,
    admin: &Addr,
    token: &Addr,
    role: Role,
    account: &Addr,
) -> anyhow::Result<AppResponse> {
    app.execute_contract(
        admin.clone(),
        token.clone(),
        &TokenExecuteMsg::RevokeRole {
            role,
            account: account.to_string(),
        },
        &[],
    )
}

pub fn approve(env: &mut TestEnv, owner: &Addr, token: &Addr, spender: &str, amount: u128) {
    env.app
        .execute_contract(
            owner.clone(),
            token.clone(),
            &TokenExecuteMsg::IncreaseAllowance {
                spender: spender.to_string(),
                amount: Uint128::new(amount),
                expires: None,
            },
            &[],
        )
        .unwrap();
}

/// Swap `amount` of token A from `user` on bridge A towards chain B
pub fn swap_a_to_b(env: &mut TestEnv, amount: u128, nonce: u64) -> anyhow::Result<AppResponse> {
    let msg = ExecuteMsg::Swap {
        receiver: env.user.to_string(),
        token: env.token_a.to_string(),
        amount: Uint128::new(amount),
        chain_id: CHAIN_B,
        nonce,
    };
    env.app
        .execute_contract(env.user.clone(), env.bridge_a.clone(), &msg, &[])
}

/// Validator signature over an intent
pub fn sign(
    env: &TestEnv,
    receiver: &Addr,
    token: &Addr,
    chain_id: u64,
    amount: u128,
    nonce: u64,
) -> RecoverableSignature {
    let intent = TransferIntent::new(
        receiver.as_str(),
        token.as_str(),
        chain_id,
        Uint128::new(amount),
        nonce,
    );
    env.validator.sign_intent(&intent).unwrap()
}

/// Redeem on bridge B as `caller`
#[allow(clippy::too_many_arguments)]
pub fn redeem_on_b(
    env: &mut TestEnv,
    caller: &Addr,
    receiver: &Addr,
    token: &Addr,
    amount: u128,
    nonce: u64,
    chain_id: u64,
    signature: RecoverableSignature,
) -> anyhow::Result<AppResponse> {
    let msg = ExecuteMsg::Redeem {
        receiver: receiver.to_string(),
        token: token.to_string(),
        amount: Uint128::new(amount),
        nonce,
        chain_id,
        signature,
    };
    env.app
        .execute_contract(caller.clone(), env.bridge_b.clone(), &msg, &[])
}

// ============================================================================
// Queries
// ============================================================================

pub fn balance(app: &App, token: &Addr, account: &Addr) -> u128 {
    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &TokenQueryMsg::Balance {
                address: account.to_string(),
            },
        )
        .unwrap();
    res.balance.u128()
}

pub fn nonce_used(app: &App, bridge: &Addr, user: &Addr, nonce: u64) -> bool {
    let res: NonceStatusResponse = app
        .wrap()
        .query_wasm_smart(
            bridge,
            &QueryMsg::NonceStatus {
                user: user.to_string(),
                nonce,
            },
        )
        .unwrap();
    res.used
}

/// Attribute of a custom event emitted by a contract
pub fn event_attr(res: &AppResponse, event: &str, key: &str) -> Option<String> {
    let ty = format!("wasm-{}", event);
    res.events
        .iter()
        .filter(|e| e.ty == ty)
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}
