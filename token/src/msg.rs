use std::fmt;

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, Cw20Coin, Expiration, TokenInfoResponse};

/// Capabilities the admin can hand out
#[cw_serde]
#[derive(Copy)]
pub enum Role {
    /// May call `Mint`
    Minter,
    /// May call `BurnFrom`
    Burner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Minter => "minter",
            Role::Burner => "burner",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub initial_balances: Vec<Cw20Coin>,
    /// Who may grant and revoke roles (defaults to the instantiator)
    pub admin: Option<String>,
    /// Optional ceiling on total supply
    pub cap: Option<Uint128>,
}

/// CW20 execute interface plus role management.
///
/// `Mint` and `BurnFrom` serialize exactly like their `cw20::Cw20ExecuteMsg`
/// counterparts so any CW20 caller can drive them.
#[cw_serde]
pub enum ExecuteMsg {
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    Burn {
        amount: Uint128,
    },
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    /// Requires the `burner` role and an allowance from `owner`
    BurnFrom {
        owner: String,
        amount: Uint128,
    },
    /// Requires the `minter` role
    Mint {
        recipient: String,
        amount: Uint128,
    },
    /// Admin: give `account` a role
    GrantRole {
        role: Role,
        account: String,
    },
    /// Admin: take a role away from `account`
    RevokeRole {
        role: Role,
        account: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BalanceResponse)]
    Balance { address: String },

    #[returns(TokenInfoResponse)]
    TokenInfo {},

    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },

    /// Whether `account` holds `role`
    #[returns(HasRoleResponse)]
    HasRole { role: Role, account: String },

    /// Accounts holding `role` (paginated)
    #[returns(RoleMembersResponse)]
    RoleMembers {
        role: Role,
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Returns the admin address
    #[returns(AdminResponse)]
    Admin {},
}

#[cw_serde]
pub struct HasRoleResponse {
    pub role: Role,
    pub account: String,
    pub has_role: bool,
}

#[cw_serde]
pub struct RoleMembersResponse {
    pub role: Role,
    pub members: Vec<String>,
}

#[cw_serde]
pub struct AdminResponse {
    pub admin: String,
}
