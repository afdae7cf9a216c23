use cosmwasm_std::StdError;
use thiserror::Error;

use crate::msg::Role;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    /// Transfer, allowance and burn failures from the CW20 base implementation
    #[error("{0}")]
    Cw20(#[from] cw20_base::ContractError),

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: caller does not hold the {role} role")]
    MissingRole { role: Role },

    #[error("Invalid zero amount")]
    InvalidZeroAmount,

    #[error("Minting cannot exceed the supply cap")]
    CannotExceedCap,
}
