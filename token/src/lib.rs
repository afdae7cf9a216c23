//! Bridgeable CW20 token.
//!
//! Standard CW20 behaviour comes from `cw20-base`. Minting and burning on
//! behalf of others are gated by `minter` and `burner` roles that only the
//! admin can grant; a bridge instance needs both to operate on this token.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
