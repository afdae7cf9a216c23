//! Execute handlers for the T2T Bridge contract.
//!
//! - `config` - Chain whitelist and token mapping administration
//! - `outgoing` - Swap (burn and announce)
//! - `incoming` - Redeem (verify and mint)

mod config;
mod incoming;
mod outgoing;

pub use config::*;
pub use incoming::*;
pub use outgoing::*;
