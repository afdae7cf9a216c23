use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:t2t-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 50;

/// Role administrator
pub const ADMIN: Item<Addr> = Item::new("admin");

/// Role grants. Key: (role name, account). Revoking removes the entry.
pub const ROLES: Map<(&str, &Addr), bool> = Map::new("roles");
