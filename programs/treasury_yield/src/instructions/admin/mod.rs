use super::*;

pub mod initialize_access_registry;
pub mod initialize_price_oracle;
pub mod initialize_ledger;
pub mod update_listing;
pub mod update_ledger_flags;
pub mod update_yield_rate;

pub use initialize_access_registry::*;
pub use initialize_price_oracle::*;
pub use initialize_ledger::*;
pub use update_listing::*;
pub use update_ledger_flags::*;
pub use update_yield_rate::*;
