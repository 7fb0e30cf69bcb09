use super::*;

pub mod ledger;
pub mod appreciating;
pub mod rebasing;
pub mod holder;
pub mod access_registry;
pub mod price_oracle;

pub use ledger::*;
pub use appreciating::*;
pub use rebasing::*;
pub use holder::*;
pub use access_registry::*;
pub use price_oracle::*;
