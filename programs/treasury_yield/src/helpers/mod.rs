use super::*;

pub mod access;
pub mod price_authority;
pub mod notifier;
pub mod compliance;
pub mod env;

pub use access::*;
pub use price_authority::*;
pub use notifier::*;
pub use compliance::*;
pub use env::*;
