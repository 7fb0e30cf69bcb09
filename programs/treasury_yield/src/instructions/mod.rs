use super::*;

pub mod admin;
pub mod open_holder;
pub mod mint_units;
pub mod redeem_units;
pub mod transfer_units;
pub mod sync_yield;
pub mod views;

pub use admin::*;
pub use open_holder::*;
pub use mint_units::*;
pub use redeem_units::*;
pub use transfer_units::*;
pub use sync_yield::*;
pub use views::*;
