use super::*;

pub mod safe_math;
pub mod fixed_point;
pub mod interest;
pub mod conversion;


pub use safe_math::*;
pub use fixed_point::*;
pub use interest::*;
pub use conversion::*;
