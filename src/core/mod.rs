//! The invoice model, its builder, totals calculation and error types.
//!
//! The model follows the EN 16931 semantic data model: one [`Invoice`]
//! aggregate that owns every party, line, allowance and tax entry by value.

mod builder;
pub mod codes;
pub mod decimal;
mod error;
mod profile;
pub(crate) mod totals;
mod types;
pub mod units;

pub use builder::*;
pub use error::*;
pub use profile::*;
pub use totals::TotalsOptions;
pub use types::*;
pub use units::is_known_unit_code;
