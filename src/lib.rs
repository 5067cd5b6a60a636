//! Balance widget core for the web wallet.
//!
//! The wallet's frontend renders the markup; this crate owns the logic
//! behind its balance input: masking typed amounts, converting them between
//! the displayed SI unit and the canonical base-unit representation the
//! chain accounts in (fixed 12 fractional digits), and keeping the
//! surrounding form state in sync when either the amount or the selected
//! unit changes.

pub mod commands;
pub mod core;
pub mod shared;

pub use crate::core::balance_input::BalanceInput;
pub use crate::core::convert::{
    convert_canonical_to_display, convert_display_to_canonical, PRECISION_DIGITS,
};
pub use crate::core::form::FormState;
pub use crate::core::mask::{conform_amount, strip_separators, DECIMAL_LIMIT, THOUSANDS_SEPARATOR};
pub use crate::core::units::MetricUnit;
pub use crate::shared::error::{AppError, AppResult};
pub use crate::shared::settings::AppSettings;
