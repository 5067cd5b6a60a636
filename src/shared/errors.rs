//! Shared error message constants
//!
//! Messages that cross the bridge to the frontend live here so the
//! wording stays consistent between the command layer and the core.

pub const ERR_UNKNOWN_UNIT: &str = "Unknown metric unit";
pub const ERR_INVALID_AMOUNT: &str = "Amount is not a valid decimal number";
pub const ERR_NEGATIVE_AMOUNT: &str = "Amount cannot be negative";
pub const ERR_AMOUNT_OVERFLOW: &str = "Amount is out of the representable range";
