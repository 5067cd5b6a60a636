pub mod balance_input;
pub mod convert;
pub mod form;
pub mod mask;
pub mod units;
