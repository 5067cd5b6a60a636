use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ConformAmountRequest {
    pub input: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ConformAmountResponse {
    pub conformed: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ConvertAmountRequest {
    /// Masked display string, possibly with thousands separators.
    pub amount: String,
    /// Unit name, e.g. "milli".
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ConvertAmountResponse {
    /// Base-unit fixed-point string with 12 fractional digits; absent when
    /// the input was empty.
    pub canonical: Option<String>,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FormatBalanceRequest {
    pub canonical: String,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FormatBalanceResponse {
    pub formatted: Option<String>,
    /// SI prefix to render next to the asset symbol.
    pub prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GetUnitsResponse {
    pub units: Vec<UnitDTO>,
}

// Rich unit Data Transfer Object for the unit selector
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct UnitDTO {
    pub id: String,     // Unit name (e.g., "milli")
    pub symbol: String, // SI prefix (e.g., "m", empty for the base unit)
    pub exponent: i32,  // Power of ten relative to the base unit
}
