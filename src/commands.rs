//! Command layer, the surface the frontend bridge calls into.
//!
//! Each command takes a request DTO and returns a response DTO; both sides
//! of every call are exported as TypeScript bindings from `shared::types`.

use crate::core::convert::{convert_canonical_to_display, convert_display_to_canonical};
use crate::core::mask::conform_amount;
use crate::core::units::MetricUnit;
use crate::shared::error::{AppError, AppResult};
use crate::shared::errors::ERR_UNKNOWN_UNIT;
use crate::shared::types::{
    ConformAmountRequest, ConformAmountResponse, ConvertAmountRequest, ConvertAmountResponse,
    FormatBalanceRequest, FormatBalanceResponse, GetUnitsResponse, UnitDTO,
};

fn parse_unit(name: &str) -> AppResult<MetricUnit> {
    MetricUnit::from_name(name)
        .ok_or_else(|| AppError::Validation(format!("{}: '{}'", ERR_UNKNOWN_UNIT, name)))
}

/// Conform raw keyboard/paste input to the amount mask.
pub fn conform_amount_command(request: ConformAmountRequest) -> AppResult<ConformAmountResponse> {
    Ok(ConformAmountResponse {
        conformed: conform_amount(&request.input),
    })
}

/// Convert a masked display amount into the canonical base-unit value.
pub fn convert_amount_command(request: ConvertAmountRequest) -> AppResult<ConvertAmountResponse> {
    let unit = parse_unit(&request.unit)?;
    let canonical = convert_display_to_canonical(&request.amount, unit)?;
    println!(
        "[convert_amount] '{}' @ {:?} -> {:?}",
        request.amount, unit, canonical
    );

    Ok(ConvertAmountResponse {
        canonical,
        unit: request.unit,
    })
}

/// Render a stored canonical value in the requested unit, with the SI
/// prefix the caller should show next to the asset symbol.
pub fn format_balance_command(request: FormatBalanceRequest) -> AppResult<FormatBalanceResponse> {
    let unit = parse_unit(&request.unit)?;
    let formatted = convert_canonical_to_display(&request.canonical, unit)?;

    Ok(FormatBalanceResponse {
        formatted,
        prefix: unit.prefix().to_string(),
    })
}

/// Enumerate the units the selector offers, smallest scale first.
pub fn get_metric_units_command() -> AppResult<GetUnitsResponse> {
    let units = MetricUnit::ALL
        .into_iter()
        .map(|unit| UnitDTO {
            id: unit.label().to_string(),
            symbol: unit.prefix().to_string(),
            exponent: unit.exponent(),
        })
        .collect();

    Ok(GetUnitsResponse { units })
}
