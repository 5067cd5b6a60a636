//! Balance input state machine
//!
//! One instance backs one masked amount box plus its unit selector. It owns
//! the literal string the user is editing and the currently selected
//! [`MetricUnit`]; the canonical precision-12 value derived from the two is
//! pushed into the surrounding [`FormState`] on every change.
//!
//! Both event handlers are two-phase: the new canonical value is computed
//! first, and only if that succeeds is any state (unit, raw value, form
//! field) updated. The invariant that the form field always equals the raw
//! value reinterpreted at the selected unit therefore holds after every
//! `Ok` return, synchronously.

use crate::core::convert::convert_display_to_canonical;
use crate::core::form::FormState;
use crate::core::mask::conform_amount;
use crate::core::units::MetricUnit;
use crate::shared::error::AppResult;

#[derive(Debug)]
pub struct BalanceInput {
    /// Form field the canonical value is committed to, e.g. `"amount"`.
    field: String,
    unit: MetricUnit,
    raw: Option<String>,
}

impl BalanceInput {
    pub fn new(field: impl Into<String>, default_unit: MetricUnit) -> Self {
        Self {
            field: field.into(),
            unit: default_unit,
            raw: None,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn unit(&self) -> MetricUnit {
        self.unit
    }

    /// The masked string the input box currently shows.
    pub fn raw_value(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Handle a keystroke/paste result. The typed string is conformed to
    /// the mask, stored, converted under the selected unit and committed.
    /// Returns the conformed string for the input box to display.
    pub fn on_input(&mut self, typed: &str, form: &mut FormState) -> AppResult<String> {
        let conformed = conform_amount(typed);
        let canonical = convert_display_to_canonical(&conformed, self.unit)?;
        println!(
            "[BalanceInput] input '{}' -> '{}' -> {:?} ({:?})",
            typed, conformed, canonical, self.unit
        );

        self.raw = if conformed.is_empty() {
            None
        } else {
            Some(conformed.clone())
        };
        form.set_value(&self.field, canonical);
        Ok(conformed)
    }

    /// Switch the selected unit and immediately re-derive the canonical
    /// value from the raw value the user already typed. The same digits
    /// mean a different amount under the new unit, so this commits even
    /// though no new input arrived; with no raw value it commits `None`,
    /// which still fires a form write.
    pub fn on_unit_change(&mut self, new_unit: MetricUnit, form: &mut FormState) -> AppResult<()> {
        let canonical = match self.raw.as_deref() {
            Some(raw) => convert_display_to_canonical(raw, new_unit)?,
            None => None,
        };
        println!(
            "[BalanceInput] unit changed {:?} -> {:?} (raw={:?}, canonical={:?})",
            self.unit, new_unit, self.raw, canonical
        );

        self.unit = new_unit;
        form.set_value(&self.field, canonical);
        Ok(())
    }
}
