//! Metric unit table
//!
//! SI prefixes the balance input can display amounts in. Each unit maps to a
//! power-of-ten exponent relative to the base (chain) unit and a display
//! prefix for the unit selector.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Order-of-magnitude scale for a displayed balance.
///
/// `None` is the base unit the chain accounts in; everything else is a
/// power-of-ten away from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum MetricUnit {
    Pico,
    Nano,
    Micro,
    Milli,
    None,
    Kilo,
    Mega,
    Giga,
    Tera,
}

/// Unit definition with scale exponent and display strings
#[derive(Debug, Clone)]
pub struct UnitDefinition {
    pub exponent: i32,
    pub prefix: &'static str,
    pub label: &'static str,
}

/// Unit table initialized once at startup
static UNIT_TABLE: Lazy<HashMap<MetricUnit, UnitDefinition>> = Lazy::new(|| {
    let mut table = HashMap::new();

    table.insert(MetricUnit::Pico, UnitDefinition { exponent: -12, prefix: "p", label: "pico" });
    table.insert(MetricUnit::Nano, UnitDefinition { exponent: -9, prefix: "n", label: "nano" });
    table.insert(MetricUnit::Micro, UnitDefinition { exponent: -6, prefix: "µ", label: "micro" });
    table.insert(MetricUnit::Milli, UnitDefinition { exponent: -3, prefix: "m", label: "milli" });
    table.insert(MetricUnit::None, UnitDefinition { exponent: 0, prefix: "", label: "none" });
    table.insert(MetricUnit::Kilo, UnitDefinition { exponent: 3, prefix: "k", label: "kilo" });
    table.insert(MetricUnit::Mega, UnitDefinition { exponent: 6, prefix: "M", label: "mega" });
    table.insert(MetricUnit::Giga, UnitDefinition { exponent: 9, prefix: "G", label: "giga" });
    table.insert(MetricUnit::Tera, UnitDefinition { exponent: 12, prefix: "T", label: "tera" });

    table
});

impl MetricUnit {
    /// Every unit, smallest scale first. This is the order the unit
    /// selector presents.
    pub const ALL: [MetricUnit; 9] = [
        MetricUnit::Pico,
        MetricUnit::Nano,
        MetricUnit::Micro,
        MetricUnit::Milli,
        MetricUnit::None,
        MetricUnit::Kilo,
        MetricUnit::Mega,
        MetricUnit::Giga,
        MetricUnit::Tera,
    ];

    fn definition(&self) -> &'static UnitDefinition {
        // The table is total over the enum; a miss is a programming error.
        UNIT_TABLE
            .get(self)
            .expect("unit table is missing a MetricUnit entry")
    }

    /// Power-of-ten exponent relative to the base unit.
    pub fn exponent(&self) -> i32 {
        self.definition().exponent
    }

    /// SI prefix shown next to the asset symbol (empty for the base unit).
    pub fn prefix(&self) -> &'static str {
        self.definition().prefix
    }

    /// Lowercase name used in settings and selector labels.
    pub fn label(&self) -> &'static str {
        self.definition().label
    }

    /// Look a unit up by its SI prefix, e.g. `"k"` -> `Kilo`.
    pub fn from_prefix(prefix: &str) -> Option<MetricUnit> {
        MetricUnit::ALL
            .into_iter()
            .find(|unit| unit.prefix() == prefix)
    }

    /// Look a unit up by its lowercase name, e.g. `"milli"` -> `Milli`.
    pub fn from_name(name: &str) -> Option<MetricUnit> {
        let name = name.trim().to_lowercase();
        MetricUnit::ALL
            .into_iter()
            .find(|unit| unit.label() == name)
    }
}

impl Default for MetricUnit {
    fn default() -> Self {
        MetricUnit::None
    }
}
