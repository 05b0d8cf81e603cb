//! Footprint metric modules
//!
//! Each footprint formula is implemented in its own module. All three are
//! deterministic, side-effect-free, and recomputed for every county on
//! every input or metric-selection change.

pub mod carbon;
pub mod water;
pub mod water_scarcity;

// Re-export metric functions
pub use carbon::calculate_carbon;
pub use water::calculate_water;
pub use water_scarcity::calculate_water_scarcity;

use crate::data::FactorSet;
use crate::utils::units::NormalizedUsage;
use serde::{Deserialize, Serialize};

/// Which footprint the table is currently displayed and classified by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintKind {
    Carbon,
    Water,
    WaterScarcity,
}

impl FootprintKind {
    /// Friendly name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            FootprintKind::Carbon => "Carbon Footprint",
            FootprintKind::Water => "Water Footprint",
            FootprintKind::WaterScarcity => "Water Scarcity Footprint",
        }
    }

    /// All selectable metrics.
    pub fn all() -> [FootprintKind; 3] {
        [
            FootprintKind::Carbon,
            FootprintKind::Water,
            FootprintKind::WaterScarcity,
        ]
    }
}

/// All three footprints for one county. `None` is the unavailable sentinel,
/// which is distinct from a numeric zero throughout the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FootprintSet {
    pub carbon: Option<f64>,
    pub water: Option<f64>,
    pub water_scarcity: Option<f64>,
}

impl FootprintSet {
    /// Value of the selected metric.
    pub fn get(&self, kind: FootprintKind) -> Option<f64> {
        match kind {
            FootprintKind::Carbon => self.carbon,
            FootprintKind::Water => self.water,
            FootprintKind::WaterScarcity => self.water_scarcity,
        }
    }
}

/// Calculate all three footprints for one county from its factors and the
/// normalized consumption figures.
pub fn calculate_footprints(factors: &FactorSet, usage: &NormalizedUsage) -> FootprintSet {
    FootprintSet {
        carbon: calculate_carbon(factors.ef, usage.power_kwh_per_year),
        water: calculate_water(
            factors.ewif,
            usage.power_kwh_per_year,
            usage.water_liters_per_year,
        ),
        water_scarcity: calculate_water_scarcity(
            factors.acf,
            factors.swi,
            usage.power_kwh_per_year,
            usage.water_liters_per_year,
        ),
    }
}
