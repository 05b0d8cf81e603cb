//! Unit Normalization
//!
//! Converts user-entered power and water consumption figures into the
//! canonical annual quantities every downstream metric operates on:
//! kilowatt-hours per year and liters per year.
//!
//! The conversion factors are exact contracts. Changing any of them changes
//! every footprint value in the output table, so they live here as named
//! constants rather than inline literals.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Months per year.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Hours per year (24 × 365).
pub const HOURS_PER_YEAR: f64 = 8760.0;

/// Seconds per year, using a 365.25-day year.
pub const SECONDS_PER_YEAR: f64 = 31_557_600.0;

/// Minutes per year (60 × 24 × 365).
pub const MINUTES_PER_YEAR: f64 = 525_600.0;

/// Liters per US gallon.
pub const LITERS_PER_GALLON: f64 = 3.78541;

/// Power input units accepted from the consumption form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerUnit {
    /// Annual energy, kWh/year. Already canonical.
    KwhPerYear,
    /// Monthly energy, kWh/month.
    KwhPerMonth,
    /// Instantaneous draw in kilowatts, assumed constant year-round.
    Kilowatts,
    /// Instantaneous draw in megawatts, assumed constant year-round.
    Megawatts,
}

/// Water input units accepted from the consumption form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterUnit {
    /// Annual volume, liters/year. Already canonical.
    LitersPerYear,
    /// Monthly volume, liters/month.
    LitersPerMonth,
    /// Continuous flow, liters/second.
    LitersPerSecond,
    /// Continuous flow, US gallons/minute.
    GallonsPerMinute,
    /// Monthly volume, US gallons/month.
    GallonsPerMonth,
}

/// Convert a power figure to kWh/year.
///
/// Total over [`PowerUnit`]; an unrecognized unit tag can only exist at the
/// string-parsing boundary ([`parse_power_unit`]), which rejects it outright.
pub fn convert_power(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::KwhPerYear => value,
        PowerUnit::KwhPerMonth => value * MONTHS_PER_YEAR,
        PowerUnit::Kilowatts => value * HOURS_PER_YEAR,
        PowerUnit::Megawatts => value * 1000.0 * HOURS_PER_YEAR,
    }
}

/// Convert a water figure to liters/year.
pub fn convert_water(value: f64, unit: WaterUnit) -> f64 {
    match unit {
        WaterUnit::LitersPerYear => value,
        WaterUnit::LitersPerMonth => value * MONTHS_PER_YEAR,
        WaterUnit::LitersPerSecond => value * SECONDS_PER_YEAR,
        WaterUnit::GallonsPerMinute => value * MINUTES_PER_YEAR * LITERS_PER_GALLON,
        WaterUnit::GallonsPerMonth => value * MONTHS_PER_YEAR * LITERS_PER_GALLON,
    }
}

/// Parse a power unit tag from the input form.
///
/// Accepts both the canonical snake_case tags and the display labels shown
/// in the unit dropdown. Unrecognized tags are a caller contract violation
/// and fail hard rather than defaulting to zero.
pub fn parse_power_unit(tag: &str) -> Result<PowerUnit> {
    match tag.trim().to_lowercase().as_str() {
        "kwh_per_year" | "kwh/year" | "kwh/yr" => Ok(PowerUnit::KwhPerYear),
        "kwh_per_month" | "kwh/month" | "kwh/mo" => Ok(PowerUnit::KwhPerMonth),
        "kilowatts" | "kw" => Ok(PowerUnit::Kilowatts),
        "megawatts" | "mw" => Ok(PowerUnit::Megawatts),
        _ => anyhow::bail!("Unrecognized power unit: '{}'", tag),
    }
}

/// Parse a water unit tag from the input form.
pub fn parse_water_unit(tag: &str) -> Result<WaterUnit> {
    match tag.trim().to_lowercase().as_str() {
        "liters_per_year" | "l/year" | "l/yr" => Ok(WaterUnit::LitersPerYear),
        "liters_per_month" | "l/month" | "l/mo" => Ok(WaterUnit::LitersPerMonth),
        "liters_per_second" | "l/s" => Ok(WaterUnit::LitersPerSecond),
        "gallons_per_minute" | "gal/min" | "gpm" => Ok(WaterUnit::GallonsPerMinute),
        "gallons_per_month" | "gal/month" | "gal/mo" => Ok(WaterUnit::GallonsPerMonth),
        _ => anyhow::bail!("Unrecognized water unit: '{}'", tag),
    }
}

/// Raw consumption figures as entered by the user, with unit tags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserUsage {
    pub power_value: f64,
    pub power_unit: PowerUnit,
    pub water_value: f64,
    pub water_unit: WaterUnit,
}

impl UserUsage {
    /// Normalize to canonical annual units. Recomputed on every edit; the
    /// raw figures are never consumed downstream.
    pub fn normalize(&self) -> NormalizedUsage {
        NormalizedUsage {
            power_kwh_per_year: convert_power(self.power_value, self.power_unit),
            water_liters_per_year: convert_water(self.water_value, self.water_unit),
        }
    }
}

/// Consumption in canonical annual units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedUsage {
    pub power_kwh_per_year: f64,
    pub water_liters_per_year: f64,
}
