//! WATER-SCARCITY FOOTPRINT
//!
//! Scarcity-weighted annual water impact:
//!
//!   scarcity = ACF × water_liters_per_year + SWI × power_kwh_per_year
//!
//! Unlike the carbon and water metrics, a missing factor here contributes
//! zero instead of making the whole result unavailable. The result is
//! unavailable only when there is no signal at all: both factors missing or
//! zero-valued AND both raw inputs exactly zero. This asymmetry between the
//! metrics is intentional and must be preserved.

/// Calculate the water-scarcity footprint for one county.
pub fn calculate_water_scarcity(
    acf: Option<f64>,
    swi: Option<f64>,
    power_kwh_per_year: f64,
    water_liters_per_year: f64,
) -> Option<f64> {
    let no_signal = acf.map_or(true, |v| v == 0.0)
        && swi.map_or(true, |v| v == 0.0)
        && power_kwh_per_year == 0.0
        && water_liters_per_year == 0.0;
    if no_signal {
        return None;
    }

    let scarcity_term = acf.unwrap_or(0.0) * water_liters_per_year;
    let intensity_term = swi.unwrap_or(0.0) * power_kwh_per_year;
    Some(scarcity_term + intensity_term)
}
