//! CARBON FOOTPRINT
//!
//! Annual emissions attributable to on-site power draw:
//!
//!   carbon = EF × power_kwh_per_year
//!
//! The result is unavailable when the county has no emission factor, and
//! also when annual power is exactly zero: a site drawing no power has no
//! meaningful carbon estimate, which is not the same thing as a numeric
//! zero. Strict multiplication would emit 0.0 there; this metric does not.

/// Calculate the carbon footprint for one county.
pub fn calculate_carbon(ef: Option<f64>, power_kwh_per_year: f64) -> Option<f64> {
    let ef = ef?;
    if power_kwh_per_year == 0.0 {
        return None;
    }
    Some(ef * power_kwh_per_year)
}
