//! WATER FOOTPRINT
//!
//! Annual water use: direct on-site consumption plus the water embedded in
//! power generation:
//!
//!   water = water_liters_per_year + EWIF × power_kwh_per_year
//!
//! When the county has no energy–water intensity factor the embedded term
//! cannot be computed. The direct term still stands on its own if the user
//! reported any water use; otherwise the result is unavailable rather than
//! a bare zero.

/// Calculate the water footprint for one county.
pub fn calculate_water(
    ewif: Option<f64>,
    power_kwh_per_year: f64,
    water_liters_per_year: f64,
) -> Option<f64> {
    match ewif {
        Some(ewif) => Some(water_liters_per_year + ewif * power_kwh_per_year),
        None if water_liters_per_year > 0.0 => Some(water_liters_per_year),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_water_both_terms() {
        // 5000 L direct + 2.0 L/kWh × 1000 kWh = 7000 L
        let result = calculate_water(Some(2.0), 1000.0, 5000.0).unwrap();
        assert_relative_eq!(result, 7000.0);
    }

    #[test]
    fn test_water_direct_only_when_factor_missing() {
        assert_eq!(calculate_water(None, 1000.0, 5000.0), Some(5000.0));
    }

    #[test]
    fn test_water_unavailable_when_factor_missing_and_no_direct_use() {
        assert_eq!(calculate_water(None, 1000.0, 0.0), None);
    }

    #[test]
    fn test_water_zero_inputs_with_factor_is_numeric() {
        // A present EWIF keeps the strict formula: 0 + 0 = 0.0, a real value.
        assert_eq!(calculate_water(Some(2.0), 0.0, 0.0), Some(0.0));
    }
}
