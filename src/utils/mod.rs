//! Utility modules for footprint scoring
//!
//! Contains shared functionality used across the pipeline:
//! - Units: normalization of consumption inputs to canonical annual units
//! - Classification: data-driven percentile thresholds and impact tiers
//! - Formatting: fixed-precision display strings

pub mod classification;
pub mod formatting;
pub mod units;

// Re-export commonly used types
pub use classification::{classify, compute_thresholds, ImpactCategory, TierThresholds};
pub use formatting::{format_sci, format_sig3, NOT_AVAILABLE};
pub use units::{
    convert_power, convert_water, parse_power_unit, parse_water_unit, NormalizedUsage,
    PowerUnit, UserUsage, WaterUnit,
};
