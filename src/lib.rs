//! County Footprint Scorer
//!
//! Environmental-impact computation engine for per-county choropleth maps.
//! Given a county reference table, a sparse per-county factor table, a
//! county-id universe, and user-entered power/water consumption, the engine
//! produces one classified, display-formatted row per county.
//!
//! Pipeline: unit normalization → per-county footprints → percentile tier
//! classification → significant-figure formatting → output rows.
//!
//! - `utils/`: unit, classification, and formatting utilities
//! - `data`: reference-table loading with Polars
//! - `metrics/`: the three footprint formulas
//! - `scorer`: table orchestration

pub mod data;
pub mod metrics;
pub mod scorer;
pub mod utils;

// Re-export commonly used types
pub use data::{normalize_fips, CountyData, CountyRecord, FactorSet};
pub use metrics::{calculate_footprints, FootprintKind, FootprintSet};
pub use scorer::{CountyRow, ImpactScorer, ImpactTable};
pub use utils::{
    classify, compute_thresholds, convert_power, convert_water, format_sci, format_sig3,
    ImpactCategory, NormalizedUsage, PowerUnit, TierThresholds, UserUsage, WaterUnit,
};
