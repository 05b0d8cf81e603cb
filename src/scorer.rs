//! Impact Scorer - Main coordinator for county footprint tables
//!
//! Joins the county-id universe against the reference and factor tables,
//! computes all three footprints per county, classifies the selected metric
//! into impact tiers, and formats display strings. The per-county compute
//! phase runs in parallel (Rayon); classification waits for the full table,
//! since the tier thresholds are statistics of every county's value.

use crate::data::{normalize_fips, CountyData};
use crate::metrics::{calculate_footprints, FootprintKind, FootprintSet};
use crate::utils::classification::{
    classify, compute_thresholds, ImpactCategory, TierThresholds,
};
use crate::utils::formatting::{format_sci, format_sig3};
use crate::utils::units::UserUsage;
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;

/// Identity placeholder for counties absent from the reference table.
pub const UNKNOWN_COUNTY: &str = "Unknown County";
/// State placeholder for counties absent from the reference table.
pub const UNKNOWN_STATE: &str = "Unknown State";
/// Abbreviation placeholder for counties absent from the reference table.
pub const UNKNOWN_ABBR: &str = "??";

/// Main scorer. Owns the immutable reference tables for a session.
pub struct ImpactScorer {
    data: CountyData,
}

/// One output row, ready for the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountyRow {
    pub fips: String,
    pub county_name: String,
    pub state_name: String,
    pub state_abbr: String,

    /// Raw footprint values; `None` marks unavailable, never zero.
    pub carbon: Option<f64>,
    pub water: Option<f64>,
    pub water_scarcity: Option<f64>,

    /// Fixed-notation display strings (3 significant figures).
    pub carbon_display: String,
    pub water_display: String,
    pub water_scarcity_display: String,

    /// Scientific-notation display strings (3 significant figures).
    pub carbon_sci: String,
    pub water_sci: String,
    pub water_scarcity_sci: String,

    /// Tier for the table's selected metric.
    pub category: ImpactCategory,
    /// Numeric code for the tier color ramp (Low=0 … NoData=3).
    pub color_code: u8,
}

/// Full per-county table for one (usage, metric) selection.
#[derive(Debug, Clone, Serialize)]
pub struct ImpactTable {
    /// Metric the rows are classified by.
    pub metric: FootprintKind,
    /// 33rd/67th percentile cutoffs for the selected metric; `None` when no
    /// county has a numeric value (every row is then NoData).
    pub thresholds: Option<TierThresholds>,
    pub rows: Vec<CountyRow>,
}

impl ImpactTable {
    /// Serialize rows as JSON values for the rendering collaborator.
    pub fn to_json_rows(&self) -> Result<Vec<serde_json::Value>> {
        self.rows
            .iter()
            .map(|row| serde_json::to_value(row).context("Failed to serialize county row"))
            .collect()
    }
}

impl ImpactScorer {
    pub fn new(data: CountyData) -> Self {
        Self { data }
    }

    /// Access the reference tables (dropdown population, FIPS lookup).
    pub fn data(&self) -> &CountyData {
        &self.data
    }

    /// Score the full county universe for one consumption input and metric
    /// selection.
    ///
    /// Every id in `universe` yields exactly one row, in input order,
    /// whether or not the county has reference or factor coverage. The
    /// whole table is recomputed on every call; nothing is cached between
    /// calls except the reference tables themselves.
    pub fn score_table(
        &self,
        universe: &[String],
        usage: &UserUsage,
        metric: FootprintKind,
    ) -> ImpactTable {
        let normalized = usage.normalize();

        // Phase 1: per-county footprints. Counties are independent here, so
        // the map is embarrassingly parallel and order-preserving.
        let computed: Vec<(String, FootprintSet)> = universe
            .par_iter()
            .map(|id| {
                let fips = normalize_fips(id);
                let factors = self.data.factors.get(&fips).copied().unwrap_or_default();
                let footprints = calculate_footprints(&factors, &normalized);
                (fips, footprints)
            })
            .collect();

        // Phase 2: tier thresholds need every county's value before any row
        // can be classified.
        let values: Vec<f64> = computed
            .iter()
            .filter_map(|(_, footprints)| footprints.get(metric))
            .collect();
        let thresholds = compute_thresholds(&values);

        // Phase 3: classify and format each row against the thresholds.
        let rows = computed
            .into_iter()
            .map(|(fips, footprints)| {
                self.build_row(fips, footprints, metric, thresholds.as_ref())
            })
            .collect();

        ImpactTable {
            metric,
            thresholds,
            rows,
        }
    }

    fn build_row(
        &self,
        fips: String,
        footprints: FootprintSet,
        metric: FootprintKind,
        thresholds: Option<&TierThresholds>,
    ) -> CountyRow {
        let (county_name, state_name, state_abbr) = match self.data.counties.get(&fips) {
            Some(record) => (
                record.county_name.clone(),
                record.state_name.clone(),
                record.state_abbr.clone(),
            ),
            None => (
                UNKNOWN_COUNTY.to_string(),
                UNKNOWN_STATE.to_string(),
                UNKNOWN_ABBR.to_string(),
            ),
        };

        let category = classify(footprints.get(metric), thresholds);

        CountyRow {
            fips,
            county_name,
            state_name,
            state_abbr,
            carbon: footprints.carbon,
            water: footprints.water,
            water_scarcity: footprints.water_scarcity,
            carbon_display: format_sig3(footprints.carbon),
            water_display: format_sig3(footprints.water),
            water_scarcity_display: format_sig3(footprints.water_scarcity),
            carbon_sci: format_sci(footprints.carbon),
            water_sci: format_sci(footprints.water),
            water_scarcity_sci: format_sci(footprints.water_scarcity),
            color_code: category.color_code(),
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CountyRecord, FactorSet};
    use crate::utils::units::{PowerUnit, WaterUnit};

    fn county(fips: &str, name: &str, state: &str, abbr: &str) -> CountyRecord {
        CountyRecord {
            fips: fips.to_string(),
            county_name: name.to_string(),
            state_name: state.to_string(),
            state_abbr: abbr.to_string(),
        }
    }

    fn usage_100_kw() -> UserUsage {
        UserUsage {
            power_value: 100.0,
            power_unit: PowerUnit::Kilowatts,
            water_value: 0.0,
            water_unit: WaterUnit::LitersPerYear,
        }
    }

    fn scorer_with_three_counties() -> ImpactScorer {
        let data = CountyData::from_records(
            vec![
                county("01001", "Autauga County", "Alabama", "AL"),
                county("06037", "Los Angeles County", "California", "CA"),
            ],
            vec![
                ("01001".to_string(), FactorSet { ef: Some(0.1), ..Default::default() }),
                ("06037".to_string(), FactorSet { ef: Some(0.9), ..Default::default() }),
            ],
        );
        ImpactScorer::new(data)
    }

    #[test]
    fn test_universe_rows_exactly_once_in_order() {
        let scorer = scorer_with_three_counties();
        // "99999" has neither reference nor factor coverage; "1001" needs padding.
        let universe = vec![
            "1001".to_string(),
            "06037".to_string(),
            "99999".to_string(),
        ];

        let table = scorer.score_table(&universe, &usage_100_kw(), FootprintKind::Carbon);

        let fips: Vec<&str> = table.rows.iter().map(|r| r.fips.as_str()).collect();
        assert_eq!(fips, vec!["01001", "06037", "99999"]);
    }

    #[test]
    fn test_unmatched_county_keeps_placeholders() {
        let scorer = scorer_with_three_counties();
        let universe = vec!["99999".to_string()];

        let table = scorer.score_table(&universe, &usage_100_kw(), FootprintKind::Carbon);
        let row = &table.rows[0];

        assert_eq!(row.county_name, UNKNOWN_COUNTY);
        assert_eq!(row.state_name, UNKNOWN_STATE);
        assert_eq!(row.state_abbr, UNKNOWN_ABBR);
        assert_eq!(row.carbon, None);
        assert_eq!(row.carbon_display, "N/A");
        assert_eq!(row.category, ImpactCategory::NoData);
        assert_eq!(row.color_code, 3);
    }

    #[test]
    fn test_thresholds_exclude_unavailable_rows() {
        let scorer = scorer_with_three_counties();
        let universe = vec![
            "01001".to_string(),
            "06037".to_string(),
            "99999".to_string(),
        ];

        let table = scorer.score_table(&universe, &usage_100_kw(), FootprintKind::Carbon);
        let t = table.thresholds.unwrap();

        // Domain is {87_600, 788_400}: p33/p67 interpolate between the two.
        assert!(t.p33 > 87_600.0 && t.p33 < 788_400.0);
        assert!(t.p67 > t.p33);
    }

    #[test]
    fn test_empty_metric_domain_is_all_no_data() {
        let data = CountyData::from_records(
            vec![county("01001", "Autauga County", "Alabama", "AL")],
            vec![],
        );
        let scorer = ImpactScorer::new(data);
        let universe = vec!["01001".to_string()];

        let table = scorer.score_table(&universe, &usage_100_kw(), FootprintKind::Carbon);

        assert!(table.thresholds.is_none());
        assert!(table
            .rows
            .iter()
            .all(|row| row.category == ImpactCategory::NoData));
    }

    #[test]
    fn test_json_rows_shape() {
        let scorer = scorer_with_three_counties();
        let universe = vec!["01001".to_string()];

        let table = scorer.score_table(&universe, &usage_100_kw(), FootprintKind::Carbon);
        let rows = table.to_json_rows().unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["fips"], "01001");
        assert_eq!(rows[0]["category"], "Low");
        assert_eq!(rows[0]["color_code"], 0);
    }
}
