//! Reference-Table Loading and Management
//!
//! Handles loading the county reference and per-county factor tables using
//! Polars, then extracts them into typed per-FIPS lookup maps. The tables
//! load once, are owned by the caller, and stay read-only for the lifetime
//! of a session; the engine itself holds no process-wide state.

use anyhow::{Context, Result};
use polars::prelude::*;
use rustc_hash::FxHashMap;

/// Identity row for one county from the reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountyRecord {
    /// 5-character zero-padded FIPS code, the join key everywhere.
    pub fips: String,
    pub county_name: String,
    pub state_name: String,
    pub state_abbr: String,
}

/// Physical factors for one county. Coverage is sparse: any field may be
/// absent, and a missing field is `None`, never silently zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FactorSet {
    /// Emission factor.
    pub ef: Option<f64>,
    /// Energy–water intensity factor.
    pub ewif: Option<f64>,
    /// Area water-scarcity/consumption factor.
    pub acf: Option<f64>,
    /// Scarcity-weighted intensity.
    pub swi: Option<f64>,
}

/// Main data holder for county footprint scoring.
///
/// Contains both reference tables keyed by normalized FIPS code.
pub struct CountyData {
    /// FIPS → county identity (name, state, abbreviation)
    pub counties: FxHashMap<String, CountyRecord>,

    /// FIPS → physical factors (sparse coverage)
    pub factors: FxHashMap<String, FactorSet>,
}

/// Zero-pad a FIPS code to the canonical 5-character width.
///
/// Source tables frequently carry FIPS as integers, which drops leading
/// zeros ("1001" for Autauga County). Every ingestion path funnels through
/// here so the join key is consistent.
pub fn normalize_fips(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() >= 5 {
        trimmed.to_string()
    } else {
        format!("{:0>5}", trimmed)
    }
}

impl CountyData {
    /// Load both reference tables from CSV files.
    pub fn load(counties_path: &str, factors_path: &str) -> Result<Self> {
        println!("Loading county reference tables...");

        let counties = Self::load_counties(counties_path)?;
        let factors = Self::load_factors(factors_path)?;

        println!("  Counties: {}", counties.len());
        println!("  Factor rows: {}", factors.len());

        Ok(CountyData { counties, factors })
    }

    /// Build directly from in-memory records (callers that fetched the
    /// tables themselves, and tests).
    pub fn from_records(
        counties: Vec<CountyRecord>,
        factors: Vec<(String, FactorSet)>,
    ) -> Self {
        let counties = counties
            .into_iter()
            .map(|mut record| {
                record.fips = normalize_fips(&record.fips);
                (record.fips.clone(), record)
            })
            .collect();

        let factors = factors
            .into_iter()
            .map(|(fips, set)| (normalize_fips(&fips), sanitize_factors(set)))
            .collect();

        CountyData { counties, factors }
    }

    /// Load the county reference CSV.
    ///
    /// Expects a `fips` column plus either separate `county_name` /
    /// `state_name` columns or a combined `area_name` column in the
    /// "County, State" shape, split on the last ", ". A `state_abbr`
    /// column is optional.
    fn load_counties(path: &str) -> Result<FxHashMap<String, CountyRecord>> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.into()))
            .with_context(|| format!("Failed to create CSV reader: {}", path))?
            .finish()
            .with_context(|| format!("Failed to load county reference CSV: {}", path))?;

        let fips_values = string_column(&df, "fips")
            .with_context(|| format!("County reference table missing 'fips': {}", path))?;

        let has_split_names = df.column("county_name").is_ok() && df.column("state_name").is_ok();

        let county_names = if has_split_names {
            string_column(&df, "county_name")?
        } else {
            Vec::new()
        };
        let state_names = if has_split_names {
            string_column(&df, "state_name")?
        } else {
            Vec::new()
        };
        let area_names = if has_split_names {
            Vec::new()
        } else {
            string_column(&df, "area_name").with_context(|| {
                format!(
                    "County reference table needs county_name/state_name or area_name: {}",
                    path
                )
            })?
        };
        let abbrs = string_column(&df, "state_abbr").unwrap_or_default();

        let mut map = FxHashMap::default();
        for idx in 0..df.height() {
            let Some(raw_fips) = fips_values.get(idx).and_then(|v| v.clone()) else {
                continue; // Row without a key cannot join; skip it, not the table.
            };
            let fips = normalize_fips(&raw_fips);

            let (county_name, state_name) = if has_split_names {
                (
                    county_names.get(idx).cloned().flatten().unwrap_or_default(),
                    state_names.get(idx).cloned().flatten().unwrap_or_default(),
                )
            } else {
                let area = area_names.get(idx).cloned().flatten().unwrap_or_default();
                split_area_name(&area)
            };

            let state_abbr = abbrs
                .get(idx)
                .cloned()
                .flatten()
                .unwrap_or_else(|| "??".to_string());

            map.insert(
                fips.clone(),
                CountyRecord {
                    fips,
                    county_name,
                    state_name,
                    state_abbr,
                },
            );
        }

        Ok(map)
    }

    /// Load the per-county factor CSV.
    ///
    /// Expects a `fips` column; the factor columns (`EF`, `EWIF`, `ACF`,
    /// `SWI`) are each optional, and missing cells stay `None`. A malformed
    /// row degrades to absent factors for that county only.
    fn load_factors(path: &str) -> Result<FxHashMap<String, FactorSet>> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.into()))
            .with_context(|| format!("Failed to create CSV reader: {}", path))?
            .finish()
            .with_context(|| format!("Failed to load factor CSV: {}", path))?;

        let fips_values = string_column(&df, "fips")
            .with_context(|| format!("Factor table missing 'fips': {}", path))?;

        let ef = float_column(&df, "EF");
        let ewif = float_column(&df, "EWIF");
        let acf = float_column(&df, "ACF");
        let swi = float_column(&df, "SWI");

        let cell = |col: &Option<Vec<Option<f64>>>, idx: usize| -> Option<f64> {
            col.as_ref().and_then(|values| values.get(idx).copied().flatten())
        };

        let mut map = FxHashMap::default();
        for idx in 0..df.height() {
            let Some(raw_fips) = fips_values.get(idx).and_then(|v| v.clone()) else {
                continue;
            };

            let set = sanitize_factors(FactorSet {
                ef: cell(&ef, idx),
                ewif: cell(&ewif, idx),
                acf: cell(&acf, idx),
                swi: cell(&swi, idx),
            });

            map.insert(normalize_fips(&raw_fips), set);
        }

        Ok(map)
    }

    /// Sorted, deduplicated state names for the state dropdown.
    pub fn state_names(&self) -> Vec<String> {
        let mut states: Vec<String> = self
            .counties
            .values()
            .map(|record| record.state_name.clone())
            .collect();
        states.sort();
        states.dedup();
        states
    }

    /// Sorted county names within one state, for the county dropdown.
    pub fn counties_in_state(&self, state_name: &str) -> Vec<String> {
        let mut counties: Vec<String> = self
            .counties
            .values()
            .filter(|record| record.state_name == state_name)
            .map(|record| record.county_name.clone())
            .collect();
        counties.sort();
        counties
    }

    /// Resolve a (state, county) selection to its FIPS code.
    pub fn lookup_fips(&self, state_name: &str, county_name: &str) -> Option<&str> {
        self.counties
            .values()
            .find(|record| {
                record.state_name == state_name && record.county_name == county_name
            })
            .map(|record| record.fips.as_str())
    }
}

/// Drop non-finite factor values; a NaN in a source table is missing data,
/// not a number the formulas may propagate.
fn sanitize_factors(set: FactorSet) -> FactorSet {
    let keep_finite = |v: Option<f64>| v.filter(|x| x.is_finite());
    FactorSet {
        ef: keep_finite(set.ef),
        ewif: keep_finite(set.ewif),
        acf: keep_finite(set.acf),
        swi: keep_finite(set.swi),
    }
}

/// Split a combined "County, State" area name on the last ", ".
fn split_area_name(area: &str) -> (String, String) {
    match area.rsplit_once(", ") {
        Some((county, state)) => (county.to_string(), state.to_string()),
        None => (area.to_string(), String::new()),
    }
}

/// Extract a column as strings, accepting both string and integer dtypes
/// (FIPS columns routinely infer as integers and lose leading zeros).
fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?;

    if let Ok(strings) = column.str() {
        Ok(strings
            .into_iter()
            .map(|opt| opt.map(|s| s.to_string()))
            .collect())
    } else if let Ok(ints) = column.i64() {
        Ok(ints.into_iter().map(|opt| opt.map(|v| v.to_string())).collect())
    } else {
        anyhow::bail!(
            "Column '{}' has unsupported dtype {:?}",
            name,
            column.dtype()
        )
    }
}

/// Extract an optional float column; `None` when the column is absent.
fn float_column(df: &DataFrame, name: &str) -> Option<Vec<Option<f64>>> {
    let column = df.column(name).ok()?;

    if let Ok(floats) = column.f64() {
        Some(floats.into_iter().collect())
    } else if let Ok(ints) = column.i64() {
        Some(ints.into_iter().map(|opt| opt.map(|v| v as f64)).collect())
    } else {
        None
    }
}
