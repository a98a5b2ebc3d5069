//! District files (JSON array)

use super::SourceError;
use chamber_domain::District;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

const SAMPLE_DISTRICTS: &str = include_str!("sample_districts.json");

/// On-disk district record.
///
/// Census-derived files carry `cd` and `state_fips` as either numbers or
/// strings, and `name` is optional (the id stands in).
#[derive(Debug, Deserialize)]
struct DistrictRecord {
    district_id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    lean: f64,
    #[serde(default)]
    population: i64,
    #[serde(default)]
    weights: BTreeMap<String, f64>,
    #[serde(default)]
    state_fips: Option<Value>,
    #[serde(default)]
    cd: Option<Value>,
    #[serde(default)]
    demographics: BTreeMap<String, f64>,
}

impl DistrictRecord {
    fn into_district(self) -> District {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| self.district_id.clone());
        District {
            district_id: self.district_id,
            name,
            lean: self.lean,
            population: self.population,
            weights: self.weights,
            state_fips: self.state_fips.and_then(scalar_to_string),
            cd: self.cd.and_then(scalar_to_string),
            demographics: self.demographics,
        }
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parse a JSON array of districts. `origin` names the source in errors.
///
/// Weights are taken as given; nothing is re-normalised here.
pub fn parse_districts(json: &str, origin: &str) -> Result<Vec<Arc<District>>, SourceError> {
    let records: Vec<DistrictRecord> =
        serde_json::from_str(json).map_err(|source| SourceError::Json {
            origin: origin.to_string(),
            source,
        })?;
    if records.is_empty() {
        return Err(SourceError::NoDistricts(origin.to_string()));
    }
    Ok(records
        .into_iter()
        .map(|r| Arc::new(r.into_district()))
        .collect())
}

/// Read districts from a JSON file.
pub fn load_districts(path: &Path) -> Result<Vec<Arc<District>>, SourceError> {
    let text = std::fs::read_to_string(path).map_err(|e| SourceError::io(path, e))?;
    let districts = parse_districts(&text, &path.display().to_string())?;
    debug!("loaded {} districts from {}", districts.len(), path.display());
    Ok(districts)
}

/// The built-in mock chamber.
pub fn sample_districts() -> Result<Vec<Arc<District>>, SourceError> {
    parse_districts(SAMPLE_DISTRICTS, "built-in sample districts")
}
