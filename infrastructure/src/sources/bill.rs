//! Bill files (JSON or TOML) and flag-built bills

use super::SourceError;
use chamber_domain::Bill;
use std::path::Path;

fn check(bill: Bill) -> Result<Bill, SourceError> {
    if bill.title.trim().is_empty() {
        return Err(SourceError::EmptyField("title"));
    }
    if bill.summary.trim().is_empty() {
        return Err(SourceError::EmptyField("summary"));
    }
    Ok(bill)
}

/// Read a bill from `path`. Files ending in `.toml` are TOML, anything
/// else is JSON.
pub fn load_bill(path: &Path) -> Result<Bill, SourceError> {
    let text = std::fs::read_to_string(path).map_err(|e| SourceError::io(path, e))?;
    let origin = path.display().to_string();

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let bill: Bill = if is_toml {
        toml::from_str(&text).map_err(|source| SourceError::Toml { origin, source })?
    } else {
        serde_json::from_str(&text).map_err(|source| SourceError::Json { origin, source })?
    };
    check(bill)
}

/// Build a bill from `--title` / `--summary` style inputs.
pub fn bill_from_parts(title: &str, summary: &str) -> Result<Bill, SourceError> {
    check(Bill::new(title.trim(), summary.trim()))
}
