use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::PredictionsError;

/// Participant name to guessed table, best-ranked first.
pub type Predictions = BTreeMap<String, Vec<String>>;

pub const DEFAULT_PREDICTIONS_FILE: &str = "participantes.yml";

pub fn load(path: &Path) -> Result<Predictions, PredictionsError> {
    let raw = fs::read_to_string(path).map_err(|source| PredictionsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&raw)
}

/// Parse a YAML mapping of participant to ordered team list.
pub fn parse(raw: &str) -> Result<Predictions, PredictionsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" || trimmed == "~" {
        return Ok(Predictions::new());
    }
    Ok(serde_yaml::from_str(trimmed)?)
}
