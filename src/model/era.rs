use ahash::AHashMap;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{check_headers, non_empty, read_failure};
use crate::AppError;

const ERA_KEY_COLUMN: &str = "key_retro";
const ERA_VALUE_COLUMN: &str = "ERA";

/// Per-year ERA lookup keyed by pitcher identifier.
///
/// A key may map to `None` when the source row exists but its ERA did not parse.
#[derive(Debug, Clone, Default)]
pub struct EraTable {
    by_pitcher: AHashMap<String, Option<f64>>,
}

impl EraTable {
    #[must_use]
    pub fn era(&self, pitcher_id: &str) -> Option<f64> {
        self.by_pitcher.get(pitcher_id).copied().flatten()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_pitcher.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_pitcher.is_empty()
    }
}

impl FromIterator<(String, Option<f64>)> for EraTable {
    fn from_iter<I: IntoIterator<Item = (String, Option<f64>)>>(iter: I) -> Self {
        let mut by_pitcher = AHashMap::new();
        for (key, era) in iter {
            by_pitcher.entry(key).or_insert(era);
        }
        Self { by_pitcher }
    }
}

#[derive(Debug, Deserialize)]
struct RawEra {
    key_retro: String,
    #[serde(rename = "ERA")]
    era: String,
}

#[must_use]
pub fn era_path(data_dir: &Path, year: i32) -> PathBuf {
    data_dir.join(format!("{year}era.csv"))
}

/// Reads an ERA table. Rows without a key are skipped, unparseable ERA values become `None`,
/// and the first row wins when a key repeats.
///
/// # Errors
///
/// Will return `Err` if the header row cannot be read or a required column is missing.
pub fn read_era<R: Read>(rdr: R) -> Result<EraTable, AppError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);
    check_headers(
        reader.headers()?,
        &[ERA_KEY_COLUMN, ERA_VALUE_COLUMN],
        "era file",
    )?;

    let table = reader
        .deserialize::<RawEra>()
        .filter_map(|result| match result {
            Ok(raw) => {
                let key = non_empty(raw.key_retro)?;
                let era = raw.era.trim().parse::<f64>().ok().filter(|v| v.is_finite());
                Some((key, era))
            }
            Err(e) => {
                debug!("skipping era row: {e}");
                None
            }
        })
        .collect::<EraTable>();
    Ok(table)
}

/// # Errors
///
/// Will return `Err` if the file cannot be read or lacks required columns.
pub async fn load_era(data_dir: &Path, year: i32) -> Result<EraTable, AppError> {
    let path = era_path(data_dir, year);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| read_failure(&path, &e))?;
    let table = read_era(bytes.as_slice())?;
    info!("loaded {} era entries from {}", table.len(), path.display());
    Ok(table)
}
