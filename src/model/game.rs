use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use super::{check_headers, non_empty, read_failure};
use crate::AppError;

pub const DEFAULT_GAMES_FILE: &str = "MLB2020-2024GameInfo.csv";

pub const GAME_COLUMNS: [&str; 14] = [
    "Date",
    "VT",
    "HT",
    "VT Starting Pitcher Name",
    "VT Starting Pitcher ID",
    "HT Starting Pitcher Name",
    "HT Starting Pitcher ID",
    "Winning Pitcher Name",
    "Winning Pitcher ID",
    "Losing Pitcher Name",
    "Losing Pitcher ID",
    "VT Score",
    "HT Score",
    "VT Errors",
];

/// One completed game, as read from the season game file.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GameRecord {
    /// `YYYYMMDD`
    pub date: i64,
    pub visiting_team: String,
    pub home_team: String,
    pub visiting_starter_name: Option<String>,
    pub visiting_starter_id: Option<String>,
    pub home_starter_name: Option<String>,
    pub home_starter_id: Option<String>,
    pub winning_pitcher_name: Option<String>,
    pub winning_pitcher_id: Option<String>,
    pub losing_pitcher_name: Option<String>,
    pub losing_pitcher_id: Option<String>,
    pub visiting_score: u32,
    pub home_score: u32,
    pub visiting_errors: u32,
}

impl GameRecord {
    /// Inclusive `[year0101, year1231]` range on the integer date.
    #[must_use]
    pub fn in_season(&self, year: i32) -> bool {
        let prepend = i64::from(year) * 10000;
        self.date >= prepend + 101 && self.date <= prepend + 1231
    }
}

#[derive(Debug, Deserialize)]
struct RawGame {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "VT")]
    visiting_team: String,
    #[serde(rename = "HT")]
    home_team: String,
    #[serde(rename = "VT Starting Pitcher Name")]
    visiting_starter_name: String,
    #[serde(rename = "VT Starting Pitcher ID")]
    visiting_starter_id: String,
    #[serde(rename = "HT Starting Pitcher Name")]
    home_starter_name: String,
    #[serde(rename = "HT Starting Pitcher ID")]
    home_starter_id: String,
    #[serde(rename = "Winning Pitcher Name")]
    winning_pitcher_name: String,
    #[serde(rename = "Winning Pitcher ID")]
    winning_pitcher_id: String,
    #[serde(rename = "Losing Pitcher Name")]
    losing_pitcher_name: String,
    #[serde(rename = "Losing Pitcher ID")]
    losing_pitcher_id: String,
    #[serde(rename = "VT Score")]
    visiting_score: String,
    #[serde(rename = "HT Score")]
    home_score: String,
    #[serde(rename = "VT Errors")]
    visiting_errors: String,
}

fn parse_count(field: &str, value: &str) -> Result<u32, String> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("{field} '{value}': {e}"))
}

impl TryFrom<RawGame> for GameRecord {
    type Error = String;

    fn try_from(raw: RawGame) -> Result<Self, Self::Error> {
        let date_str = raw.date.trim();
        let date = date_str
            .parse::<i64>()
            .map_err(|e| format!("Date '{date_str}': {e}"))?;

        let visiting_team =
            non_empty(raw.visiting_team).ok_or_else(|| "VT is empty".to_string())?;
        let home_team = non_empty(raw.home_team).ok_or_else(|| "HT is empty".to_string())?;

        Ok(Self {
            date,
            visiting_team,
            home_team,
            visiting_starter_name: non_empty(raw.visiting_starter_name),
            visiting_starter_id: non_empty(raw.visiting_starter_id),
            home_starter_name: non_empty(raw.home_starter_name),
            home_starter_id: non_empty(raw.home_starter_id),
            winning_pitcher_name: non_empty(raw.winning_pitcher_name),
            winning_pitcher_id: non_empty(raw.winning_pitcher_id),
            losing_pitcher_name: non_empty(raw.losing_pitcher_name),
            losing_pitcher_id: non_empty(raw.losing_pitcher_id),
            visiting_score: parse_count("VT Score", &raw.visiting_score)?,
            home_score: parse_count("HT Score", &raw.home_score)?,
            visiting_errors: parse_count("VT Errors", &raw.visiting_errors)?,
        })
    }
}

/// Reads game rows from any CSV source. Rows that fail to parse are skipped.
///
/// # Errors
///
/// Will return `Err` if the header row cannot be read or a required column is missing.
pub fn read_games<R: Read>(rdr: R) -> Result<Vec<GameRecord>, AppError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);
    check_headers(reader.headers()?, &GAME_COLUMNS, "game file")?;

    let mut games = Vec::new();
    let mut skipped = 0usize;
    for (line, result) in reader.deserialize::<RawGame>().enumerate() {
        let parsed = result
            .map_err(|e| e.to_string())
            .and_then(GameRecord::try_from);
        match parsed {
            Ok(game) => games.push(game),
            Err(e) => {
                skipped += 1;
                debug!("skipping game row {}: {e}", line + 2);
            }
        }
    }
    if skipped > 0 {
        debug!("skipped {skipped} malformed game rows");
    }
    Ok(games)
}

/// # Errors
///
/// Will return `Err` if the file cannot be read or lacks required columns.
pub async fn load_games(path: &Path) -> Result<Vec<GameRecord>, AppError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| read_failure(path, &e))?;
    let games = read_games(bytes.as_slice())?;
    info!("loaded {} games from {}", games.len(), path.display());
    Ok(games)
}
