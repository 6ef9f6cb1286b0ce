use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::PitcherSeasonSummary;

pub const DEFAULT_YEAR: i32 = 2024;

/// Numeric summary columns used for sorting and for the split-bar cells.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericColumn {
    Wins,
    GamesStarted,
    TeamRuns,
    Era,
    TeamErrors,
}

impl NumericColumn {
    pub const ALL: [Self; 5] = [
        Self::Wins,
        Self::GamesStarted,
        Self::TeamRuns,
        Self::Era,
        Self::TeamErrors,
    ];

    #[must_use]
    pub fn value(self, row: &PitcherSeasonSummary) -> Option<f64> {
        match self {
            Self::Wins => Some(f64::from(row.wins)),
            Self::GamesStarted => Some(f64::from(row.games_started)),
            Self::TeamRuns => Some(row.team_runs),
            Self::Era => row.era,
            Self::TeamErrors => Some(row.team_errors),
        }
    }

    /// Query-string and command-line spelling.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Wins => "wins",
            Self::GamesStarted => "games_started",
            Self::TeamRuns => "team_runs",
            Self::Era => "era",
            Self::TeamErrors => "team_errors",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Wins => "Wins",
            Self::GamesStarted => "Games Started",
            Self::TeamRuns => "Run Support",
            Self::Era => "ERA",
            Self::TeamErrors => "Team Errors",
        }
    }
}

impl fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for NumericColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|col| {
                col.key().eq_ignore_ascii_case(wanted) || col.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| {
                let keys: Vec<&str> = Self::ALL.iter().map(|c| c.key()).collect();
                format!("unknown sort column '{wanted}', expected one of {keys:?}")
            })
    }
}

/// Selections that drive one recomputation of the pitcher table.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryRequest {
    pub year: i32,
    pub sort: NumericColumn,
    pub descending: bool,
    /// Team codes to keep; empty keeps every team.
    pub teams: Vec<String>,
    pub show_all: bool,
}

impl Default for SummaryRequest {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            sort: NumericColumn::Wins,
            descending: true,
            teams: Vec::new(),
            show_all: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_column_parses_keys_and_labels() {
        assert_eq!("era".parse::<NumericColumn>(), Ok(NumericColumn::Era));
        assert_eq!("Run Support".parse::<NumericColumn>(), Ok(NumericColumn::TeamRuns));
        assert_eq!(
            "games_started".parse::<NumericColumn>(),
            Ok(NumericColumn::GamesStarted)
        );
        assert!("strikeouts".parse::<NumericColumn>().is_err());
    }
}
