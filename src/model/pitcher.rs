use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Decision credited to a starting pitcher for one appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Win,
    Loss,
    NoDecision,
}

impl Decision {
    #[must_use]
    pub fn classify(
        starter_id: &str,
        winning_pitcher_id: Option<&str>,
        losing_pitcher_id: Option<&str>,
    ) -> Self {
        if winning_pitcher_id == Some(starter_id) {
            Self::Win
        } else if losing_pitcher_id == Some(starter_id) {
            Self::Loss
        } else {
            Self::NoDecision
        }
    }

    /// 1 for a win, 0 for a loss, 0.5 for no decision.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Win => 1.0,
            Self::Loss => 0.0,
            Self::NoDecision => 0.5,
        }
    }
}

impl Serialize for Decision {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

/// One team's side of one game, keyed on its starting pitcher.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TeamAppearance {
    pub team: String,
    pub starter_name: Option<String>,
    pub starter_id: String,
    pub winning_pitcher_id: Option<String>,
    pub losing_pitcher_id: Option<String>,
    pub team_runs: u32,
    pub team_errors: u32,
}

impl TeamAppearance {
    #[must_use]
    pub fn decision(&self) -> Decision {
        Decision::classify(
            &self.starter_id,
            self.winning_pitcher_id.as_deref(),
            self.losing_pitcher_id.as_deref(),
        )
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PitcherSeasonSummary {
    pub team: String,
    pub pitcher_id: String,
    pub pitcher_name: String,
    pub games_started: u32,
    pub wins: u32,
    pub losses: u32,
    pub decisions: Vec<Decision>,
    /// Mean runs scored by the team in this pitcher's starts, one decimal.
    pub team_runs: f64,
    /// Mean team errors in this pitcher's starts, one decimal.
    pub team_errors: f64,
    pub record: String,
    pub era: Option<f64>,
}

impl PitcherSeasonSummary {
    #[must_use]
    pub fn no_decisions(&self) -> u32 {
        self.games_started - self.wins - self.losses
    }
}

#[must_use]
pub fn win_loss_record(wins: u32, losses: u32) -> String {
    format!("{wins}-{losses}")
}

/// Summary rows for one season, in display order.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct SeasonSummary {
    pub year: i32,
    pub rows: Vec<PitcherSeasonSummary>,
}

impl SeasonSummary {
    #[must_use]
    pub fn get(&self, pitcher_id: &str) -> Option<&PitcherSeasonSummary> {
        self.rows.iter().find(|row| row.pitcher_id == pitcher_id)
    }

    #[must_use]
    pub fn by_pitcher(&self) -> BTreeMap<&str, &PitcherSeasonSummary> {
        self.rows
            .iter()
            .map(|row| (row.pitcher_id.as_str(), row))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_prefers_win_then_loss() {
        assert_eq!(Decision::classify("x", Some("x"), Some("y")), Decision::Win);
        assert_eq!(Decision::classify("x", Some("y"), Some("x")), Decision::Loss);
        assert_eq!(Decision::classify("x", Some("y"), Some("z")), Decision::NoDecision);
        assert_eq!(Decision::classify("x", None, None), Decision::NoDecision);
    }

    #[test]
    fn decisions_serialize_as_numbers() {
        let json = serde_json::to_string(&[Decision::Win, Decision::Loss, Decision::NoDecision])
            .unwrap();
        assert_eq!(json, "[1.0,0.0,0.5]");
    }
}
