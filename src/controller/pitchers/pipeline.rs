use ahash::{AHashMap, AHashSet};
use std::cmp::Ordering;

use crate::model::{
    Decision, EraTable, GameRecord, PitcherSeasonSummary, SeasonSummary, TeamAppearance,
    win_loss_record,
};

pub const TOP_STARTERS_PER_TEAM: usize = 5;

#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[must_use]
pub fn games_in_season(games: &[GameRecord], year: i32) -> Vec<&GameRecord> {
    games.iter().filter(|game| game.in_season(year)).collect()
}

/// Emits every visiting side, then every home side, skipping sides with no starter id.
///
/// Both sides carry the visiting team's error count: the source only records `VT Errors`.
#[must_use]
pub fn unpivot_appearances(games: &[&GameRecord]) -> Vec<TeamAppearance> {
    let visiting = games.iter().filter_map(|game| {
        Some(TeamAppearance {
            team: game.visiting_team.clone(),
            starter_name: game.visiting_starter_name.clone(),
            starter_id: game.visiting_starter_id.clone()?,
            winning_pitcher_id: game.winning_pitcher_id.clone(),
            losing_pitcher_id: game.losing_pitcher_id.clone(),
            team_runs: game.visiting_score,
            team_errors: game.visiting_errors,
        })
    });
    let home = games.iter().filter_map(|game| {
        Some(TeamAppearance {
            team: game.home_team.clone(),
            starter_name: game.home_starter_name.clone(),
            starter_id: game.home_starter_id.clone()?,
            winning_pitcher_id: game.winning_pitcher_id.clone(),
            losing_pitcher_id: game.losing_pitcher_id.clone(),
            team_runs: game.home_score,
            team_errors: game.visiting_errors,
        })
    });
    visiting.chain(home).collect()
}

struct StarterTally {
    team: String,
    pitcher_id: String,
    pitcher_name: Option<String>,
    decisions: Vec<Decision>,
    runs: u64,
    errors: u64,
}

impl StarterTally {
    fn into_summary(self) -> PitcherSeasonSummary {
        let games_started = u32::try_from(self.decisions.len()).unwrap_or(u32::MAX);
        let count = |wanted: Decision| {
            u32::try_from(self.decisions.iter().filter(|d| **d == wanted).count())
                .unwrap_or(u32::MAX)
        };
        let wins = count(Decision::Win);
        let losses = count(Decision::Loss);
        let starts = f64::from(games_started.max(1));

        PitcherSeasonSummary {
            pitcher_name: self.pitcher_name.unwrap_or_else(|| self.pitcher_id.clone()),
            team: self.team,
            pitcher_id: self.pitcher_id,
            games_started,
            wins,
            losses,
            team_runs: round_one_decimal(self.runs as f64 / starts),
            team_errors: round_one_decimal(self.errors as f64 / starts),
            record: win_loss_record(wins, losses),
            decisions: self.decisions,
            era: None,
        }
    }
}

/// Groups appearances by (team, starter id) in first-seen order.
#[must_use]
pub fn aggregate_starters(appearances: &[TeamAppearance]) -> Vec<PitcherSeasonSummary> {
    let mut index: AHashMap<(&str, &str), usize> = AHashMap::new();
    let mut tallies: Vec<StarterTally> = Vec::new();

    for app in appearances {
        let slot = *index
            .entry((app.team.as_str(), app.starter_id.as_str()))
            .or_insert_with(|| {
                tallies.push(StarterTally {
                    team: app.team.clone(),
                    pitcher_id: app.starter_id.clone(),
                    pitcher_name: None,
                    decisions: Vec::new(),
                    runs: 0,
                    errors: 0,
                });
                tallies.len() - 1
            });

        let tally = &mut tallies[slot];
        if tally.pitcher_name.is_none() {
            tally.pitcher_name.clone_from(&app.starter_name);
        }
        tally.decisions.push(app.decision());
        tally.runs += u64::from(app.team_runs);
        tally.errors += u64::from(app.team_errors);
    }

    tallies.into_iter().map(StarterTally::into_summary).collect()
}

fn by_starts_then_id(a: &PitcherSeasonSummary, b: &PitcherSeasonSummary) -> Ordering {
    b.games_started
        .cmp(&a.games_started)
        .then_with(|| a.pitcher_id.cmp(&b.pitcher_id))
}

/// Keeps the `n` busiest starters of each team, ordered by team, then starts, then id.
#[must_use]
pub fn top_starters_per_team(
    mut rows: Vec<PitcherSeasonSummary>,
    n: usize,
) -> Vec<PitcherSeasonSummary> {
    rows.sort_by(by_starts_then_id);

    let mut taken: AHashMap<String, usize> = AHashMap::new();
    rows.retain(|row| {
        let count = taken.entry(row.team.clone()).or_insert(0);
        *count += 1;
        *count <= n
    });

    rows.sort_by(|a, b| a.team.cmp(&b.team).then_with(|| by_starts_then_id(a, b)));
    rows
}

/// Keeps one row per pitcher: the team where they started the most games.
/// Equal counts resolve to the row that came first.
#[must_use]
pub fn dedupe_traded_pitchers(mut rows: Vec<PitcherSeasonSummary>) -> Vec<PitcherSeasonSummary> {
    rows.sort_by(|a, b| b.games_started.cmp(&a.games_started));
    let mut seen: AHashSet<String> = AHashSet::new();
    rows.retain(|row| seen.insert(row.pitcher_id.clone()));
    rows
}

/// Left join on pitcher id; a pitcher with no ERA keeps its row.
#[must_use]
pub fn attach_era(
    mut rows: Vec<PitcherSeasonSummary>,
    era: &EraTable,
) -> Vec<PitcherSeasonSummary> {
    for row in &mut rows {
        row.era = era.era(&row.pitcher_id);
    }
    rows
}

/// Runs every step from raw games to the per-pitcher season table.
#[must_use]
pub fn season_summary(games: &[GameRecord], era: &EraTable, year: i32) -> SeasonSummary {
    let season_games = games_in_season(games, year);
    let appearances = unpivot_appearances(&season_games);
    let starters = aggregate_starters(&appearances);
    let top = top_starters_per_team(starters, TOP_STARTERS_PER_TEAM);
    let rows = attach_era(dedupe_traded_pitchers(top), era);

    SeasonSummary { year, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(date: i64, vt: &str, ht: &str, vsp: Option<&str>, hsp: Option<&str>) -> GameRecord {
        GameRecord {
            date,
            visiting_team: vt.to_string(),
            home_team: ht.to_string(),
            visiting_starter_name: vsp.map(|s| format!("{s} name")),
            visiting_starter_id: vsp.map(str::to_string),
            home_starter_name: hsp.map(|s| format!("{s} name")),
            home_starter_id: hsp.map(str::to_string),
            winning_pitcher_name: None,
            winning_pitcher_id: None,
            losing_pitcher_name: None,
            losing_pitcher_id: None,
            visiting_score: 0,
            home_score: 0,
            visiting_errors: 0,
        }
    }

    fn summary(team: &str, id: &str, gs: u32) -> PitcherSeasonSummary {
        PitcherSeasonSummary {
            team: team.to_string(),
            pitcher_id: id.to_string(),
            pitcher_name: id.to_string(),
            games_started: gs,
            wins: 0,
            losses: 0,
            decisions: vec![Decision::NoDecision; gs as usize],
            team_runs: 0.0,
            team_errors: 0.0,
            record: win_loss_record(0, 0),
            era: None,
        }
    }

    #[test]
    fn rounding_keeps_one_decimal() {
        assert_eq!(round_one_decimal(4.0 / 3.0), 1.3);
        assert_eq!(round_one_decimal(0.25), 0.3);
        assert_eq!(round_one_decimal(7.0), 7.0);
    }

    #[test]
    fn unpivot_lists_visitors_first_and_shares_errors() {
        let mut g1 = game(20240401, "NYA", "BOS", Some("v1"), Some("h1"));
        g1.visiting_score = 3;
        g1.home_score = 5;
        g1.visiting_errors = 2;
        let g2 = game(20240402, "NYA", "BOS", None, Some("h2"));
        let games = [&g1, &g2];

        let apps = unpivot_appearances(&games);
        let ids: Vec<&str> = apps.iter().map(|a| a.starter_id.as_str()).collect();
        assert_eq!(ids, vec!["v1", "h1", "h2"]);
        assert_eq!(apps[0].team_runs, 3);
        assert_eq!(apps[1].team_runs, 5);
        assert_eq!(apps[0].team_errors, 2);
        assert_eq!(apps[1].team_errors, 2);
    }

    #[test]
    fn aggregate_counts_decisions_and_means() {
        let mut g1 = game(20240401, "NYA", "BOS", Some("x"), Some("y"));
        g1.winning_pitcher_id = Some("x".into());
        g1.losing_pitcher_id = Some("y".into());
        g1.visiting_score = 4;
        g1.visiting_errors = 1;
        let mut g2 = game(20240405, "NYA", "BOS", Some("x"), Some("y"));
        g2.winning_pitcher_id = Some("z".into());
        g2.visiting_score = 3;
        let mut g3 = game(20240409, "NYA", "BOS", Some("x"), Some("y"));
        g3.losing_pitcher_id = Some("x".into());
        g3.visiting_score = 0;
        let games = [&g1, &g2, &g3];

        let rows = aggregate_starters(&unpivot_appearances(&games));
        let x = rows.iter().find(|r| r.pitcher_id == "x").unwrap();
        assert_eq!((x.games_started, x.wins, x.losses), (3, 1, 1));
        assert_eq!(x.no_decisions(), 1);
        assert_eq!(x.team_runs, 2.3);
        assert_eq!(x.team_errors, 0.3);
        assert_eq!(x.record, "1-1");
        assert_eq!(
            x.decisions,
            vec![Decision::Win, Decision::NoDecision, Decision::Loss]
        );
        assert_eq!(x.pitcher_name, "x name");
    }

    #[test]
    fn top_n_limits_each_team_and_breaks_ties_on_id() {
        let rows = vec![
            summary("NYA", "e", 2),
            summary("NYA", "a", 9),
            summary("NYA", "d", 4),
            summary("NYA", "c", 4),
            summary("NYA", "b", 6),
            summary("NYA", "f", 1),
            summary("BOS", "z", 3),
        ];
        let top = top_starters_per_team(rows, 5);
        let ids: Vec<&str> = top.iter().map(|r| r.pitcher_id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "b", "c", "d", "e"]);
    }

    #[test]
    fn dedupe_keeps_team_with_most_starts() {
        let rows = vec![
            summary("BOS", "t", 3),
            summary("NYA", "u", 4),
            summary("NYA", "t", 5),
        ];
        let kept = dedupe_traded_pitchers(rows);
        assert_eq!(kept.len(), 2);
        let t = kept.iter().find(|r| r.pitcher_id == "t").unwrap();
        assert_eq!(t.team, "NYA");
    }

    #[test]
    fn dedupe_tie_goes_to_first_row() {
        let rows = vec![summary("BOS", "t", 4), summary("NYA", "t", 4)];
        let kept = dedupe_traded_pitchers(rows);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].team, "BOS");
    }

    #[test]
    fn missing_era_keeps_row() {
        let era: EraTable = [("a".to_string(), Some(2.5))].into_iter().collect();
        let rows = attach_era(vec![summary("NYA", "a", 1), summary("NYA", "b", 1)], &era);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].era, Some(2.5));
        assert_eq!(rows[1].era, None);
    }
}
