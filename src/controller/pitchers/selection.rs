use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::model::{
    NumericColumn, PitcherSeasonSummary, SeasonSummary, SummaryRequest, TeamChoice,
    team_display_name,
};

/// Rows shown when the "show all" switch is off.
pub const TOP_ROWS: usize = 14;

/// Missing values sort first in both directions.
fn compare_by(
    a: &PitcherSeasonSummary,
    b: &PitcherSeasonSummary,
    column: NumericColumn,
    descending: bool,
) -> Ordering {
    match (column.value(a), column.value(b)) {
        (Some(x), Some(y)) => {
            let ord = x.total_cmp(&y);
            if descending { ord.reverse() } else { ord }
        }
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Applies the table selections (team filter, sort, top rows) to a season summary.
#[must_use]
pub fn compute_summary(season: &SeasonSummary, request: &SummaryRequest) -> SeasonSummary {
    let mut rows: Vec<PitcherSeasonSummary> = season
        .rows
        .iter()
        .filter(|row| request.teams.is_empty() || request.teams.contains(&row.team))
        .cloned()
        .collect();

    rows.sort_by(|a, b| compare_by(a, b, request.sort, request.descending));

    if !request.show_all {
        rows.truncate(TOP_ROWS);
    }

    SeasonSummary {
        year: season.year,
        rows,
    }
}

/// Teams present in the season, ordered by display name.
#[must_use]
pub fn team_choices(season: &SeasonSummary) -> Vec<TeamChoice> {
    let codes: BTreeSet<&str> = season.rows.iter().map(|row| row.team.as_str()).collect();
    let mut choices: Vec<TeamChoice> = codes
        .into_iter()
        .map(|code| TeamChoice {
            code: code.to_string(),
            display: team_display_name(code).to_string(),
        })
        .collect();
    choices.sort_by(|a, b| a.display.cmp(&b.display));
    choices
}
