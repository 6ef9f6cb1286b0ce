use maud::Markup;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::error::AppError;
use crate::args::CleanArgs;
use crate::controller::pitchers::{compute_summary, season_summary, team_choices};
use crate::model::{
    EraTable, GameRecord, NumericColumn, SeasonSummary, SummaryRequest, load_era, load_games,
};
use crate::view::pitchers::{render_dashboard, render_standalone_page};

static TEAM_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{2,4}$").expect("team code pattern compiles"));

/// Which markup the render step produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Controls and table, for the htmx-driven index page.
    Dashboard,
    /// Full html document with the table only.
    Standalone,
}

#[derive(Debug, Clone)]
pub struct PitcherModel {
    pub request: SummaryRequest,
    pub layout: Layout,
    pub want_json: bool,
    pub games: Option<Vec<GameRecord>>,
    pub era: Option<EraTable>,
    pub season: Option<SeasonSummary>,
    pub table: Option<SeasonSummary>,
    pub markup: Option<Markup>,
    pub error: Option<AppError>,
}

impl PitcherModel {
    #[must_use]
    pub fn new(request: SummaryRequest, layout: Layout, want_json: bool) -> Self {
        Self {
            request,
            layout,
            want_json,
            games: None,
            era: None,
            season: None,
            table: None,
            markup: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    PageLoad,
    GamesLoaded(Vec<GameRecord>),
    EraLoaded(EraTable),
    SeasonComputed(SeasonSummary),
    Rendered(Markup),
    Failed(AppError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadGames,
    LoadEra,
    ComputeSeason,
    Render,
}

pub fn update(model: &mut PitcherModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::PageLoad => vec![Effect::LoadGames, Effect::LoadEra],
        Msg::GamesLoaded(games) => {
            model.games = Some(games);
            if model.era.is_some() {
                vec![Effect::ComputeSeason]
            } else {
                vec![]
            }
        }
        Msg::EraLoaded(era) => {
            model.era = Some(era);
            if model.games.is_some() {
                vec![Effect::ComputeSeason]
            } else {
                vec![]
            }
        }
        Msg::SeasonComputed(season) => {
            model.table = Some(compute_summary(&season, &model.request));
            model.season = Some(season);
            if model.want_json {
                vec![]
            } else {
                vec![Effect::Render]
            }
        }
        Msg::Rendered(markup) => {
            model.markup = Some(markup);
            vec![]
        }
        Msg::Failed(e) => {
            model.error = Some(e);
            vec![]
        }
    }
}

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub args: &'a CleanArgs,
}

pub async fn run_effect(effect: Effect, model: &PitcherModel, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::LoadGames => match load_games(&deps.args.games_path).await {
            Ok(games) => Msg::GamesLoaded(games),
            Err(e) => Msg::Failed(e),
        },
        Effect::LoadEra => match load_era(&deps.args.data_dir, model.request.year).await {
            Ok(era) => Msg::EraLoaded(era),
            Err(e) => Msg::Failed(e),
        },
        Effect::ComputeSeason => {
            if let (Some(games), Some(era)) = (model.games.as_ref(), model.era.as_ref()) {
                let season = season_summary(games, era, model.request.year);
                debug!(
                    "season {} summarised into {} pitchers",
                    season.year,
                    season.len()
                );
                Msg::SeasonComputed(season)
            } else {
                Msg::Failed(AppError::Other("Season requested without sources".into()))
            }
        }
        Effect::Render => {
            if let (Some(season), Some(table)) = (model.season.as_ref(), model.table.as_ref()) {
                let markup = match model.layout {
                    Layout::Dashboard => render_dashboard(
                        &model.request,
                        &team_choices(season),
                        &deps.args.years,
                        table,
                        &deps.args.assets,
                    ),
                    Layout::Standalone => render_standalone_page(table, &deps.args.assets),
                };
                Msg::Rendered(markup)
            } else {
                Msg::Failed(AppError::Other("Render requested without a table".into()))
            }
        }
    }
}

fn last_value<'a>(query: &'a [(String, String)], key: &str) -> Option<&'a str> {
    query
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.trim())
}

fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value {
        Some("1") => true,
        Some("0") => false,
        Some(other) => other.parse().unwrap_or(default),
        None => default,
    }
}

/// Parse query pairs into a `PitcherModel`. `teams` may repeat or hold a comma-separated list.
///
/// # Errors
///
/// Returns `AppError::Parse` for an unknown year, sort column or team code.
pub fn decode_request_to_model(
    query: &[(String, String)],
    args: &CleanArgs,
) -> Result<PitcherModel, AppError> {
    let year = match last_value(query, "yr") {
        Some(s) if !s.is_empty() => s
            .parse::<i32>()
            .map_err(|e| AppError::Parse(format!("yr (year) '{s}': {e}")))?,
        _ => args.default_year,
    };
    if !args.years.contains(&year) {
        return Err(AppError::Parse(format!(
            "yr (year) {year} is not one of {:?}",
            args.years
        )));
    }

    let sort = match last_value(query, "sort") {
        Some(s) if !s.is_empty() => s.parse::<NumericColumn>().map_err(AppError::Parse)?,
        _ => NumericColumn::Wins,
    };

    let mut teams: Vec<String> = Vec::new();
    for code in query
        .iter()
        .filter(|(k, _)| k == "teams")
        .flat_map(|(_, v)| v.split(','))
        .map(str::trim)
        .filter(|code| !code.is_empty())
    {
        if !TEAM_CODE.is_match(code) {
            return Err(AppError::Parse(format!("teams: '{code}' is not a team code")));
        }
        if !teams.iter().any(|t| t == code) {
            teams.push(code.to_string());
        }
    }

    let request = SummaryRequest {
        year,
        sort,
        descending: parse_flag(last_value(query, "desc"), true),
        teams,
        show_all: parse_flag(last_value(query, "show_all"), false),
    };
    let want_json = parse_flag(last_value(query, "json"), false);

    Ok(PitcherModel::new(request, Layout::Dashboard, want_json))
}
