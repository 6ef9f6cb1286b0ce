mod common;

use rusty_pitchers::args::OutputFormat;
use rusty_pitchers::controller::pitchers::render_report;
use rusty_pitchers::model::{NumericColumn, SummaryRequest};
use scraper::{Html, Selector};
use serde_json::Value;

use common::{Game, era_csv, fixture, standard_fixture};

#[tokio::test]
async fn test4_standalone_page_is_complete() -> Result<(), Box<dyn std::error::Error>> {
    let fx = standard_fixture();
    let html = render_report(&fx.args, SummaryRequest::default(), OutputFormat::Html).await?;

    assert!(html.starts_with("<!DOCTYPE html>"));
    let doc = Html::parse_document(&html);
    let title = Selector::parse("title").unwrap();
    let title_text: String = doc
        .select(&title)
        .next()
        .map(|t| t.text().collect())
        .unwrap_or_default();
    assert_eq!(title_text, "MLB Pitcher Win-Loss Records: Skill or Luck? (2024)");

    // the standalone page has no controls, only the table
    let controls = Selector::parse("form#controls").unwrap();
    assert_eq!(doc.select(&controls).count(), 0);
    let rows = Selector::parse("tbody tr").unwrap();
    assert_eq!(doc.select(&rows).count(), 14);
    Ok(())
}

#[tokio::test]
async fn test4_json_report_respects_selections() -> Result<(), Box<dyn std::error::Error>> {
    let fx = standard_fixture();
    let request = SummaryRequest {
        sort: NumericColumn::GamesStarted,
        descending: true,
        teams: vec!["TOR".to_string()],
        show_all: true,
        ..SummaryRequest::default()
    };
    let json = render_report(&fx.args, request, OutputFormat::Json).await?;
    let rows: Value = serde_json::from_str(&json)?;
    let rows = rows.as_array().expect("rows");

    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|r| r["team"] == "TOR"));
    let starts: Vec<u64> = rows
        .iter()
        .filter_map(|r| r["games_started"].as_u64())
        .collect();
    assert!(starts.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(rows[0]["pitcher_id"], "tor_spot");
    assert_eq!(rows[0]["decisions"].as_array().map(Vec::len), Some(9));
    Ok(())
}

#[tokio::test]
async fn test4_report_is_byte_identical_across_runs() -> Result<(), Box<dyn std::error::Error>> {
    let fx = standard_fixture();
    let request = SummaryRequest {
        show_all: true,
        ..SummaryRequest::default()
    };
    let first = render_report(&fx.args, request.clone(), OutputFormat::Html).await?;
    let second = render_report(&fx.args, request, OutputFormat::Html).await?;
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn test4_malformed_rows_do_not_abort() -> Result<(), Box<dyn std::error::Error>> {
    let games = vec![
        Game::new(20240401, "NYA", "x01", "BOS", "b01").decided("x01", "b01"),
        Game::new(20240402, "NYA", "x01", "BOS", "b01").decided("b01", "x01"),
    ];
    let fx = fixture(&games, &[(2024, era_csv(&[("x01", "3.00")]))], &[2024]);

    let mut csv = std::fs::read_to_string(&fx.args.games_path)?;
    csv.push_str("notadate,NYA,BOS,Pitcher x01,x01,Pitcher b01,b01,,,,,1,2,0\n");
    csv.push_str("20240403,NYA,BOS,Pitcher x01,x01,Pitcher b01,b01,,,,,lots,2,0\n");
    std::fs::write(&fx.args.games_path, csv)?;

    let json = render_report(&fx.args, SummaryRequest::default(), OutputFormat::Json).await?;
    let rows: Value = serde_json::from_str(&json)?;
    let x = rows
        .as_array()
        .and_then(|rows| rows.iter().find(|r| r["pitcher_id"] == "x01"))
        .expect("x01 row");
    assert_eq!(x["games_started"], 2);
    assert_eq!(x["record"], "1-1");
    assert_eq!(x["era"], 3.0);
    Ok(())
}

#[tokio::test]
async fn test4_missing_game_file_is_an_error() {
    let fx = standard_fixture();
    std::fs::remove_file(&fx.args.games_path).expect("remove games file");
    let result = render_report(&fx.args, SummaryRequest::default(), OutputFormat::Html).await;
    assert!(result.is_err());
}
