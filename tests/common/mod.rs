#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use rusty_pitchers::args::{CleanArgs, Command};
use rusty_pitchers::view::pitchers::AssetPaths;
use tempfile::TempDir;

pub const GAME_HEADER: &str = "Date,VT,HT,VT Starting Pitcher Name,VT Starting Pitcher ID,HT Starting Pitcher Name,HT Starting Pitcher ID,Winning Pitcher Name,Winning Pitcher ID,Losing Pitcher Name,Losing Pitcher ID,VT Score,HT Score,VT Errors";

/// One game row; empty pitcher ids are written as empty cells.
#[derive(Clone, Debug)]
pub struct Game {
    pub date: i64,
    pub vt: String,
    pub ht: String,
    pub vsp: String,
    pub hsp: String,
    pub win: String,
    pub loss: String,
    pub vt_score: u32,
    pub ht_score: u32,
    pub vt_errors: u32,
}

impl Game {
    pub fn new(date: i64, vt: &str, vsp: &str, ht: &str, hsp: &str) -> Self {
        Self {
            date,
            vt: vt.to_string(),
            ht: ht.to_string(),
            vsp: vsp.to_string(),
            hsp: hsp.to_string(),
            win: String::new(),
            loss: String::new(),
            vt_score: 0,
            ht_score: 0,
            vt_errors: 0,
        }
    }

    pub fn decided(mut self, win: &str, loss: &str) -> Self {
        self.win = win.to_string();
        self.loss = loss.to_string();
        self
    }

    pub fn score(mut self, vt_score: u32, ht_score: u32, vt_errors: u32) -> Self {
        self.vt_score = vt_score;
        self.ht_score = ht_score;
        self.vt_errors = vt_errors;
        self
    }

    fn name(id: &str) -> String {
        if id.is_empty() {
            String::new()
        } else {
            format!("Pitcher {id}")
        }
    }

    pub fn line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            self.date,
            self.vt,
            self.ht,
            Self::name(&self.vsp),
            self.vsp,
            Self::name(&self.hsp),
            self.hsp,
            Self::name(&self.win),
            self.win,
            Self::name(&self.loss),
            self.loss,
            self.vt_score,
            self.ht_score,
            self.vt_errors
        )
    }
}

pub fn games_csv(games: &[Game]) -> String {
    let mut csv = String::from(GAME_HEADER);
    csv.push('\n');
    for game in games {
        csv.push_str(&game.line());
        csv.push('\n');
    }
    csv
}

pub const TEAMS: [&str; 6] = ["NYA", "BOS", "TBA", "TOR", "BAL", "CHA"];

/// A deterministic season: six teams, seven-man rotations, a mix of starter wins,
/// losses and bullpen decisions, some games with no home starter, and one pitcher
/// (`trade01`) who starts 9 games for BOS and then 14 for NYA.
pub fn synthetic_season(year: i32) -> Vec<Game> {
    let base = i64::from(year) * 10000;
    let mut games = Vec::new();
    for i in 0..120usize {
        let day = base + 401 + (i as i64 / 28) * 100 + (i as i64 % 28);
        let vt = TEAMS[i % 6];
        let ht = TEAMS[(i + 1 + i / 6) % 6];
        let ht = if ht == vt { TEAMS[(i + 2) % 6] } else { ht };
        let vsp = format!("{}{}", vt.to_lowercase(), i % 7);
        let hsp = if i % 11 == 0 {
            String::new()
        } else {
            format!("{}{}", ht.to_lowercase(), (i + 3) % 7)
        };
        let mut game = Game::new(day, vt, &vsp, ht, &hsp).score(
            (i % 9) as u32,
            ((i * 5) % 8) as u32,
            (i % 3) as u32,
        );
        game = match i % 3 {
            0 => game.decided(&vsp, &hsp),
            1 => game.decided("rel1", "rel2"),
            _ => {
                let loss = vsp.clone();
                game.decided(&hsp, &loss)
            }
        };
        games.push(game);
    }
    for k in 0..23i64 {
        let (team, opp, opp_sp) = if k < 9 {
            ("BOS", "TOR", "tor_spot")
        } else {
            ("NYA", "BAL", "bal_spot")
        };
        games.push(
            Game::new(base + 901 + k, team, "trade01", opp, opp_sp)
                .decided("trade01", opp_sp)
                .score(5, 1, 0),
        );
    }
    games
}

pub const ERA_HEADER: &str = "Name,key_retro,ERA";

pub fn era_csv(entries: &[(&str, &str)]) -> String {
    let mut csv = String::from(ERA_HEADER);
    csv.push('\n');
    for (key, era) in entries {
        csv.push_str(&format!("Pitcher {key},{key},{era}\n"));
    }
    csv
}

pub struct Fixture {
    pub dir: TempDir,
    pub args: CleanArgs,
}

/// Writes a games file and one `{year}era.csv` per entry into a fresh temp directory.
pub fn fixture(games: &[Game], eras: &[(i32, String)], years: &[i32]) -> Fixture {
    let dir = tempfile::tempdir().expect("tempdir");
    let games_path = dir.path().join("games.csv");
    fs::write(&games_path, games_csv(games)).expect("write games");
    for (year, csv) in eras {
        fs::write(dir.path().join(format!("{year}era.csv")), csv).expect("write era");
    }

    let args = CleanArgs {
        data_dir: PathBuf::from(dir.path()),
        games_path,
        years: years.to_vec(),
        default_year: *years.last().expect("at least one year"),
        assets: AssetPaths::new("logos", "headshots"),
        command: Command::Serve {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
    };
    Fixture { dir, args }
}

pub fn standard_fixture() -> Fixture {
    let mut games = synthetic_season(2023);
    games.extend(synthetic_season(2024));
    let era_2024 = era_csv(&[
        ("nya0", "2.95"),
        ("nya1", "4.10"),
        ("bos3", "6.80"),
        ("trade01", "3.33"),
        ("tba4", "bad"),
    ]);
    fixture(&games, &[(2024, era_2024)], &[2023, 2024])
}
