use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::args::validation::{check_readable_dir, check_readable_file};
use crate::model::{DEFAULT_GAMES_FILE, NumericColumn};
use crate::view::pitchers::AssetPaths;

pub const LOGO_DIR: &str = "images";
pub const HEADSHOT_DIR: &str = "player_headshots_id";
/// Routes the server mounts the image folders under.
pub const LOGO_ROUTE: &str = "logos";
pub const HEADSHOT_ROUTE: &str = "headshots";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding the season game file, the `{year}era.csv` files and the image folders.
    #[arg(
        short = 'd',
        long,
        value_name = "DATA_DIR",
        default_value = "data",
        value_parser = check_readable_dir
    )]
    pub data_dir: PathBuf,
    /// Game file name, relative to the data directory.
    #[arg(long, value_name = "GAMES_FILE", default_value = DEFAULT_GAMES_FILE)]
    pub games_file: String,
    /// Seasons offered by the year selector. The last one is the default.
    #[arg(
        long,
        value_name = "YEARS",
        value_delimiter = ',',
        default_value = "2022,2023,2024"
    )]
    pub years: Vec<i32>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve the dashboard over http.
    Serve {
        #[arg(long, value_name = "HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(short = 'p', long, value_name = "PORT", default_value_t = 8081)]
        port: u16,
    },
    /// Render one table to a file or stdout.
    Render {
        /// Season to render; defaults to the last of --years.
        #[arg(short = 'y', long, value_name = "YEAR")]
        year: Option<i32>,
        #[arg(short = 's', long, value_name = "COLUMN", default_value = "wins")]
        sort: NumericColumn,
        #[arg(long)]
        ascending: bool,
        #[arg(long)]
        show_all: bool,
        /// Team code to keep; repeat for several teams. All teams when omitted.
        #[arg(short = 't', long = "team", value_name = "TEAM")]
        teams: Vec<String>,
        #[arg(short = 'f', long, value_enum, default_value = "html")]
        format: OutputFormat,
        #[arg(short = 'o', long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
        /// Prefix for image urls; defaults to the data directory.
        #[arg(long, value_name = "ASSET_BASE")]
        asset_base: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub data_dir: PathBuf,
    pub games_path: PathBuf,
    pub years: Vec<i32>,
    pub default_year: i32,
    pub assets: AssetPaths,
    pub command: Command,
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if the game file is not readable or no years are given.
    pub fn clean(self) -> Result<CleanArgs, String> {
        let games_path = self.data_dir.join(&self.games_file);
        check_readable_file(&games_path.to_string_lossy())?;

        let default_year = *self
            .years
            .last()
            .ok_or_else(|| "At least one year is required.".to_string())?;

        let assets = match &self.command {
            Command::Serve { .. } => AssetPaths::new(LOGO_ROUTE, HEADSHOT_ROUTE),
            Command::Render { asset_base, .. } => {
                let base = asset_base
                    .clone()
                    .unwrap_or_else(|| self.data_dir.to_string_lossy().into_owned());
                let base = base.trim_end_matches('/');
                AssetPaths::new(
                    &format!("{base}/{LOGO_DIR}"),
                    &format!("{base}/{HEADSHOT_DIR}"),
                )
            }
        };

        Ok(CleanArgs {
            data_dir: self.data_dir,
            games_path,
            years: self.years,
            default_year,
            assets,
            command: self.command,
        })
    }
}
