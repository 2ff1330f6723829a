mod data_loader;
mod elimination;
mod error;
mod mode_api;
mod report;
mod standings;
mod standings_context;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use data_loader::DataDir;
use mode_api::ModeClient;
use standings_context::StandingsContext;

#[derive(Parser)]
#[command(name = "gollyx-standings")]
#[command(about = "League standings with clinch, elimination and wild card numbers", long_about = None)]
struct Cli {
    /// Which cup's data to read, e.g. "ii"
    #[arg(long, default_value = "ii")]
    cup: String,

    /// Scheduled days in the regular season
    #[arg(long, default_value_t = 49)]
    days_per_season: usize,

    /// Directory holding the gollyx-<cup>-data checkout
    #[arg(long, env = "GOLLYX_BASE_DATA_DIR")]
    base_data_dir: PathBuf,

    /// Pin the season (0-based) instead of asking the cloud
    #[arg(long)]
    season: Option<usize>,

    /// Pin the cutoff day (0-based) instead of asking the cloud
    #[arg(long)]
    day: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let context = StandingsContext::new(cli.days_per_season);

    // One cloud round-trip, skipped when both halves are pinned on the
    // command line.
    let (season0, day0) = match (cli.season, cli.day) {
        (Some(season), Some(day)) => (season, day),
        (season, day) => {
            let (cloud_season, cloud_day) = ModeClient::new(&cli.cup).current_season_day(&context)?;
            (season.unwrap_or(cloud_season), day.unwrap_or(cloud_day))
        }
    };
    info!("standings for season {} through day {}", season0, day0);

    let data = DataDir::new(&cli.base_data_dir, &cli.cup);
    let game_log = data.load_season(season0)?;
    let teams = data.load_teams(season0)?;

    let table = standings::division_standings_for_day(&game_log, &teams, day0)?;
    let classified = elimination::analyze(&table, day0, &context)?;

    report::print_standings(&classified, season0, day0, &context);
    report::print_legend();

    Ok(())
}
