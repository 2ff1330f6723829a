use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::{Result, StandingsError};

/// One season of games. The outer index is the day (0-based), the inner list
/// holds that day's games. A team appears at most once per day.
pub type SeasonLog = Vec<Vec<Game>>;

#[derive(Deserialize, Debug, Clone)]
pub struct Team {
    #[serde(rename(deserialize = "teamAbbr"))]
    pub abbr: String,
    #[serde(rename(deserialize = "teamName"))]
    pub name: String,
    pub league: String,
    pub division: String,
}

// Each game carries both sides' pre-game win/loss totals as written by the
// season generator. The accumulator trusts those instead of replaying the
// whole season, so they have to be correct in the data.
#[derive(Deserialize, Debug, Clone)]
pub struct Game {
    #[serde(rename(deserialize = "team1Abbr"))]
    pub team1_abbr: String,
    #[serde(rename(deserialize = "team2Abbr"))]
    pub team2_abbr: String,
    #[serde(rename(deserialize = "team1Score"))]
    pub team1_score: u32,
    #[serde(rename(deserialize = "team2Score"))]
    pub team2_score: u32,
    #[serde(rename(deserialize = "team1WinLoss"))]
    pub team1_win_loss: [u32; 2],
    #[serde(rename(deserialize = "team2WinLoss"))]
    pub team2_win_loss: [u32; 2],
}

/// Season data on disk: `<base>/gollyx-<cup>-data/season<N>/{season,teams}.json`.
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(base_dir: &Path, cup: &str) -> Self {
        Self {
            root: base_dir.join(format!("gollyx-{}-data", cup.to_lowercase())),
        }
    }

    /// Loads the day-indexed game log for a season (0-based).
    pub fn load_season(&self, season: usize) -> Result<SeasonLog> {
        let log: SeasonLog = self.load_json(season, "season.json")?;
        debug!("season {} log covers {} days", season, log.len());
        Ok(log)
    }

    /// Loads the team roster for a season (0-based).
    pub fn load_teams(&self, season: usize) -> Result<Vec<Team>> {
        let teams: Vec<Team> = self.load_json(season, "teams.json")?;
        debug!("season {} roster has {} teams", season, teams.len());
        Ok(teams)
    }

    fn load_json<T: serde::de::DeserializeOwned>(&self, season: usize, file: &str) -> Result<T> {
        let path = self.root.join(format!("season{}", season)).join(file);
        if !path.exists() {
            return Err(StandingsError::SeasonNotFound { season, path });
        }

        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }
}
