use std::path::PathBuf;

use thiserror::Error;

/// Error type shared by the loaders, the cloud client and the standings core.
#[derive(Error, Debug)]
pub enum StandingsError {
    // Missing data
    #[error("season {season} not valid: {path} does not exist")]
    SeasonNotFound { season: usize, path: PathBuf },

    #[error("day {day} is past the end of the game log ({days} days recorded)")]
    DayNotFound { day: usize, days: usize },

    #[error("team {0} is not in the season roster")]
    TeamNotFound(String),

    // Structurally unusable input
    #[error("configuration error: {0}")]
    Configuration(String),

    // A game with no winner derivable
    #[error("game {team1} vs {team2} on day {day} ended tied {score}-{score}")]
    TiedGame {
        team1: String,
        team2: String,
        day: usize,
        score: u32,
    },

    // Transport and decoding
    #[error("cloud API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StandingsError>;
