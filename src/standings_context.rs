use crate::error::{Result, StandingsError};

/// Season-shape parameters. Adjust these for cups that play a different
/// number of days or hand out a different number of wild card berths.
#[derive(Debug, Clone)]
pub struct StandingsContext {
    /// Scheduled days in the regular season.
    pub days_per_season: usize,
    /// League-wide wild card berths.
    pub wild_card_slots: usize,
}

impl StandingsContext {
    pub fn new(days_per_season: usize) -> Self {
        Self {
            days_per_season,
            wild_card_slots: 2,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.days_per_season == 0 {
            return Err(StandingsError::Configuration(
                "days per season must be positive".to_string(),
            ));
        }
        if self.wild_card_slots == 0 {
            return Err(StandingsError::Configuration(
                "wild card slots must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Last scheduled day, 0-based.
    pub fn final_day(&self) -> usize {
        self.days_per_season - 1
    }

    /// Days still to play after the cutoff.
    pub fn days_left(&self, day0: usize) -> usize {
        self.days_per_season - day0 - 1
    }
}
