use std::collections::BTreeMap;

use crate::error::{Result, StandingsError};
use crate::standings::{DivisionKey, StandingsRow, StandingsTable};
use crate::standings_context::StandingsContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Division title locked up (leader only).
    Clinched,
    /// Currently inside the league's wild card berths.
    WildCardHolder,
    /// Out of reach of both the division title and a wild card berth.
    Eliminated,
    Active,
}

#[derive(Debug, Clone)]
pub struct EliminationStatus {
    pub classification: Classification,
    /// `None` for the division leader. Can go negative when the leader has a
    /// worse win-loss differential than a chaser; the presenter shows a dash
    /// for anything at or below zero.
    pub games_behind: Option<i64>,
    /// `None` for the division leader.
    pub division_elim: Option<i64>,
    /// `None` for the leader and for wild card holders.
    pub wild_card_elim: Option<i64>,
}

pub type ClassifiedTable = BTreeMap<DivisionKey, Vec<(StandingsRow, EliminationStatus)>>;

/// Classifies every ranked row of every division.
///
/// Division races only need the division's own rows; the wild card races need
/// the non-leaders of every division in the same league, so the league pool
/// is built once and shared across that league's divisions.
pub fn analyze(
    table: &StandingsTable,
    day0: usize,
    context: &StandingsContext,
) -> Result<ClassifiedTable> {
    context.validate()?;
    if day0 > context.final_day() {
        return Err(StandingsError::Configuration(format!(
            "cutoff day {} is outside the scheduled season (0..={})",
            day0,
            context.final_day()
        )));
    }

    let mut classified = ClassifiedTable::new();

    for (key, rows) in table {
        let pool = wild_card_pool(table, &key.league);
        let statuses = analyze_division(rows, &pool, day0, context)?;
        classified.insert(key.clone(), rows.iter().cloned().zip(statuses).collect());
    }

    Ok(classified)
}

/// Every non-leader in the league, re-ranked together by the standings key.
/// The top entries of this pool hold the league's wild card berths.
pub fn wild_card_pool(table: &StandingsTable, league: &str) -> Vec<StandingsRow> {
    let mut pool: Vec<StandingsRow> = table
        .iter()
        .filter(|(key, _)| key.league == league)
        .flat_map(|(_, rows)| rows.iter().skip(1).cloned())
        .collect();

    pool.sort_by(|a, b| (b.wins, b.points_scored).cmp(&(a.wins, a.points_scored)));
    pool
}

fn analyze_division(
    rows: &[StandingsRow],
    pool: &[StandingsRow],
    day0: usize,
    context: &StandingsContext,
) -> Result<Vec<EliminationStatus>> {
    if rows.len() < 2 {
        return Err(StandingsError::Configuration(format!(
            "division needs at least 2 teams, got {}",
            rows.len()
        )));
    }
    if pool.len() < context.wild_card_slots {
        return Err(StandingsError::Configuration(format!(
            "wild card pool needs at least {} teams, got {}",
            context.wild_card_slots,
            pool.len()
        )));
    }

    let dps = context.days_per_season as i64;
    let leader = &rows[0];
    let mut statuses = Vec::with_capacity(rows.len());

    // Leader: magic number against the second place team's losses. The final
    // day clinches regardless of the count.
    let magic = dps + 1 - leader.wins as i64 - rows[1].losses as i64;
    let classification = if magic < 0 || day0 == context.final_day() {
        Classification::Clinched
    } else {
        Classification::Active
    };
    statuses.push(EliminationStatus {
        classification,
        games_behind: None,
        division_elim: None,
        wild_card_elim: None,
    });

    let wild_card_cut = &pool[context.wild_card_slots - 1];

    for row in &rows[1..] {
        let division_elim = dps + 1 - leader.wins as i64 - row.losses as i64;

        let holds_wild_card = pool[..context.wild_card_slots]
            .iter()
            .any(|wc| wc.abbr == row.abbr);

        // Hope is only gone once both the division race and the wild card
        // race are out of reach. Division elimination alone is not enough.
        let (classification, wild_card_elim) = if holds_wild_card {
            (Classification::WildCardHolder, None)
        } else {
            let wild_card_elim = dps + 1 - wild_card_cut.wins as i64 - row.losses as i64;
            if division_elim <= 0 && wild_card_elim <= 0 {
                (Classification::Eliminated, Some(wild_card_elim))
            } else {
                (Classification::Active, Some(wild_card_elim))
            }
        };

        // Floor division, so a 1-game differential gap still rounds down.
        let games_behind = ((leader.wins as i64 - leader.losses as i64)
            - (row.wins as i64 - row.losses as i64))
            .div_euclid(2);

        statuses.push(EliminationStatus {
            classification,
            games_behind: Some(games_behind),
            division_elim: Some(division_elim),
            wild_card_elim,
        });
    }

    Ok(statuses)
}
