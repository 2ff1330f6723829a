use std::collections::{BTreeMap, HashMap};

use crate::data_loader::{SeasonLog, Team};
use crate::error::{Result, StandingsError};

/// Composite (league, division) key. `Ord` makes a `BTreeMap` iterate in
/// league-then-division order, which is also the print order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DivisionKey {
    pub league: String,
    pub division: String,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
    pub points_scored: u32,
}

/// Ranked snapshot of one team, read-only from here on.
#[derive(Debug, Clone)]
pub struct StandingsRow {
    pub abbr: String,
    pub wins: u32,
    pub losses: u32,
    pub points_scored: u32,
}

pub type StandingsTable = BTreeMap<DivisionKey, Vec<StandingsRow>>;

/// Replays the game log through `day0` (inclusive) into per-team records.
///
/// Points are summed over every day up to the cutoff. Wins and losses come
/// from the cutoff day alone: each game carries both sides' pre-game totals,
/// so one day's results place every team that played that day. A team with
/// no game on the cutoff day keeps a 0-0 record.
pub fn accumulate_records(
    log: &SeasonLog,
    day0: usize,
    teams: &[Team],
) -> Result<HashMap<String, TeamRecord>> {
    if day0 >= log.len() {
        return Err(StandingsError::DayNotFound {
            day: day0,
            days: log.len(),
        });
    }

    let mut records: HashMap<String, TeamRecord> = teams
        .iter()
        .map(|t| (t.abbr.clone(), TeamRecord::default()))
        .collect();

    for day in &log[..=day0] {
        for game in day {
            record_mut(&mut records, &game.team1_abbr)?.points_scored += game.team1_score;
            record_mut(&mut records, &game.team2_abbr)?.points_scored += game.team2_score;
        }
    }

    for game in &log[day0] {
        let [mut w1, mut l1] = game.team1_win_loss;
        let [mut w2, mut l2] = game.team2_win_loss;

        if game.team1_score == game.team2_score {
            return Err(StandingsError::TiedGame {
                team1: game.team1_abbr.clone(),
                team2: game.team2_abbr.clone(),
                day: day0,
                score: game.team1_score,
            });
        }

        if game.team1_score > game.team2_score {
            w1 += 1;
            l2 += 1;
        } else {
            w2 += 1;
            l1 += 1;
        }

        let record = record_mut(&mut records, &game.team1_abbr)?;
        record.wins = w1;
        record.losses = l1;

        let record = record_mut(&mut records, &game.team2_abbr)?;
        record.wins = w2;
        record.losses = l2;
    }

    Ok(records)
}

fn record_mut<'a>(
    records: &'a mut HashMap<String, TeamRecord>,
    abbr: &str,
) -> Result<&'a mut TeamRecord> {
    records
        .get_mut(abbr)
        .ok_or_else(|| StandingsError::TeamNotFound(abbr.to_string()))
}

/// Groups records by division and ranks each group best record first.
/// Points scored breaks ties on wins; roster order breaks full ties.
pub fn division_standings(
    records: &HashMap<String, TeamRecord>,
    teams: &[Team],
) -> Result<StandingsTable> {
    let mut table = StandingsTable::new();

    for team in teams {
        let record = records
            .get(&team.abbr)
            .ok_or_else(|| StandingsError::TeamNotFound(team.abbr.clone()))?;

        let key = DivisionKey {
            league: team.league.clone(),
            division: team.division.clone(),
        };
        table.entry(key).or_default().push(StandingsRow {
            abbr: team.abbr.clone(),
            wins: record.wins,
            losses: record.losses,
            points_scored: record.points_scored,
        });
    }

    for rows in table.values_mut() {
        rows.sort_by(|a, b| (b.wins, b.points_scored).cmp(&(a.wins, a.points_scored)));
    }

    Ok(table)
}

/// Record accumulation and ranking in one call.
pub fn division_standings_for_day(
    log: &SeasonLog,
    teams: &[Team],
    day0: usize,
) -> Result<StandingsTable> {
    let records = accumulate_records(log, day0, teams)?;
    division_standings(&records, teams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_loader::Game;

    fn team(abbr: &str, league: &str, division: &str) -> Team {
        Team {
            abbr: abbr.to_string(),
            name: abbr.to_string(),
            league: league.to_string(),
            division: division.to_string(),
        }
    }

    fn game(
        team1: &str,
        team2: &str,
        score1: u32,
        score2: u32,
        wl1: [u32; 2],
        wl2: [u32; 2],
    ) -> Game {
        Game {
            team1_abbr: team1.to_string(),
            team2_abbr: team2.to_string(),
            team1_score: score1,
            team2_score: score2,
            team1_win_loss: wl1,
            team2_win_loss: wl2,
        }
    }

    fn two_team_roster() -> Vec<Team> {
        vec![
            team("EA", "X League", "Y Division"),
            team("SS", "X League", "Y Division"),
        ]
    }

    #[test]
    fn points_accumulate_over_all_days() {
        let roster = two_team_roster();
        let log = vec![
            vec![game("EA", "SS", 10, 7, [0, 0], [0, 0])],
            vec![game("SS", "EA", 3, 5, [0, 1], [1, 0])],
        ];

        let records = accumulate_records(&log, 1, &roster).unwrap();
        assert_eq!(records["EA"].points_scored, 15);
        assert_eq!(records["SS"].points_scored, 10);
    }

    #[test]
    fn wins_and_losses_come_from_cutoff_day() {
        let roster = two_team_roster();
        // Day 4's embedded counts say 3-1 and 1-3 going in.
        let log = vec![
            vec![],
            vec![],
            vec![],
            vec![],
            vec![game("EA", "SS", 2, 9, [3, 1], [1, 3])],
        ];

        let records = accumulate_records(&log, 4, &roster).unwrap();
        assert_eq!((records["EA"].wins, records["EA"].losses), (3, 2));
        assert_eq!((records["SS"].wins, records["SS"].losses), (2, 3));
        // Through the cutoff both sides have played five games.
        assert_eq!(records["EA"].wins + records["EA"].losses, 5);
        assert_eq!(records["SS"].wins + records["SS"].losses, 5);
    }

    #[test]
    fn cutoff_past_log_is_not_found() {
        let roster = two_team_roster();
        let log = vec![vec![game("EA", "SS", 1, 0, [0, 0], [0, 0])]];

        let err = accumulate_records(&log, 3, &roster).unwrap_err();
        match err {
            StandingsError::DayNotFound { day, days } => {
                assert_eq!(day, 3);
                assert_eq!(days, 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn unknown_team_is_not_found() {
        let roster = two_team_roster();
        let log = vec![vec![game("EA", "ZZ", 1, 0, [0, 0], [0, 0])]];

        let err = accumulate_records(&log, 0, &roster).unwrap_err();
        match err {
            StandingsError::TeamNotFound(abbr) => assert_eq!(abbr, "ZZ"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn tied_score_is_refused() {
        let roster = two_team_roster();
        let log = vec![vec![game("EA", "SS", 4, 4, [0, 0], [0, 0])]];

        let err = accumulate_records(&log, 0, &roster).unwrap_err();
        match err {
            StandingsError::TiedGame { score, day, .. } => {
                assert_eq!(score, 4);
                assert_eq!(day, 0);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn ranks_by_wins_then_points() {
        let roster = vec![
            team("AA", "X League", "Y Division"),
            team("BB", "X League", "Y Division"),
            team("CC", "X League", "Y Division"),
        ];
        let mut records = HashMap::new();
        records.insert(
            "AA".to_string(),
            TeamRecord { wins: 5, losses: 5, points_scored: 100 },
        );
        records.insert(
            "BB".to_string(),
            TeamRecord { wins: 7, losses: 3, points_scored: 80 },
        );
        records.insert(
            "CC".to_string(),
            TeamRecord { wins: 5, losses: 5, points_scored: 120 },
        );

        let table = division_standings(&records, &roster).unwrap();
        let rows = &table[&DivisionKey {
            league: "X League".to_string(),
            division: "Y Division".to_string(),
        }];
        let order: Vec<&str> = rows.iter().map(|r| r.abbr.as_str()).collect();
        assert_eq!(order, ["BB", "CC", "AA"]);
    }

    #[test]
    fn full_ties_keep_roster_order() {
        let roster = vec![
            team("AA", "X League", "Y Division"),
            team("BB", "X League", "Y Division"),
        ];
        let mut records = HashMap::new();
        records.insert(
            "AA".to_string(),
            TeamRecord { wins: 4, losses: 4, points_scored: 50 },
        );
        records.insert(
            "BB".to_string(),
            TeamRecord { wins: 4, losses: 4, points_scored: 50 },
        );

        let table = division_standings(&records, &roster).unwrap();
        let rows = table.values().next().unwrap();
        assert_eq!(rows[0].abbr, "AA");
        assert_eq!(rows[1].abbr, "BB");
    }

    #[test]
    fn groups_split_by_league_and_division() {
        let roster = vec![
            team("AA", "X League", "Y Division"),
            team("BB", "X League", "Z Division"),
            team("CC", "W League", "Y Division"),
        ];
        let records: HashMap<String, TeamRecord> = roster
            .iter()
            .map(|t| (t.abbr.clone(), TeamRecord::default()))
            .collect();

        let table = division_standings(&records, &roster).unwrap();
        let keys: Vec<(&str, &str)> = table
            .keys()
            .map(|k| (k.league.as_str(), k.division.as_str()))
            .collect();
        // BTreeMap ordering: league first, then division.
        assert_eq!(
            keys,
            [
                ("W League", "Y Division"),
                ("X League", "Y Division"),
                ("X League", "Z Division"),
            ]
        );
    }
}
