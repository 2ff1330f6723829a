use crate::elimination::{Classification, ClassifiedTable, EliminationStatus};
use crate::standings::StandingsRow;
use crate::standings_context::StandingsContext;

pub fn print_standings(
    table: &ClassifiedTable,
    season0: usize,
    day0: usize,
    context: &StandingsContext,
) {
    println!("Standings:");
    println!("Season {}, Day {}", season0 + 1, day0 + 1);
    println!();

    for (key, rows) in table {
        println!("{}, {}:", key.league, key.division);
        println!("===========================================");
        println!();
        println!("  Team  |  W  |  L  | Pct   | GB | Left | Elim # | WC Elim # ");
        println!("-------------------------------------------------------------");

        for (row, status) in rows {
            println!(
                "{0}{1:5} | {2:>3} | {3:>3} | {4:>3.3} | {5:>2} | {6:>4} | {7:>6} | {8:>9} ",
                prefix(status.classification),
                row.abbr,
                row.wins,
                row.losses,
                winning_percentage(row),
                games_behind_cell(status),
                context.days_left(day0),
                number_cell(status.division_elim),
                number_cell(status.wild_card_elim),
            );
        }

        println!("\n");
    }
}

pub fn print_legend() {
    println!();
    println!("Legend:");
    println!("    y-       Clinched Division");
    println!("    w-       Wild Card Current Holder");
    println!("    x-       Eliminated");
}

fn prefix(classification: Classification) -> &'static str {
    match classification {
        Classification::Clinched => "y-",
        Classification::WildCardHolder => "w-",
        Classification::Eliminated => "x-",
        Classification::Active => "  ",
    }
}

fn winning_percentage(row: &StandingsRow) -> f64 {
    row.wins as f64 / (row.wins + row.losses) as f64
}

// The leader's cell stays empty; zero or fewer games behind prints a dash.
fn games_behind_cell(status: &EliminationStatus) -> String {
    match status.games_behind {
        Some(gb) if gb > 0 => gb.to_string(),
        Some(_) => "-".to_string(),
        None => String::new(),
    }
}

fn number_cell(value: Option<i64>) -> String {
    match value {
        Some(n) => n.to_string(),
        None => String::new(),
    }
}
