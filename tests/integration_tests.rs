// Integration tests: the full pipeline from CSV file to rendered rankings,
// driven through the library crate's public API.

use std::path::Path;

use countback::ranking::pipeline::{rank, Competitor, RankedEntry};
use countback::render::render_rankings;
use countback::roster::build_competitors;
use countback::schema::detect_columns;
use countback::table::Table;

/// Fixture path, relative to the crate root (the cwd for `cargo test`).
const FIXTURE: &str = "tests/fixtures/leaderboard.csv";

fn load_fixture_rankings() -> Vec<RankedEntry> {
    let table = Table::from_csv_path(Path::new(FIXTURE), 1).expect("fixture should load");
    let columns = detect_columns(&table);
    let competitors = build_competitors(&table, &columns);
    rank(&competitors)
}

fn ranked_names(entries: &[RankedEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.competitor.name.as_str()).collect()
}

#[test]
fn fixture_columns_detected() {
    let table = Table::from_csv_path(Path::new(FIXTURE), 1).unwrap();
    let columns = detect_columns(&table);
    assert_eq!(table.headers[columns.player], "Player");
    assert_eq!(columns.total_points.map(|i| table.headers[i].as_str()), Some("Total Points"));
    assert_eq!(columns.total_spent.map(|i| table.headers[i].as_str()), Some("Total Spent"));
    assert_eq!(columns.rounds.len(), 4);
}

#[test]
fn fixture_filtering_keeps_six_players() {
    // Drops: numeric name, summary row, repeated header, duplicate Bob, and
    // the blank trailing row.
    let table = Table::from_csv_path(Path::new(FIXTURE), 1).unwrap();
    let columns = detect_columns(&table);
    let competitors = build_competitors(&table, &columns);
    let mut names: Vec<&str> = competitors.iter().map(|c| c.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Alice", "Bob", "Carol", "Dave", "Eve", "Zeta"]);
}

#[test]
fn fixture_full_cascade_order() {
    // Eve leads on points. The 100-point bucket resolves by spend (Carol
    // spent 80, the rest 50), then countback (Bob's fourth-best round loses
    // to the 25s), then name (Alice and Zeta are fully tied).
    let rankings = load_fixture_rankings();
    assert_eq!(
        ranked_names(&rankings),
        vec!["Eve", "Alice", "Zeta", "Bob", "Carol", "Dave"]
    );
}

#[test]
fn fixture_ranks_are_sequential_and_monotone() {
    let rankings = load_fixture_rankings();
    let ranks: Vec<usize> = rankings.iter().map(|e| e.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);
    for pair in rankings.windows(2) {
        assert!(
            pair[0].total_points >= pair[1].total_points,
            "{} ranked above {} with fewer points",
            pair[0].competitor.name,
            pair[1].competitor.name
        );
    }
}

#[test]
fn fixture_ranking_is_idempotent() {
    let table = Table::from_csv_path(Path::new(FIXTURE), 1).unwrap();
    let columns = detect_columns(&table);
    let competitors = build_competitors(&table, &columns);
    assert_eq!(rank(&competitors), rank(&competitors));
}

#[test]
fn fixture_renders_expected_table() {
    let rendered = render_rankings(&load_fixture_rankings());
    assert!(rendered.contains("FINAL RANKINGS"));
    let lines: Vec<&str> = rendered.lines().collect();
    assert!(lines[5].starts_with("1    Eve"));
    assert!(lines[6].starts_with("2    Alice"));
    assert!(lines[10].starts_with("6    Dave"));
    // Spend column keeps two decimals.
    assert!(lines[5].contains("70.00"));
}

#[test]
fn totals_computed_when_no_aggregate_columns_exist() {
    let data = "\
Player,R01,R02,R03
Nia,40,35,25
Omar,40,35,-
Pia,40,35,25
";
    let table = Table::from_reader(data.as_bytes(), 0, "inline.csv").unwrap();
    let columns = detect_columns(&table);
    assert_eq!(columns.total_points, None);
    assert_eq!(columns.total_spent, None);

    let competitors = build_competitors(&table, &columns);
    let rankings = rank(&competitors);

    // Nia and Pia total 100 and are fully tied: alphabetical order, spend
    // defaulted to zero for everyone.
    assert_eq!(ranked_names(&rankings), vec!["Nia", "Pia", "Omar"]);
    assert!((rankings[0].total_points - 100.0).abs() < 1e-10);
    assert!((rankings[2].total_points - 75.0).abs() < 1e-10);
    assert!((rankings[0].total_spent - 0.0).abs() < 1e-10);
}

#[test]
fn empty_competitor_set_yields_empty_rankings() {
    let competitors: Vec<Competitor> = Vec::new();
    assert!(rank(&competitors).is_empty());
    let rendered = render_rankings(&[]);
    assert!(rendered.contains("FINAL RANKINGS"));
}

#[test]
fn whole_field_fully_tied_still_gets_distinct_ranks() {
    let data = "\
Player,Cost,R01,R02
Cleo,20,30,25
Ada,20,30,25
Bram,20,30,25
";
    let table = Table::from_reader(data.as_bytes(), 0, "inline.csv").unwrap();
    let columns = detect_columns(&table);
    let competitors = build_competitors(&table, &columns);
    let rankings = rank(&competitors);

    assert_eq!(ranked_names(&rankings), vec!["Ada", "Bram", "Cleo"]);
    let ranks: Vec<usize> = rankings.iter().map(|e| e.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
}
