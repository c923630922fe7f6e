// Leaderboard ranking entry point.
//
// Pipeline:
// 1. Initialize tracing (stderr, so stdout stays clean for the table)
// 2. Load config
// 3. Load the leaderboard CSV
// 4. Detect columns, build the competitor roster
// 5. Rank with the full tie-break cascade
// 6. Print the final table

use std::path::Path;

use anyhow::Context;
use tracing::info;

use countback::config;
use countback::ranking::pipeline;
use countback::render;
use countback::roster;
use countback::schema;
use countback::table::Table;

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("Leaderboard ranking starting up");

    let config = config::load_config().context("failed to load configuration")?;

    // A path argument overrides the configured input file.
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.input.path.clone());
    info!("Loading leaderboard from {}", input_path);

    let table = Table::from_csv_path(Path::new(&input_path), config.input.skip_rows)
        .with_context(|| format!("failed to load leaderboard from {input_path}"))?;
    info!(
        "Loaded table: {} columns, {} rows",
        table.headers.len(),
        table.rows.len()
    );

    let columns = schema::detect_columns(&table);
    info!(
        "Detected columns: player={}, total_points={:?}, total_spent={:?}, {} rounds",
        table.headers[columns.player],
        columns.total_points.map(|i| table.headers[i].clone()),
        columns.total_spent.map(|i| table.headers[i].clone()),
        columns.rounds.len()
    );
    if columns.total_points.is_none() {
        info!("No total points column found - computing totals from round scores");
    }
    if columns.total_spent.is_none() {
        info!("No spending column found - using zeros for the spending tiebreaker");
    }

    let competitors = roster::build_competitors(&table, &columns);
    info!("Processing {} players", competitors.len());

    let rankings = pipeline::rank(&competitors);
    print!("{}", render::render_rankings(&rankings));

    Ok(())
}

/// Initialize tracing to stderr; stdout carries the rendered table.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("countback=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
