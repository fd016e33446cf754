use std::env;
use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use nfl24_predictor::dataset;
use nfl24_predictor::pipeline::run_season;
use nfl24_predictor::teams::TeamDirectory;
use nfl24_predictor::weekly::group_by_week;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let schedule_path = table_path(args.next(), "SCHEDULE_CSV", "data/nfl-2024-UTC.csv");
    let weather_path = table_path(args.next(), "WEATHER_CSV", "data/games_weather.csv");
    let stadium_path = table_path(args.next(), "STADIUM_CSV", "data/stadium_coordinates.csv");

    let schedule_rows = dataset::load_schedule(&schedule_path)?;
    let weather_rows = dataset::load_weather(&weather_path)?;
    let stadiums = dataset::load_stadiums(&stadium_path)?;
    info!(
        "loaded {} schedule rows, {} weather rows, {} stadiums",
        schedule_rows.len(),
        weather_rows.len(),
        stadiums.len()
    );

    let teams = TeamDirectory::nfl_2024();
    let forecast = run_season(&teams, &schedule_rows, &weather_rows);

    for slate in group_by_week(&forecast.records) {
        println!("Week {}", slate.week);
        for game in slate.games {
            println!(
                "  {} vs {} -> {} ({:.0}F, {})",
                game.home.full_name,
                game.visitor.full_name,
                game.predicted_winner.full_name,
                game.temperature,
                game.condition
            );
        }
    }

    let nodes: Vec<&str> = forecast.graph.nodes().iter().map(String::as_str).collect();
    println!(
        "Graph nodes ({}): {}",
        forecast.graph.node_count(),
        nodes.join(" ")
    );
    println!("Graph edges ({}):", forecast.graph.edge_count());
    for (a, b) in forecast.graph.edges() {
        println!("  {a} - {b}");
    }

    Ok(())
}

fn table_path(arg: Option<String>, env_key: &str, default: &str) -> PathBuf {
    arg.or_else(|| env::var(env_key).ok())
        .unwrap_or_else(|| default.to_string())
        .into()
}
