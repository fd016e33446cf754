use chrono::{NaiveDate, NaiveDateTime};
use tracing::info;

use crate::matchup_graph::MatchupGraph;
use crate::merge::join_schedule_weather;
use crate::schedule::{RawScheduleRow, ScheduleSummary, normalize_schedule};
use crate::teams::{Team, TeamDirectory};
use crate::weather::{RawWeatherRow, WeatherSummary, normalize_weather};
use crate::win_pick::predict_winner;

/// Final per-game record: schedule fields, settled weather, and the pick.
/// Assembled once; nothing downstream revises it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub week: u32,
    pub kickoff: NaiveDateTime,
    pub home: Team,
    pub visitor: Team,
    pub date_only: NaiveDate,
    pub observation_id: Option<String>,
    pub temperature: f64,
    pub humidity: f64,
    pub condition: String,
    pub predicted_winner: Team,
}

#[derive(Debug, Clone)]
pub struct SeasonForecast {
    /// One record per valid schedule row, in schedule order.
    pub records: Vec<GameRecord>,
    pub graph: MatchupGraph,
    pub schedule_summary: ScheduleSummary,
    pub weather_summary: WeatherSummary,
}

/// Single-pass batch run: normalize both tables, join on calendar date,
/// impute defaults, score each record, accumulate the matchup graph.
/// Row-local failures were already recovered by exclusion upstream, so
/// this stage cannot fail.
pub fn run_season(
    teams: &TeamDirectory,
    schedule_rows: &[RawScheduleRow],
    weather_rows: &[RawWeatherRow],
) -> SeasonForecast {
    let (games, schedule_summary) = normalize_schedule(schedule_rows, teams);
    info!(
        "schedule normalized: kept {} of {} rows",
        schedule_summary.rows_kept, schedule_summary.rows_total
    );

    let (observations, weather_summary) = normalize_weather(weather_rows);
    info!(
        "weather normalized: kept {} of {} rows ({} undated)",
        weather_summary.rows_kept, weather_summary.rows_total, weather_summary.rows_undated
    );

    let joined = join_schedule_weather(&games, &observations);

    let mut graph = MatchupGraph::new();
    let records: Vec<GameRecord> = joined
        .into_iter()
        .map(|j| {
            let predicted_winner = predict_winner(&j);
            graph.add_matchup(&j.game.home, &j.game.visitor);
            GameRecord {
                week: j.game.week,
                kickoff: j.game.kickoff,
                home: j.game.home,
                visitor: j.game.visitor,
                date_only: j.game.date_only,
                observation_id: j.observation_id,
                temperature: j.temperature,
                humidity: j.humidity,
                condition: j.condition,
                predicted_winner,
            }
        })
        .collect();

    info!(
        "season scored: {} games, {} teams, {} distinct matchups",
        records.len(),
        graph.node_count(),
        graph.edge_count()
    );

    SeasonForecast {
        records,
        graph,
        schedule_summary,
        weather_summary,
    }
}
