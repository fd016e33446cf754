use chrono::{NaiveDate, NaiveDateTime};
use rayon::prelude::*;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::teams::{Team, TeamDirectory};

/// Published kickoffs use exactly one format; anything else is a
/// malformed row, not a candidate for fallback parsing.
pub const KICKOFF_FORMAT: &str = "%d/%m/%Y %H:%M";

/// One schedule row as it comes off the published season CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct RawScheduleRow {
    #[serde(rename = "Round Number")]
    pub round_number: u32,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Home Team")]
    pub home_team: String,
    #[serde(rename = "Away Team")]
    pub away_team: String,
}

/// A schedule entry with both identities resolved and the kickoff parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledGame {
    pub week: u32,
    pub kickoff: NaiveDateTime,
    pub home: Team,
    pub visitor: Team,
    /// Calendar-date join key: the kickoff with time of day dropped.
    pub date_only: NaiveDate,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScheduleRowError {
    #[error("unknown team name `{0}`")]
    UnknownTeam(String),
    #[error("bad kickoff `{raw}`: {source}")]
    BadKickoff {
        raw: String,
        source: chrono::format::ParseError,
    },
    #[error("round number must be >= 1")]
    BadRound,
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleSummary {
    pub rows_total: usize,
    pub rows_kept: usize,
    pub errors: Vec<String>,
}

pub fn parse_schedule_row(
    row: &RawScheduleRow,
    teams: &TeamDirectory,
) -> Result<ScheduledGame, ScheduleRowError> {
    if row.round_number == 0 {
        return Err(ScheduleRowError::BadRound);
    }
    let kickoff =
        NaiveDateTime::parse_from_str(row.date.trim(), KICKOFF_FORMAT).map_err(|source| {
            ScheduleRowError::BadKickoff {
                raw: row.date.clone(),
                source,
            }
        })?;
    let home = teams
        .resolve(row.home_team.trim())
        .map_err(|e| ScheduleRowError::UnknownTeam(e.0))?
        .clone();
    let visitor = teams
        .resolve(row.away_team.trim())
        .map_err(|e| ScheduleRowError::UnknownTeam(e.0))?
        .clone();
    Ok(ScheduledGame {
        week: row.round_number,
        date_only: kickoff.date(),
        kickoff,
        home,
        visitor,
    })
}

/// Rows carry no cross-row state, so parsing fans out over rayon; indexed
/// collection keeps the input order. Failed rows are dropped, not
/// repaired, so partial entries never reach the join or scoring stages.
pub fn normalize_schedule(
    rows: &[RawScheduleRow],
    teams: &TeamDirectory,
) -> (Vec<ScheduledGame>, ScheduleSummary) {
    let parsed: Vec<Result<ScheduledGame, ScheduleRowError>> = rows
        .par_iter()
        .map(|row| parse_schedule_row(row, teams))
        .collect();

    let mut games = Vec::with_capacity(rows.len());
    let mut summary = ScheduleSummary {
        rows_total: rows.len(),
        ..ScheduleSummary::default()
    };
    for (idx, result) in parsed.into_iter().enumerate() {
        match result {
            Ok(game) => games.push(game),
            Err(err) => {
                warn!("dropping schedule row {idx}: {err}");
                summary.errors.push(format!("row {idx}: {err}"));
            }
        }
    }
    summary.rows_kept = games.len();
    (games, summary)
}
