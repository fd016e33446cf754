use std::collections::HashMap;

use chrono::NaiveDate;

use crate::schedule::ScheduledGame;
use crate::weather::WeatherObservation;

pub const DEFAULT_TEMPERATURE: f64 = 60.0;
pub const DEFAULT_HUMIDITY: f64 = 50.0;
pub const DEFAULT_CONDITION: &str = "Clear";

/// One schedule entry with its weather fields settled. Imputation has
/// already happened: each field holds either an observed or a default
/// value, never an absent one.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedGame {
    pub game: ScheduledGame,
    /// Which observation matched, when one did.
    pub observation_id: Option<String>,
    pub temperature: f64,
    pub humidity: f64,
    pub condition: String,
}

/// Left outer equi-join of games against observations on calendar date,
/// then field-level default substitution. Every game yields exactly one
/// joined record; nothing is dropped here.
///
/// When several observations share a date, the first one in input order
/// wins. The source data carries no further disambiguator (e.g. venue),
/// so first-occurrence is the tie-break rather than a silent arbitrary
/// pick.
pub fn join_schedule_weather(
    games: &[ScheduledGame],
    observations: &[WeatherObservation],
) -> Vec<JoinedGame> {
    let mut by_date: HashMap<NaiveDate, &WeatherObservation> = HashMap::new();
    for obs in observations {
        if let Some(date) = obs.date_only {
            by_date.entry(date).or_insert(obs);
        }
    }

    games
        .iter()
        .map(|game| {
            let matched = by_date.get(&game.date_only).copied();
            // Defaults apply after the join, uniformly: a field missing
            // because no row matched and a field null in a matched row
            // are imputed the same way.
            JoinedGame {
                game: game.clone(),
                observation_id: matched.map(|obs| obs.observation_id.clone()),
                temperature: matched
                    .and_then(|obs| obs.temperature)
                    .unwrap_or(DEFAULT_TEMPERATURE),
                humidity: matched
                    .and_then(|obs| obs.humidity)
                    .unwrap_or(DEFAULT_HUMIDITY),
                condition: matched
                    .and_then(|obs| obs.condition.clone())
                    .unwrap_or_else(|| DEFAULT_CONDITION.to_string()),
            }
        })
        .collect()
}
