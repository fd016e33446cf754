use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// One observation row as it comes off the weather CSV. Extra columns in
/// the source file are ignored by the reader.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWeatherRow {
    pub game_id: String,
    #[serde(rename = "TimeMeasure")]
    pub time_measure: String,
    #[serde(rename = "Temperature")]
    pub temperature: Option<f64>,
    #[serde(rename = "Humidity")]
    pub humidity: Option<f64>,
    #[serde(rename = "EstimatedCondition")]
    pub condition: Option<String>,
}

/// A weather record keyed for the schedule join.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub observation_id: String,
    /// First four characters of the observation id.
    pub year: String,
    /// None when no month/day fragment was found; the row is kept but can
    /// never match a schedule date.
    pub date_only: Option<NaiveDate>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub condition: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WeatherRowError {
    #[error("`{0}` is not a valid calendar date")]
    BadDate(String),
}

#[derive(Debug, Clone, Default)]
pub struct WeatherSummary {
    pub rows_total: usize,
    pub rows_kept: usize,
    /// Rows kept without a derivable date; they never join.
    pub rows_undated: usize,
    pub errors: Vec<String>,
}

static MONTH_DAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,2}/\d{1,2}").expect("month/day pattern compiles"));

/// First `M/D` or `MM/DD` fragment embedded in a free-text timestamp.
pub fn month_day_fragment(text: &str) -> Option<&str> {
    MONTH_DAY.find(text).map(|m| m.as_str())
}

pub fn parse_weather_row(row: &RawWeatherRow) -> Result<WeatherObservation, WeatherRowError> {
    let year: String = row.game_id.chars().take(4).collect();
    let date_only = match month_day_fragment(&row.time_measure) {
        None => None,
        Some(fragment) => {
            let combined = format!("{fragment}/{year}");
            if year.len() != 4 {
                return Err(WeatherRowError::BadDate(combined));
            }
            let date = NaiveDate::parse_from_str(&combined, "%m/%d/%Y")
                .map_err(|_| WeatherRowError::BadDate(combined.clone()))?;
            Some(date)
        }
    };
    Ok(WeatherObservation {
        observation_id: row.game_id.clone(),
        year,
        date_only,
        temperature: row.temperature,
        humidity: row.humidity,
        condition: row.condition.clone(),
    })
}

/// Per-row normalization in input order (rayon, same as the schedule
/// side). A row with no extractable fragment stays in the output as
/// undated; a fragment that forms an impossible calendar date drops the
/// row.
pub fn normalize_weather(rows: &[RawWeatherRow]) -> (Vec<WeatherObservation>, WeatherSummary) {
    let parsed: Vec<Result<WeatherObservation, WeatherRowError>> =
        rows.par_iter().map(parse_weather_row).collect();

    let mut observations = Vec::with_capacity(rows.len());
    let mut summary = WeatherSummary {
        rows_total: rows.len(),
        ..WeatherSummary::default()
    };
    for (idx, result) in parsed.into_iter().enumerate() {
        match result {
            Ok(obs) => {
                if obs.date_only.is_none() {
                    summary.rows_undated += 1;
                }
                observations.push(obs);
            }
            Err(err) => {
                warn!("dropping weather row {idx}: {err}");
                summary.errors.push(format!("row {idx}: {err}"));
            }
        }
    }
    summary.rows_kept = observations.len();
    (observations, summary)
}
