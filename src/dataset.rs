use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::schedule::RawScheduleRow;
use crate::stadiums::StadiumInfo;
use crate::weather::RawWeatherRow;

/// CSV loaders for the three season tables. Failure to obtain a table is
/// fatal; row-local problems inside an obtained table are handled later
/// by the normalizers.
pub fn load_schedule(path: &Path) -> Result<Vec<RawScheduleRow>> {
    read_table(path).with_context(|| format!("load schedule table {}", path.display()))
}

pub fn load_weather(path: &Path) -> Result<Vec<RawWeatherRow>> {
    read_table(path).with_context(|| format!("load weather table {}", path.display()))
}

pub fn load_stadiums(path: &Path) -> Result<Vec<StadiumInfo>> {
    read_table(path).with_context(|| format!("load stadium table {}", path.display()))
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for (idx, row) in reader.deserialize::<T>().enumerate() {
        rows.push(row.with_context(|| format!("row {}", idx + 1))?);
    }
    Ok(rows)
}
