use serde::Deserialize;

/// Venue coordinates ride along with the season inputs but feed no
/// computation; the table is loaded, counted, and passed through.
#[derive(Debug, Clone, Deserialize)]
pub struct StadiumInfo {
    #[serde(rename = "StadiumName")]
    pub name: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}
