use std::collections::HashMap;

use thiserror::Error;

/// Full name -> canonical code for every 2024 franchise. This table is the
/// identity authority: a name absent here drops the owning row downstream.
const NFL_2024: &[(&str, &str)] = &[
    ("Arizona Cardinals", "ARI"),
    ("Atlanta Falcons", "ATL"),
    ("Baltimore Ravens", "BAL"),
    ("Buffalo Bills", "BUF"),
    ("Carolina Panthers", "CAR"),
    ("Chicago Bears", "CHI"),
    ("Cincinnati Bengals", "CIN"),
    ("Cleveland Browns", "CLE"),
    ("Dallas Cowboys", "DAL"),
    ("Denver Broncos", "DEN"),
    ("Detroit Lions", "DET"),
    ("Green Bay Packers", "GB"),
    ("Houston Texans", "HOU"),
    ("Indianapolis Colts", "IND"),
    ("Jacksonville Jaguars", "JAX"),
    ("Kansas City Chiefs", "KC"),
    ("Las Vegas Raiders", "LV"),
    ("Los Angeles Chargers", "LAC"),
    ("Los Angeles Rams", "LA"),
    ("Miami Dolphins", "MIA"),
    ("Minnesota Vikings", "MIN"),
    ("New England Patriots", "NE"),
    ("New Orleans Saints", "NO"),
    ("New York Giants", "NYG"),
    ("New York Jets", "NYJ"),
    ("Philadelphia Eagles", "PHI"),
    ("Pittsburgh Steelers", "PIT"),
    ("San Francisco 49ers", "SF"),
    ("Seattle Seahawks", "SEA"),
    ("Tampa Bay Buccaneers", "TB"),
    ("Tennessee Titans", "TEN"),
    ("Washington Commanders", "WAS"),
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Team {
    pub full_name: String,
    pub code: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown team name `{0}`")]
pub struct UnknownTeam(pub String);

/// Explicit lookup value built once at startup and passed into
/// normalization; there is no process-wide team registry.
#[derive(Debug, Clone)]
pub struct TeamDirectory {
    by_full_name: HashMap<String, Team>,
}

impl TeamDirectory {
    pub fn nfl_2024() -> Self {
        Self::from_pairs(NFL_2024)
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut by_full_name = HashMap::with_capacity(pairs.len());
        for (full_name, code) in pairs {
            by_full_name.insert(
                (*full_name).to_string(),
                Team {
                    full_name: (*full_name).to_string(),
                    code: (*code).to_string(),
                },
            );
        }
        Self { by_full_name }
    }

    /// Exact full-name lookup only; no fuzzy matching, no guessing.
    pub fn resolve(&self, full_name: &str) -> Result<&Team, UnknownTeam> {
        self.by_full_name
            .get(full_name)
            .ok_or_else(|| UnknownTeam(full_name.to_string()))
    }

    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.by_full_name.values()
    }

    pub fn len(&self) -> usize {
        self.by_full_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_full_name.is_empty()
    }
}
