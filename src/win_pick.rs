use crate::merge::JoinedGame;
use crate::teams::Team;

const BASE_SCORE: f64 = 80.0;
const BAD_WEATHER_PENALTY: f64 = 0.9;

fn penalized(condition: &str) -> bool {
    matches!(condition, "Rain" | "Snow")
}

/// Deterministic, order-independent winner pick for one joined game.
///
/// Both sides start from the same base and the Rain/Snow penalty scales
/// both sides by the same factor, so the scores never diverge; the tie
/// goes to the home side, which is therefore always the pick. The
/// symmetric penalty is kept as-is for parity with the historical picks.
pub fn predict_winner(joined: &JoinedGame) -> Team {
    let mut home_score = BASE_SCORE;
    let mut visitor_score = BASE_SCORE;
    if penalized(&joined.condition) {
        home_score *= BAD_WEATHER_PENALTY;
        visitor_score *= BAD_WEATHER_PENALTY;
    }
    if visitor_score > home_score {
        joined.game.visitor.clone()
    } else {
        joined.game.home.clone()
    }
}
