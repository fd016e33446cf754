use chrono::NaiveDate;

use nfl24_predictor::schedule::{
    RawScheduleRow, ScheduleRowError, normalize_schedule, parse_schedule_row,
};
use nfl24_predictor::teams::TeamDirectory;
use nfl24_predictor::weather::{
    RawWeatherRow, WeatherRowError, month_day_fragment, normalize_weather, parse_weather_row,
};

fn raw_game(week: u32, date: &str, home: &str, away: &str) -> RawScheduleRow {
    RawScheduleRow {
        round_number: week,
        date: date.to_string(),
        home_team: home.to_string(),
        away_team: away.to_string(),
    }
}

fn raw_obs(game_id: &str, time_measure: &str) -> RawWeatherRow {
    RawWeatherRow {
        game_id: game_id.to_string(),
        time_measure: time_measure.to_string(),
        temperature: None,
        humidity: None,
        condition: None,
    }
}

#[test]
fn parses_a_schedule_row() {
    let teams = TeamDirectory::nfl_2024();
    let row = raw_game(1, "08/09/2024 20:20", "Kansas City Chiefs", "Buffalo Bills");

    let game = parse_schedule_row(&row, &teams).expect("row should parse");
    assert_eq!(game.week, 1);
    assert_eq!(game.home.code, "KC");
    assert_eq!(game.visitor.code, "BUF");
    assert_eq!(game.date_only, NaiveDate::from_ymd_opt(2024, 9, 8).unwrap());
    assert_eq!(
        game.kickoff,
        NaiveDate::from_ymd_opt(2024, 9, 8)
            .unwrap()
            .and_hms_opt(20, 20, 0)
            .unwrap()
    );
}

#[test]
fn kickoff_format_has_no_fallback() {
    let teams = TeamDirectory::nfl_2024();

    // ISO-style timestamp, missing time, and month/day swap out of range
    // all fail the single fixed format.
    for bad in ["2024-09-08 20:20", "08/09/2024", "09/31/2024 13:00"] {
        let row = raw_game(1, bad, "Kansas City Chiefs", "Buffalo Bills");
        assert!(
            matches!(
                parse_schedule_row(&row, &teams),
                Err(ScheduleRowError::BadKickoff { .. })
            ),
            "`{bad}` should be rejected"
        );
    }
}

#[test]
fn round_zero_is_rejected() {
    let teams = TeamDirectory::nfl_2024();
    let row = raw_game(0, "08/09/2024 20:20", "Kansas City Chiefs", "Buffalo Bills");
    assert_eq!(
        parse_schedule_row(&row, &teams),
        Err(ScheduleRowError::BadRound)
    );
}

#[test]
fn unknown_team_drops_the_row_and_order_is_preserved() {
    let teams = TeamDirectory::nfl_2024();
    let rows = vec![
        raw_game(1, "08/09/2024 13:00", "Chicago Bears", "Houston Texans"),
        raw_game(1, "08/09/2024 16:25", "Kansas Cty Chiefs", "Buffalo Bills"),
        raw_game(2, "15/09/2024 13:00", "Detroit Lions", "Green Bay Packers"),
    ];

    let (games, summary) = normalize_schedule(&rows, &teams);
    assert_eq!(summary.rows_total, 3);
    assert_eq!(summary.rows_kept, 2);
    assert_eq!(summary.errors.len(), 1);
    assert!(summary.errors[0].contains("Kansas Cty Chiefs"));

    let codes: Vec<&str> = games.iter().map(|g| g.home.code.as_str()).collect();
    assert_eq!(codes, ["CHI", "DET"]);
    assert!(games.iter().all(|g| g.week >= 1));
}

#[test]
fn month_day_fragment_extraction() {
    assert_eq!(month_day_fragment("Sunday 9/8 1:00 PM"), Some("9/8"));
    assert_eq!(month_day_fragment("12/25 evening"), Some("12/25"));
    assert_eq!(month_day_fragment("kick at 10/6/2024"), Some("10/6"));
    assert_eq!(month_day_fragment("postponed"), None);
    assert_eq!(month_day_fragment(""), None);
}

#[test]
fn weather_row_derives_year_and_date() {
    let obs = parse_weather_row(&raw_obs("2024090801", "Sunday 9/8 1:00 PM"))
        .expect("row should parse");
    assert_eq!(obs.year, "2024");
    assert_eq!(obs.date_only, Some(NaiveDate::from_ymd_opt(2024, 9, 8).unwrap()));
    assert_eq!(obs.observation_id, "2024090801");
}

#[test]
fn weather_row_without_fragment_is_kept_undated() {
    let rows = vec![
        raw_obs("2024090500", "Thursday 9/5 8:20 PM"),
        raw_obs("2024091500", "postponed"),
    ];
    let (observations, summary) = normalize_weather(&rows);
    assert_eq!(summary.rows_kept, 2);
    assert_eq!(summary.rows_undated, 1);
    assert!(observations[0].date_only.is_some());
    assert!(observations[1].date_only.is_none());
}

#[test]
fn impossible_calendar_date_drops_the_row() {
    let err = parse_weather_row(&raw_obs("2024023000", "Friday 2/30 1:00 PM")).unwrap_err();
    assert_eq!(err, WeatherRowError::BadDate("2/30/2024".to_string()));

    let rows = vec![
        raw_obs("2024090500", "9/5 evening"),
        raw_obs("2024023000", "2/30 evening"),
        raw_obs("2024090800", "9/8 evening"),
    ];
    let (observations, summary) = normalize_weather(&rows);
    assert_eq!(summary.rows_total, 3);
    assert_eq!(summary.rows_kept, 2);
    assert_eq!(summary.errors.len(), 1);
    let ids: Vec<&str> = observations
        .iter()
        .map(|o| o.observation_id.as_str())
        .collect();
    assert_eq!(ids, ["2024090500", "2024090800"]);
}

#[test]
fn short_observation_id_cannot_form_a_date() {
    let err = parse_weather_row(&raw_obs("24", "9/8 1:00 PM")).unwrap_err();
    assert!(matches!(err, WeatherRowError::BadDate(_)));
}
