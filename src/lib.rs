//! Season forecast pipeline: reconcile an NFL schedule with per-date
//! weather observations, pick a winner per game, and build the matchup
//! graph between teams.
//!
//! Data flows one way: raw tables -> schedule/weather normalization ->
//! date join with default imputation -> winner pick -> weekly grouping
//! and graph views.

pub mod dataset;
pub mod matchup_graph;
pub mod merge;
pub mod pipeline;
pub mod schedule;
pub mod stadiums;
pub mod teams;
pub mod weather;
pub mod weekly;
pub mod win_pick;
