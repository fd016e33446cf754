use std::collections::BTreeMap;

use crate::pipeline::GameRecord;

/// One week's slate, in schedule order.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySlate<'a> {
    pub week: u32,
    pub games: Vec<&'a GameRecord>,
}

/// Pure grouping view over the final records: weeks ascending, and within
/// a week the records keep their input order.
pub fn group_by_week(records: &[GameRecord]) -> Vec<WeeklySlate<'_>> {
    let mut by_week: BTreeMap<u32, Vec<&GameRecord>> = BTreeMap::new();
    for record in records {
        by_week.entry(record.week).or_default().push(record);
    }
    by_week
        .into_iter()
        .map(|(week, games)| WeeklySlate { week, games })
        .collect()
}
