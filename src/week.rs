use chrono::{Datelike, Local, NaiveDate};

/// Week identifier for `date`, formatted `"{year}-W{week:02}"`.
///
/// Weeks are numbered 00-53 with Sunday as the first day (strftime `%U`):
/// days before the year's first Sunday fall into week 00. Recording and
/// reporting both go through this function so their buckets always agree.
pub fn week_id(date: NaiveDate) -> String {
    let week = (date.ordinal0() + 7 - date.weekday().num_days_from_sunday()) / 7;
    format!("{}-W{:02}", date.year(), week)
}

/// Week identifier for today's local date.
pub fn current_week_id() -> String {
    week_id(Local::now().date_naive())
}
