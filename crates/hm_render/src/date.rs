use chrono::NaiveDate;

use hm_core::{Error, Result};

const MONTHS: [(&str, u32); 12] = [
    ("January", 1),
    ("February", 2),
    ("March", 3),
    ("April", 4),
    ("May", 5),
    ("June", 6),
    ("July", 7),
    ("August", 8),
    ("September", 9),
    ("October", 10),
    ("November", 11),
    ("December", 12),
];

/// Normalizes the long-form site date (`"Mon, 3rd, May 2021"`) to
/// `YYYY-MM-DD`. Anything that does not split into exactly four tokens,
/// name a month from the table, or denote a real calendar date is an
/// error.
pub fn parse_date(date: &str) -> Result<String> {
    let invalid = || Error::DateFormat(date.to_string());

    let tokens: Vec<&str> = date.split_whitespace().collect();
    if tokens.len() != 4 {
        return Err(invalid());
    }
    let (raw_day, month_name, raw_year) = (tokens[1], tokens[2], tokens[3]);

    // The day token carries an ordinal suffix and a trailing comma.
    let day: String = raw_day
        .chars()
        .filter(|c| !c.is_ascii_lowercase() && *c != ',')
        .collect();
    let day: u32 = day.parse().map_err(|_| invalid())?;

    let month = MONTHS
        .iter()
        .find(|(name, _)| *name == month_name)
        .map(|(_, number)| *number)
        .ok_or_else(invalid)?;

    let year: i32 = raw_year.parse().map_err(|_| invalid())?;

    let parsed = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;
    Ok(parsed.format("%Y-%m-%d").to_string())
}
