//! Rendering of repository records as picker lines.
//!
//! Formatting is a pure function of the record, the current time and the
//! favorite flag. Every piece of text that originates from the filesystem is
//! passed through [`escape_markup`] before it is styled.

use crate::core::{
    colors::{escape_markup, BranchCategory, RemoteStatus},
    state::{RepositoryRecord, NEVER},
};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use colored::*;
use std::fmt::Display;

const NAME_WIDTH: usize = 60;
const TIME_WIDTH: usize = 15;
const STATUS_WIDTH: usize = 10;
const BRANCH_WIDTH: usize = 50;

const FAVORITE_MARKER: &str = "⭐ ";
const NO_MARKER: &str = "   ";

/// Format one repository line: marker, name, relative time, upstream status, branch
pub fn format_line<Tz>(record: &RepositoryRecord, now: &DateTime<Tz>, is_favorite: bool) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let marker = if is_favorite { FAVORITE_MARKER } else { NO_MARKER };
    let time_ago = format_time_ago(record.last_activity, now);
    let status = RemoteStatus::of(record.tracking);
    let branch = escape_markup(&record.branch);

    format!(
        "{marker}{} {}{}{}",
        format_display_name(record),
        pad(&time_ago, TIME_WIDTH).dimmed(),
        status.paint(&pad(&status.symbol(), STATUS_WIDTH)),
        BranchCategory::of(&record.branch).paint(&pad(&branch, BRANCH_WIDTH)),
    )
}

/// Human-readable age of `last_activity` relative to `now`.
///
/// Buckets are seconds, minutes, hours and days up to a week; anything older is
/// shown as a `YYYY/MM/DD` date in the timezone of `now`.
pub fn format_time_ago<Tz>(last_activity: DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if last_activity == NEVER {
        return "never".to_string();
    }

    let elapsed = (now.with_timezone(&Utc) - last_activity).max(TimeDelta::zero());

    if elapsed.num_minutes() < 1 {
        format!("{}s ago", elapsed.num_seconds())
    } else if elapsed.num_hours() < 1 {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed.num_days() < 1 {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed.num_days() < 7 {
        format!("{}d ago", elapsed.num_days())
    } else {
        last_activity
            .with_timezone(&now.timezone())
            .format("%Y/%m/%d")
            .to_string()
    }
}

fn format_display_name(record: &RepositoryRecord) -> String {
    let name = escape_markup(&record.name());
    match &record.parent_folder {
        Some(parent) if !parent.is_empty() => {
            let parent = escape_markup(parent);
            let plain_len = parent.chars().count() + " > ".len() + name.chars().count();
            format!(
                "{} > {name}{}",
                parent.dimmed(),
                " ".repeat(NAME_WIDTH.saturating_sub(plain_len))
            )
        }
        _ => pad(&name, NAME_WIDTH),
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}
