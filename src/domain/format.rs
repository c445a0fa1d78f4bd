use std::borrow::Cow;

use time::{
    Date, OffsetDateTime, PrimitiveDateTime, Time,
    format_description::{FormatItem, well_known::Rfc3339},
    macros::format_description,
};

/// Characters of post content shown on a card before it is cut.
pub const PREVIEW_LIMIT: usize = 200;

pub const DISPLAY_FORMAT: &[FormatItem<'static>] = format_description!(
    "[month repr:long] [day padding:none], [year] at [hour repr:12]:[minute] [period]"
);
const LOCAL_DATE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute][optional [:[second]]]");

/// Render a backend timestamp as `January 5, 2024 at 03:04 PM`.
///
/// Offset timestamps are shown in their own offset. Text that does not parse
/// is returned as-is.
pub fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return display(parsed.date(), parsed.time()).unwrap_or_else(|| raw.to_string());
    }

    // LocalDateTime text: drop fractional seconds, the format has no slot for them.
    let without_fraction = raw.split_once('.').map_or(raw, |(head, _)| head);
    match PrimitiveDateTime::parse(without_fraction, LOCAL_DATE_TIME_FORMAT) {
        Ok(parsed) => display(parsed.date(), parsed.time()).unwrap_or_else(|| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

fn display(date: Date, clock: Time) -> Option<String> {
    PrimitiveDateTime::new(date, clock)
        .format(DISPLAY_FORMAT)
        .ok()
}

/// Card preview: at most [`PREVIEW_LIMIT`] characters, with `...` when cut.
pub fn preview(content: &str) -> Cow<'_, str> {
    match content.char_indices().nth(PREVIEW_LIMIT) {
        None => Cow::Borrowed(content),
        Some((cut, _)) => Cow::Owned(format!("{}...", &content[..cut])),
    }
}

pub fn comments_heading(count: usize) -> String {
    format!("Comments ({count})")
}
