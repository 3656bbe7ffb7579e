use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dom::{Element, attrs};

use super::{Hook, HookContext};

/// Rendering format for parsed timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampFormat {
    /// chrono strftime pattern applied to the parsed instant.
    pub pattern: String,
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self {
            pattern: "%b %-d, %Y, %H:%M:%S".to_owned(),
        }
    }
}

/// Replaces the element's visible text with a formatted rendering of
/// `data-timestamp`, on attach and on every refresh.
///
/// Absent attribute leaves the prior text as-is. Unparsable values also leave
/// the text unchanged (logged), rather than rendering a platform-specific
/// invalid-date marker.
#[derive(Debug, Default, Clone)]
pub struct TimestampHook {
    format: TimestampFormat,
}

impl TimestampHook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_format(format: TimestampFormat) -> Self {
        Self { format }
    }

    fn render<E: Element>(&self, element: &mut E) {
        let Some(raw) = element.attribute(attrs::TIMESTAMP) else {
            return;
        };
        let raw = raw.to_owned();
        match parse_timestamp(&raw) {
            Some(instant) => {
                let text = instant.format(&self.format.pattern).to_string();
                element.set_text(&text);
            }
            None => {
                warn!(
                    value = %raw,
                    "unparsable timestamp attribute, leaving text unchanged"
                );
            }
        }
    }
}

/// Accepts RFC 3339, RFC 2822, and naive `%Y-%m-%d %H:%M:%S` values; naive
/// values are read as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Some(parsed);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

impl<E: Element> Hook<E> for TimestampHook {
    fn attach(&mut self, ctx: &mut HookContext<'_, E>) {
        self.render(ctx.element);
    }

    fn refresh(&mut self, ctx: &mut HookContext<'_, E>) {
        self.render(ctx.element);
    }
}

#[cfg(test)]
mod tests {
    use super::parse_timestamp;

    #[test]
    fn accepts_rfc3339_rfc2822_and_naive_values() {
        for raw in [
            "2024-01-15T10:30:00Z",
            "2024-01-15T10:30:00+02:00",
            "Mon, 15 Jan 2024 10:30:00 +0000",
            "2024-01-15 10:30:00",
        ] {
            assert!(parse_timestamp(raw).is_some(), "should parse: {raw}");
        }
    }

    #[test]
    fn rejects_garbage_values() {
        for raw in ["", "tomorrow", "2024-13-40T99:99:99Z", "1705314600"] {
            assert!(parse_timestamp(raw).is_none(), "should reject: {raw}");
        }
    }
}
