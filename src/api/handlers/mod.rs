pub mod greeting;
pub mod health;
pub mod info;
pub mod not_found;
pub mod root;
pub mod users;

use chrono::{SecondsFormat, Utc};

/// Current UTC time as ISO-8601 with milliseconds, e.g. `2026-01-01T12:00:00.000Z`.
pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
