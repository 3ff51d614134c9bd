mod note;

pub use note::Note;

use chrono::{DateTime, Utc};

/// Render a timestamp the way the CLI prints it.
pub fn format_timestamp(datetime: &DateTime<Utc>) -> String {
    datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}
