//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around an epoch-milliseconds timestamp that formats it in the
/// system timezone via the `Display` trait.
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalMillis(pub i64);

impl fmt::Display for LocalMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Timestamp::from_millisecond(self.0) {
            Ok(ts) => write!(
                f,
                "{}",
                ts.to_zoned(TimeZone::system())
                    .strftime("%Y-%m-%d %H:%M:%S %Z")
            ),
            Err(_) => write!(f, "(invalid timestamp)"),
        }
    }
}
