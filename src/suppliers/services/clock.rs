use chrono::{DateTime, Utc};

/// Format used for `created_at` in the CSV mirror and in snapshots.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// The current time rendered with [`TIMESTAMP_FORMAT`].
    fn timestamp(&self) -> String {
        format_timestamp(self.now())
    }
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
