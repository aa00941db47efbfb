use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;

/// Source of the current instant, injectable so captions are reproducible in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// An instant rendered in a fixed zone, in the two styles captions use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    /// `10/19/2026, 3:04:05 PM`
    pub short: String,
    /// `Monday, October 19, 2026 at 3:04:05 PM GMT+5`
    pub long: String,
}

impl Timestamp {
    pub fn at(instant: DateTime<Utc>, tz: Tz) -> Self {
        let local = instant.with_timezone(&tz);

        Self {
            short: local.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
            long: format!(
                "{} {}",
                local.format("%A, %B %-d, %Y at %-I:%M:%S %p"),
                gmt_offset(local.offset().fix().local_minus_utc())
            ),
        }
    }

    pub fn now(clock: &dyn Clock, tz: Tz) -> Self {
        Self::at(clock.now(), tz)
    }
}

/// en-US long-style zone label: `GMT`, `GMT+5`, `GMT+5:30`, `GMT-3`.
fn gmt_offset(seconds: i32) -> String {
    if seconds == 0 {
        return "GMT".to_string();
    }

    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    match minutes % 60 {
        0 => format!("GMT{}{}", sign, minutes / 60),
        rest => format!("GMT{}{}:{:02}", sign, minutes / 60, rest),
    }
}
