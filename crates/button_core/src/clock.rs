use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Timelike, Weekday};

/// Local hour the goal is measured against.
pub const CUTOFF_HOUR: u32 = 9;
/// Presses more than this many hours before the cutoff are treated as noise.
pub const EARLY_PRESS_HOURS: f64 = 4.0;

const SECONDS_PER_MINUTE: f64 = 60.0;
const NANOS_PER_MINUTE: f64 = 60_000_000_000.0;

/// The single "now" of one invocation, held as local wall-clock time.
///
/// Captured once when an invocation starts; the daystamp, the minute offset and
/// the weekend check all derive from this value so they can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvocationClock {
    local: NaiveDateTime,
}

impl InvocationClock {
    /// Capture the current time in the process's local zone (`TZ`).
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    /// Capture an instant as seen on the wall clock of its own zone.
    pub fn from_datetime<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        Self {
            local: at.naive_local(),
        }
    }

    pub fn from_naive_local(local: NaiveDateTime) -> Self {
        Self { local }
    }

    /// `YYYYMMDD` of the local calendar date.
    pub fn daystamp(&self) -> String {
        self.local.format("%Y%m%d").to_string()
    }

    /// Minutes from now until 09:00 on the same local day; negative once past it.
    ///
    /// Computed from wall-clock time of day, so a UTC offset change earlier in
    /// the day does not shift the result.
    pub fn minutes_before_nine(&self) -> f64 {
        let time = self.local.time();
        let cutoff_seconds = f64::from(CUTOFF_HOUR * 3_600);
        let elapsed_seconds = f64::from(time.num_seconds_from_midnight());
        let elapsed_nanos = f64::from(time.nanosecond());

        (cutoff_seconds - elapsed_seconds) / SECONDS_PER_MINUTE - elapsed_nanos / NANOS_PER_MINUTE
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.local.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// True when the press is strictly more than four hours before 09:00.
    pub fn is_early_press(&self) -> bool {
        self.minutes_before_nine() / 60.0 > EARLY_PRESS_HOURS
    }

    /// Ceiling of the minute offset, never negative on weekends.
    pub fn datapoint_value(&self) -> i64 {
        let minutes = self.minutes_before_nine().ceil() as i64;
        if self.is_weekend() {
            minutes.max(0)
        } else {
            minutes
        }
    }
}
