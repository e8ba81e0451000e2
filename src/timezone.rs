use chrono::Local;

/// Source of the device's current UTC offset.
pub trait OffsetClock: Send + Sync {
    /// Minutes UTC is ahead of local time, i.e. -120 for UTC+2.
    fn offset_minutes(&self) -> i32;
}

// Reads the offset from the system clock at call time
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl OffsetClock for LocalClock {
    fn offset_minutes(&self) -> i32 {
        -(Local::now().offset().local_minus_utc() / 60)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i32);

impl OffsetClock for FixedClock {
    fn offset_minutes(&self) -> i32 {
        self.0
    }
}

/// Hours east of UTC for the wire `tz` field. May be fractional.
///
/// Uses the offset of "now", not of the date the user picked; the backend
/// applies any finer correction.
pub fn tz_hours(offset_minutes: i32) -> f64 {
    let tz = -(offset_minutes as f64) / 60.0;
    // avoid serializing -0.0
    if tz == 0.0 {
        0.0
    } else {
        tz
    }
}
