use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Time duration with sub-millisecond precision (stored as fractional seconds).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Duration {
    /// Duration in seconds.
    seconds: f64,
}

impl Duration {
    /// Create a duration from seconds.
    pub fn from_seconds(s: f64) -> Self {
        Self {
            seconds: s.max(0.0),
        }
    }

    /// Create a duration from milliseconds.
    pub fn from_millis(ms: f64) -> Self {
        Self::from_seconds(ms / 1000.0)
    }

    /// Create a zero duration.
    pub fn zero() -> Self {
        Self { seconds: 0.0 }
    }

    /// Get duration as seconds.
    pub fn as_seconds(&self) -> f64 {
        self.seconds
    }

    /// Get duration as milliseconds.
    pub fn as_millis(&self) -> f64 {
        self.seconds * 1000.0
    }
}

impl Default for Duration {
    fn default() -> Self {
        Duration::zero()
    }
}

impl Add for Duration {
    type Output = Duration;
    fn add(self, rhs: Duration) -> Duration {
        Duration::from_seconds(self.seconds + rhs.seconds)
    }
}

impl Sub for Duration {
    type Output = Duration;
    fn sub(self, rhs: Duration) -> Duration {
        Duration::from_seconds((self.seconds - rhs.seconds).max(0.0))
    }
}

impl Mul<f64> for Duration {
    type Output = Duration;
    fn mul(self, rhs: f64) -> Duration {
        Duration::from_seconds(self.seconds * rhs)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.seconds < 1.0 {
            write!(f, "{:.0}ms", self.seconds * 1000.0)
        } else {
            write!(f, "{:.2}s", self.seconds)
        }
    }
}

/// A wall-clock sample in milliseconds — what a rendering host hands the
/// animation clock once per frame, and what an exported page's timer reads.
///
/// The origin is arbitrary (host epoch, page load, ...); only differences
/// between samples are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Timestamp {
    /// Milliseconds since an arbitrary origin.
    millis: f64,
}

impl Timestamp {
    /// Create a timestamp from milliseconds.
    pub fn from_millis(ms: f64) -> Self {
        Self { millis: ms }
    }

    /// Create a timestamp from seconds.
    pub fn from_seconds(s: f64) -> Self {
        Self { millis: s * 1000.0 }
    }

    /// The zero timestamp.
    pub fn zero() -> Self {
        Self { millis: 0.0 }
    }

    /// Get the time in milliseconds.
    pub fn as_millis(&self) -> f64 {
        self.millis
    }

    /// Get the time in seconds.
    pub fn as_seconds(&self) -> f64 {
        self.millis / 1000.0
    }

    /// Wall-clock time elapsed from `earlier` to `self`. Saturates at zero
    /// if `earlier` is in the future.
    pub fn since(&self, earlier: Timestamp) -> Duration {
        Duration::from_millis(self.millis - earlier.millis)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::zero()
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;
    fn add(self, rhs: Duration) -> Timestamp {
        Timestamp::from_millis(self.millis + rhs.as_millis())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_ms = self.millis.max(0.0) as u64;
        let hours = total_ms / 3_600_000;
        let minutes = (total_ms % 3_600_000) / 60_000;
        let secs = (total_ms % 60_000) / 1_000;
        let ms = total_ms % 1_000;
        write!(f, "{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_from_seconds() {
        let d = Duration::from_seconds(2.5);
        assert!((d.as_seconds() - 2.5).abs() < 0.001);
        assert!((d.as_millis() - 2500.0).abs() < 0.1);
    }

    #[test]
    fn test_duration_arithmetic() {
        let a = Duration::from_seconds(1.0);
        let b = Duration::from_seconds(0.5);
        assert!((a + b).as_seconds() - 1.5 < 0.001);
        assert!((a - b).as_seconds() - 0.5 < 0.001);
        assert!((a * 3.0).as_seconds() - 3.0 < 0.001);
    }

    #[test]
    fn test_duration_display() {
        assert_eq!(format!("{}", Duration::from_seconds(2.5)), "2.50s");
        assert_eq!(format!("{}", Duration::from_millis(500.0)), "500ms");
    }

    #[test]
    fn test_timestamp_since() {
        let start = Timestamp::from_millis(1000.0);
        let now = Timestamp::from_millis(1750.0);
        assert!((now.since(start).as_seconds() - 0.75).abs() < 1e-9);
        // Saturates rather than going negative.
        assert_eq!(start.since(now).as_seconds(), 0.0);
    }

    #[test]
    fn test_timestamp_add_duration() {
        let ts = Timestamp::from_seconds(1.0);
        let result = ts + Duration::from_seconds(0.5);
        assert!((result.as_seconds() - 1.5).abs() < 0.001);
    }

    #[test]
    fn test_timestamp_display() {
        let ts = Timestamp::from_seconds(3661.5);
        assert_eq!(format!("{}", ts), "01:01:01.500");
    }
}
