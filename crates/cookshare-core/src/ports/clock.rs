use chrono::{DateTime, Utc};

/// Wall clock port.
///
/// Domain code never calls `Utc::now()` directly; timestamps come
/// through this port so tests can pin time.
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
