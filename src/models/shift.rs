use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One clock-in/clock-out session. `ended_at = None` means the shift is
/// still open.
#[derive(Clone, Debug, Serialize)]
pub struct Shift {
    /// The unique identifier for the shift.
    pub id: Uuid,
    /// The user who owns this shift.
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    /// When the user clocked in.
    #[serde(rename = "entrada")]
    pub started_at: DateTime<Utc>,
    /// When the user clocked out, if they have.
    #[serde(rename = "salida")]
    pub ended_at: Option<DateTime<Utc>>,
}

impl Shift {
    /// Elapsed time in fractional hours; `None` while the shift is open.
    pub fn elapsed_hours(&self) -> Option<f64> {
        self.ended_at
            .map(|end| (end - self.started_at).num_milliseconds() as f64 / 3_600_000.0)
    }

    /// Elapsed time in whole minutes; `None` while the shift is open.
    pub fn elapsed_minutes(&self) -> Option<i64> {
        self.ended_at.map(|end| (end - self.started_at).num_minutes())
    }
}

/// A shift joined with its owner's display name, as returned by the
/// listing and breakdown queries.
#[derive(Clone, Debug)]
pub struct ShiftWithUser {
    pub shift: Shift,
    pub user_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn shift(started_at: DateTime<Utc>, ended_at: Option<DateTime<Utc>>) -> Shift {
        Shift {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            started_at,
            ended_at,
        }
    }

    #[test]
    fn elapsed_hours_is_fractional() {
        let start = Utc.with_ymd_and_hms(2025, 6, 16, 9, 0, 0).unwrap();
        let s = shift(start, Some(start + Duration::milliseconds(5_400_000)));
        assert_eq!(s.elapsed_hours(), Some(1.5));
    }

    #[test]
    fn open_shift_has_no_elapsed_time() {
        let start = Utc.with_ymd_and_hms(2025, 6, 16, 9, 0, 0).unwrap();
        let s = shift(start, None);
        assert_eq!(s.elapsed_hours(), None);
        assert_eq!(s.elapsed_minutes(), None);
    }

    #[test]
    fn elapsed_minutes_truncates_whole_minutes() {
        let start = Utc.with_ymd_and_hms(2025, 6, 16, 9, 0, 0).unwrap();
        let s = shift(start, Some(start + Duration::seconds(8 * 3600 + 30 * 60 + 59)));
        assert_eq!(s.elapsed_minutes(), Some(510));
    }
}
