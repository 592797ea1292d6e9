use std::collections::BTreeMap;
use chrono::{DateTime, Utc};
use deadpool_postgres::Pool;
use uuid::Uuid;
use crate::{
    error::Result,
    models::shift::{Shift, ShiftWithUser},
    repositories::shift as shift_repo,
};

/// Sums elapsed fractional hours over the closed shifts in `shifts`.
///
/// Open shifts contribute nothing; an empty slice sums to zero.
pub fn sum_hours(shifts: &[Shift]) -> f64 {
    shifts.iter().filter_map(Shift::elapsed_hours).sum()
}

/// Renders an hour total the way the API reports it: two decimals.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Groups closed shifts by owning user id and sums hours per group.
pub fn hours_by_user_id(shifts: &[Shift]) -> BTreeMap<Uuid, f64> {
    let mut totals = BTreeMap::new();
    for shift in shifts {
        if let Some(hours) = shift.elapsed_hours() {
            *totals.entry(shift.user_id).or_insert(0.0) += hours;
        }
    }
    totals
}

/// Groups closed shifts by owner display name and formats each total.
/// Output is ordered by name so responses are deterministic.
pub fn hours_by_name(shifts: &[ShiftWithUser]) -> Vec<(String, String)> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for entry in shifts {
        if let Some(hours) = entry.shift.elapsed_hours() {
            *totals.entry(&entry.user_name).or_insert(0.0) += hours;
        }
    }
    totals
        .into_iter()
        .map(|(name, hours)| (name.to_string(), format_hours(hours)))
        .collect()
}

/// Formatted hours one user worked over closed shifts starting at or
/// after `since`.
pub async fn user_hours_since(
    pool: &Pool,
    user_id: &Uuid,
    since: DateTime<Utc>,
) -> Result<String> {
    let shifts = shift_repo::closed_since_for_user(pool, user_id, since).await?;
    Ok(format_hours(sum_hours(&shifts)))
}

/// Per-user formatted hours across all users, over closed shifts
/// starting at or after `since`.
pub async fn breakdown_since(
    pool: &Pool,
    since: DateTime<Utc>,
) -> Result<Vec<(String, String)>> {
    let shifts = shift_repo::closed_since_with_users(pool, since).await?;
    Ok(hours_by_name(&shifts))
}

/// Every shift with its owner's name, newest first.
pub async fn all_records(pool: &Pool) -> Result<Vec<ShiftWithUser>> {
    shift_repo::list_with_users(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 16, h, m, 0).unwrap()
    }

    fn closed(user_id: Uuid, start: DateTime<Utc>, end: DateTime<Utc>) -> Shift {
        Shift {
            id: Uuid::new_v4(),
            user_id,
            started_at: start,
            ended_at: Some(end),
        }
    }

    fn open(user_id: Uuid, start: DateTime<Utc>) -> Shift {
        Shift {
            id: Uuid::new_v4(),
            user_id,
            started_at: start,
            ended_at: None,
        }
    }

    #[test]
    fn empty_input_formats_to_zero() {
        assert_eq!(format_hours(sum_hours(&[])), "0.00");
    }

    #[test]
    fn ninety_minutes_formats_to_one_fifty() {
        let user = Uuid::new_v4();
        let start = at(9, 0);
        let shifts = vec![closed(user, start, start + Duration::milliseconds(5_400_000))];
        assert_eq!(format_hours(sum_hours(&shifts)), "1.50");
    }

    #[test]
    fn open_shifts_are_ignored() {
        let user = Uuid::new_v4();
        let shifts = vec![
            closed(user, at(9, 0), at(12, 0)),
            open(user, at(13, 0)),
        ];
        assert_eq!(format_hours(sum_hours(&shifts)), "3.00");
    }

    #[test]
    fn full_work_day_sums_to_eight_fifty() {
        let user = Uuid::new_v4();
        let shifts = vec![closed(user, at(9, 0), at(17, 30))];
        assert_eq!(format_hours(sum_hours(&shifts)), "8.50");
    }

    #[test]
    fn totals_group_by_user_id() {
        let ana = Uuid::new_v4();
        let ben = Uuid::new_v4();
        let shifts = vec![
            closed(ana, at(9, 0), at(12, 0)),
            closed(ana, at(13, 0), at(18, 0)),
            closed(ben, at(10, 0), at(11, 30)),
            open(ben, at(12, 0)),
        ];
        let totals = hours_by_user_id(&shifts);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&ana], 8.0);
        assert_eq!(totals[&ben], 1.5);
    }

    #[test]
    fn breakdown_is_ordered_by_name() {
        let ana = Uuid::new_v4();
        let ben = Uuid::new_v4();
        let shifts = vec![
            ShiftWithUser {
                shift: closed(ben, at(10, 0), at(11, 0)),
                user_name: "Benito".to_string(),
            },
            ShiftWithUser {
                shift: closed(ana, at(9, 0), at(17, 30)),
                user_name: "Ana".to_string(),
            },
            ShiftWithUser {
                shift: open(ana, at(18, 0)),
                user_name: "Ana".to_string(),
            },
        ];
        let breakdown = hours_by_name(&shifts);
        assert_eq!(
            breakdown,
            vec![
                ("Ana".to_string(), "8.50".to_string()),
                ("Benito".to_string(), "1.00".to_string()),
            ]
        );
    }
}
