use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The kind of closed period a summary covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeriodKind {
    Week,
    Month,
}

impl PeriodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodKind::Week => "week",
            PeriodKind::Month => "month",
        }
    }
}

/// An aggregated-hours snapshot for one user over one closed period.
/// Written only by the archival job; never mutated.
#[derive(Clone, Debug)]
pub struct Summary {
    pub id: Uuid,
    pub user_id: Uuid,
    pub period_kind: PeriodKind,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    pub hours: f64,
}
