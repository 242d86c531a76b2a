use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{CollectionStore, PlayerRecord};

/// Window for counting recent joiners, in days.
pub const NEW_MEMBER_WINDOW_DAYS: u64 = 30;

/// Read-only aggregates the roster header cards display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterStats {
    pub total: usize,
    pub active: usize,
    pub new_this_period: usize,
}

impl RosterStats {
    /// Compute against a caller-supplied reference date so the result stays
    /// deterministic.
    pub fn compute(store: &CollectionStore<PlayerRecord>, today: NaiveDate) -> Self {
        let window_start = today
            .checked_sub_days(Days::new(NEW_MEMBER_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MIN);

        let records = store.records();
        RosterStats {
            total: records.len(),
            active: records.iter().filter(|p| p.is_active()).count(),
            new_this_period: records
                .iter()
                .filter(|p| p.joined() >= window_start && p.joined() <= today)
                .count(),
        }
    }
}
