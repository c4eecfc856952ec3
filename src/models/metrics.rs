//! Metrics snapshot model.
//!
//! A [`MetricsSnapshot`] is an immutable, complete point-in-time value: the
//! refresh path replaces the whole snapshot, never individual fields, so a
//! reader can never observe a mix of old and new data.

use serde::{Deserialize, Serialize};

/// Fixed day labels for the weekly activity series, Monday first.
pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Fixed month labels for the yearly progress series, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One slice of the carbon-footprint breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarbonSlice {
    /// Emission category label (e.g. "Transport").
    pub category: String,
    /// Simulated footprint value for the category.
    pub value: u32,
}

/// Points earned on one day of the current week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    /// Day label, "Mon" through "Sun".
    pub day: String,
    /// Activity points for that day.
    pub points: u32,
}

/// Carbon reduction achieved in one month of the current year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReduction {
    /// Month label, "Jan" through "Dec".
    pub month: String,
    /// Reduction percentage for that month.
    pub reduction_pct: u32,
}

/// Complete simulated metrics for one refresh tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Carbon-footprint breakdown in fixed category order.
    pub carbon_footprint: Vec<CarbonSlice>,
    /// Total eco points for the session.
    pub eco_points: u32,
    /// Rank within the simulated community, 1-based.
    pub community_rank: u32,
    /// Exactly 7 entries, Monday first.
    pub daily_activities: Vec<DailyActivity>,
    /// Exactly 12 entries, January first.
    pub monthly_progress: Vec<MonthlyReduction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MetricsSnapshot {
        MetricsSnapshot {
            carbon_footprint: vec![CarbonSlice {
                category: "Transport".to_string(),
                value: 12,
            }],
            eco_points: 500,
            community_rank: 1,
            daily_activities: DAY_LABELS
                .iter()
                .map(|d| DailyActivity {
                    day: d.to_string(),
                    points: 50,
                })
                .collect(),
            monthly_progress: MONTH_LABELS
                .iter()
                .map(|m| MonthlyReduction {
                    month: m.to_string(),
                    reduction_pct: 10,
                })
                .collect(),
        }
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"eco_points\":500"));
        assert!(json.contains("\"community_rank\":1"));
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let snapshot = sample();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: MetricsSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_label_tables_are_complete() {
        assert_eq!(DAY_LABELS.len(), 7);
        assert_eq!(MONTH_LABELS.len(), 12);
        assert_eq!(DAY_LABELS[0], "Mon");
        assert_eq!(MONTH_LABELS[11], "Dec");
    }
}
