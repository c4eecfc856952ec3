//! Data model for the EcoCitizen engine.
//!
//! Everything here is plain data: metric snapshots replaced wholesale on
//! refresh, the fixed view selector, and the static catalogs the panels
//! render from.

mod catalog;
mod metrics;
mod view;

pub use catalog::{ActivityKind, Challenge, RewardOffer, CHALLENGES, INSIGHTS, REWARDS};
pub use metrics::{
    CarbonSlice, DailyActivity, MetricsSnapshot, MonthlyReduction, DAY_LABELS, MONTH_LABELS,
};
pub use view::ViewId;
