//! Fixed catalogs: loggable activities, redeemable rewards, community
//! challenges, and the static insight texts.
//!
//! These are presentation data with one behavioral role: activity labels
//! gate [`log_activity`](crate::state::ApplicationState::log_activity), and
//! an unknown label is rejected with `InvalidActivity`.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed catalog of loggable eco-activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Transportation,
    EnergyUsage,
    Consumption,
    WasteReduction,
    Recycling,
    TreePlanting,
}

impl ActivityKind {
    /// All activities, in the order the activities panel lists them.
    pub const ALL: [ActivityKind; 6] = [
        ActivityKind::Transportation,
        ActivityKind::EnergyUsage,
        ActivityKind::Consumption,
        ActivityKind::WasteReduction,
        ActivityKind::Recycling,
        ActivityKind::TreePlanting,
    ];

    /// The display label, exactly as shown on the activity buttons.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Transportation => "Transportation",
            ActivityKind::EnergyUsage => "Energy Usage",
            ActivityKind::Consumption => "Consumption",
            ActivityKind::WasteReduction => "Waste Reduction",
            ActivityKind::Recycling => "Recycling",
            ActivityKind::TreePlanting => "Tree Planting",
        }
    }

    /// Look up an activity by its display label.
    ///
    /// The UI catalog can only produce known labels, so a failure here is a
    /// caller bug, reported as `InvalidActivity`.
    pub fn from_label(label: &str) -> Result<Self, EngineError> {
        ActivityKind::ALL
            .iter()
            .copied()
            .find(|a| a.label() == label)
            .ok_or_else(|| EngineError::InvalidActivity {
                label: label.to_string(),
            })
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A reward offer on the rewards panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RewardOffer {
    /// Short reward title (also used in the redemption notification).
    pub title: &'static str,
    /// One-line description shown under the title.
    pub description: &'static str,
    /// Advertised point cost. Redemption does not currently deduct it.
    pub points: u32,
}

/// The fixed reward catalog.
pub const REWARDS: [RewardOffer; 3] = [
    RewardOffer {
        title: "10% Off",
        description: "at local eco-store",
        points: 500,
    },
    RewardOffer {
        title: "Free Bus Pass",
        description: "1-week unlimited rides",
        points: 1000,
    },
    RewardOffer {
        title: "Tax Credit",
        description: "$50 off your next tax bill",
        points: 2000,
    },
];

/// A community challenge card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Challenge {
    /// Challenge title.
    pub title: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Displayed completion percentage.
    pub progress_pct: u8,
}

/// The fixed challenge catalog.
pub const CHALLENGES: [Challenge; 2] = [
    Challenge {
        title: "30-Day Zero Waste Challenge",
        description: "Reduce your household waste to nearly zero for 30 days",
        progress_pct: 40,
    },
    Challenge {
        title: "Community Tree Planting",
        description: "Help plant 100 trees in your local area",
        progress_pct: 65,
    },
];

/// Static recommendation texts for the insights panel.
pub const INSIGHTS: [&str; 5] = [
    "Switch to LED bulbs to reduce your energy consumption by up to 15%",
    "Consider carpooling twice a week to cut your transportation emissions",
    "Your neighborhood could reduce collective emissions by 5% through a community composting program",
    "Installing a smart thermostat could save you 10% on heating and cooling costs",
    "Participating in Meatless Mondays can reduce your weekly carbon footprint by 5%",
];
