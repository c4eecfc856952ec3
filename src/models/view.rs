//! The view selector: which content panel is currently active.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of the active dashboard panel.
///
/// A simple six-state selector with no forbidden transitions: any view is
/// reachable from any other via a single switch. There is no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    #[default]
    Dashboard,
    Activities,
    Community,
    Rewards,
    Insights,
    Challenges,
}

impl ViewId {
    /// All views, in tab order.
    pub const ALL: [ViewId; 6] = [
        ViewId::Dashboard,
        ViewId::Activities,
        ViewId::Community,
        ViewId::Rewards,
        ViewId::Insights,
        ViewId::Challenges,
    ];

    /// The wire/display identifier for this view.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Activities => "activities",
            ViewId::Community => "community",
            ViewId::Rewards => "rewards",
            ViewId::Insights => "insights",
            ViewId::Challenges => "challenges",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewId::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| EngineError::InvalidView { got: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_view_round_trips_through_its_string() {
        for view in ViewId::ALL {
            let parsed: ViewId = view.as_str().parse().unwrap();
            assert_eq!(parsed, view);
        }
    }

    #[test]
    fn test_unknown_view_string_is_rejected() {
        let err = "not-a-real-view".parse::<ViewId>().unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidView {
                got: "not-a-real-view".to_string()
            }
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Dashboard".parse::<ViewId>().is_err());
    }

    #[test]
    fn test_default_view_is_dashboard() {
        assert_eq!(ViewId::default(), ViewId::Dashboard);
    }

    #[test]
    fn test_serde_uses_lowercase_identifiers() {
        let json = serde_json::to_string(&ViewId::Challenges).unwrap();
        assert_eq!(json, "\"challenges\"");
    }
}
