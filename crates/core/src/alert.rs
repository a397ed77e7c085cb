use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::InvalidValue;

/// An alert raised for a user, optionally scoped to one field.
///
/// Alerts are never deleted; the only mutation is the one-way
/// unread -> read transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub user_id: String,
    /// Absent for user-scoped alerts with no single field.
    pub field_id: Option<String>,
    pub kind: AlertKind,
    pub priority: AlertPriority,
    pub title: String,
    pub description: Option<String>,
    pub is_read: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an alert. New alerts start unread and active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAlert {
    pub user_id: String,
    #[serde(default)]
    pub field_id: Option<String>,
    pub kind: AlertKind,
    pub priority: AlertPriority,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Health,
    Weather,
    Yield,
}

impl AlertKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Weather => "weather",
            Self::Yield => "yield",
        }
    }
}

impl std::str::FromStr for AlertKind {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "health" => Ok(Self::Health),
            "weather" => Ok(Self::Weather),
            "yield" => Ok(Self::Yield),
            _ => Err(InvalidValue::new("alert kind", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertPriority {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl std::str::FromStr for AlertPriority {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(InvalidValue::new("alert priority", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_ordering_tracks_severity() {
        assert!(AlertPriority::Low < AlertPriority::Medium);
        assert!(AlertPriority::High < AlertPriority::Critical);
    }

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [AlertKind::Health, AlertKind::Weather, AlertKind::Yield] {
            assert_eq!(kind.as_str().parse::<AlertKind>().unwrap(), kind);
        }
    }
}
