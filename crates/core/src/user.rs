use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::InvalidValue;

/// A registered user. Created on first login, updated on subsequent logins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile data carried by an upsert-on-login. The id comes from the
/// upstream identity provider, not from us.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Farmer,
    Cooperative,
    Policymaker,
}

impl UserRole {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Farmer => "farmer",
            Self::Cooperative => "cooperative",
            Self::Policymaker => "policymaker",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "farmer" => Ok(Self::Farmer),
            "cooperative" => Ok(Self::Cooperative),
            "policymaker" => Ok(Self::Policymaker),
            _ => Err(InvalidValue::new("user role", s)),
        }
    }
}
