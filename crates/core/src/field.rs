use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::InvalidValue;

/// A registered farm field. Every field has exactly one owning user;
/// coordinates are required, size and crop type are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub id: String,
    pub name: String,
    pub user_id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Size in acres.
    pub size: Option<f64>,
    pub crop_type: CropType,
    pub planting_date: Option<DateTime<Utc>>,
    pub expected_harvest_date: Option<DateTime<Utc>>,
    /// Free-text descriptive location.
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a field. Id and timestamps are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewField {
    pub name: String,
    pub user_id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub crop_type: CropType,
    #[serde(default)]
    pub planting_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expected_harvest_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Partial update for a field. Absent keys leave the column untouched;
/// explicit nulls are treated the same as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub crop_type: Option<CropType>,
    #[serde(default)]
    pub planting_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expected_harvest_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
}

impl FieldPatch {
    /// Fields resulting from merging this patch over `existing`.
    /// The updated-at refresh is the store's job, not handled here.
    #[must_use]
    pub fn apply_to(&self, existing: &Field) -> Field {
        Field {
            id: existing.id.clone(),
            name: self.name.clone().unwrap_or_else(|| existing.name.clone()),
            user_id: existing.user_id.clone(),
            latitude: self.latitude.unwrap_or(existing.latitude),
            longitude: self.longitude.unwrap_or(existing.longitude),
            size: self.size.or(existing.size),
            crop_type: self.crop_type.unwrap_or(existing.crop_type),
            planting_date: self.planting_date.or(existing.planting_date),
            expected_harvest_date: self
                .expected_harvest_date
                .or(existing.expected_harvest_date),
            location: self.location.clone().or_else(|| existing.location.clone()),
            created_at: existing.created_at,
            updated_at: existing.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CropType {
    #[default]
    Maize,
    Wheat,
    Rice,
    Sorghum,
    Millet,
    Beans,
}

impl CropType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Maize => "maize",
            Self::Wheat => "wheat",
            Self::Rice => "rice",
            Self::Sorghum => "sorghum",
            Self::Millet => "millet",
            Self::Beans => "beans",
        }
    }
}

impl std::str::FromStr for CropType {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maize" => Ok(Self::Maize),
            "wheat" => Ok(Self::Wheat),
            "rice" => Ok(Self::Rice),
            "sorghum" => Ok(Self::Sorghum),
            "millet" => Ok(Self::Millet),
            "beans" => Ok(Self::Beans),
            _ => Err(InvalidValue::new("crop type", s)),
        }
    }
}
