use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

/// A record in one of the per-field time-series tables.
///
/// The three series (satellite, weather, yield predictions) share the same
/// append-only shape: rows keyed by field, ordered by a date column.
/// Implementing this trait plugs a record type into the generic
/// `SeriesStore` machinery in the storage crate.
pub trait SeriesRecord: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Insert payload: everything but the server-assigned id and created-at.
    type New: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;

    /// Entity name for error messages and logging.
    const ENTITY: &'static str;

    fn id(&self) -> &str;
    fn field_id(&self) -> &str;
    /// The ordering column ("latest" = maximum of this per field).
    fn date(&self) -> DateTime<Utc>;
    fn created_at(&self) -> DateTime<Utc>;
}

/// Vegetation indices derived from satellite imagery. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SatelliteReading {
    pub id: String,
    pub field_id: String,
    pub date: DateTime<Utc>,
    /// Conventionally 0..1; not enforced.
    pub ndvi: Option<f64>,
    pub evi: Option<f64>,
    pub sarvi: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSatelliteReading {
    pub field_id: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub ndvi: Option<f64>,
    #[serde(default)]
    pub evi: Option<f64>,
    #[serde(default)]
    pub sarvi: Option<f64>,
}

impl SeriesRecord for SatelliteReading {
    type New = NewSatelliteReading;
    const ENTITY: &'static str = "satellite reading";

    fn id(&self) -> &str {
        &self.id
    }
    fn field_id(&self) -> &str {
        &self.field_id
    }
    fn date(&self) -> DateTime<Utc> {
        self.date
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A weather observation for a field. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    pub id: String,
    pub field_id: String,
    pub date: DateTime<Utc>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub rainfall: Option<f64>,
    pub wind_speed: Option<f64>,
    pub condition: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWeatherReading {
    pub field_id: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub rainfall: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub condition: Option<String>,
}

impl SeriesRecord for WeatherReading {
    type New = NewWeatherReading;
    const ENTITY: &'static str = "weather reading";

    fn id(&self) -> &str {
        &self.id
    }
    fn field_id(&self) -> &str {
        &self.field_id
    }
    fn date(&self) -> DateTime<Utc> {
        self.date
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A model-produced yield estimate for a field. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldPrediction {
    pub id: String,
    pub field_id: String,
    pub prediction_date: DateTime<Utc>,
    pub predicted_yield: Option<f64>,
    /// Confidence percentage, 0..100.
    pub confidence: Option<f64>,
    pub model_version: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewYieldPrediction {
    pub field_id: String,
    pub prediction_date: DateTime<Utc>,
    #[serde(default)]
    pub predicted_yield: Option<f64>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub model_version: Option<String>,
}

impl SeriesRecord for YieldPrediction {
    type New = NewYieldPrediction;
    const ENTITY: &'static str = "yield prediction";

    fn id(&self) -> &str {
        &self.id
    }
    fn field_id(&self) -> &str {
        &self.field_id
    }
    fn date(&self) -> DateTime<Utc> {
        self.prediction_date
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
