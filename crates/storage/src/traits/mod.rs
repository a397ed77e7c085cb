//! Storage backend trait abstraction
//!
//! Async domain traits, one per aggregate, so services depend on the
//! operations they use and tests can substitute the in-memory backend.

pub mod alert;
pub mod field;
pub mod series;
pub mod user;

pub use alert::AlertStore;
pub use field::FieldStore;
pub use series::SeriesStore;
pub use user::UserStore;

use fieldsense_core::{SatelliteReading, WeatherReading, YieldPrediction};

/// A complete backend: everything the application needs from persistence.
pub trait Storage:
    UserStore
    + FieldStore
    + AlertStore
    + SeriesStore<SatelliteReading>
    + SeriesStore<WeatherReading>
    + SeriesStore<YieldPrediction>
{
}

impl<T> Storage for T where
    T: UserStore
        + FieldStore
        + AlertStore
        + SeriesStore<SatelliteReading>
        + SeriesStore<WeatherReading>
        + SeriesStore<YieldPrediction>
{
}
