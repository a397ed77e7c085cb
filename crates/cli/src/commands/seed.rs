//! Demo-data seeding. Generates plausible synthetic rows through the
//! normal store operations, the same path real ingestion takes.

use anyhow::Result;
use chrono::{Duration, Utc};
use rand::Rng;

use fieldsense_core::{
    AlertKind, AlertPriority, CropType, NewAlert, NewField, NewSatelliteReading,
    NewWeatherReading, NewYieldPrediction, SatelliteReading, UpsertUser, UserRole,
    WeatherReading, YieldPrediction,
};
use fieldsense_storage::traits::{AlertStore, FieldStore, SeriesStore, UserStore};
use fieldsense_storage::PgStorage;

const CROPS: [CropType; 6] = [
    CropType::Maize,
    CropType::Wheat,
    CropType::Rice,
    CropType::Sorghum,
    CropType::Millet,
    CropType::Beans,
];

const CONDITIONS: [&str; 5] = ["Sunny", "Partly Cloudy", "Cloudy", "Light Rain", "Heavy Rain"];

pub async fn run(database_url: &str, user_id: &str, fields: usize, days: i64) -> Result<()> {
    let storage = PgStorage::new(database_url).await?;

    storage
        .upsert_user(UpsertUser {
            id: user_id.to_owned(),
            email: Some(format!("{user_id}@example.com")),
            first_name: Some("Demo".to_owned()),
            last_name: Some("Farmer".to_owned()),
            profile_image_url: None,
            role: UserRole::Farmer,
        })
        .await?;

    for n in 1..=fields {
        let field = {
            let mut rng = rand::thread_rng();
            NewField {
                name: format!("Demo field {n}"),
                user_id: user_id.to_owned(),
                latitude: rng.gen_range(-4.5..1.5),
                longitude: rng.gen_range(34.0..41.0),
                size: Some(rng.gen_range(2.0..50.0)),
                crop_type: CROPS[rng.gen_range(0..CROPS.len())],
                planting_date: Some(Utc::now() - Duration::days(rng.gen_range(30..120))),
                expected_harvest_date: Some(Utc::now() + Duration::days(rng.gen_range(30..120))),
                location: None,
            }
        };
        let field = storage.create_field(field).await?;

        for day in 0..days {
            let date = Utc::now() - Duration::days(day);

            let satellite = {
                let mut rng = rand::thread_rng();
                NewSatelliteReading {
                    field_id: field.id.clone(),
                    date,
                    ndvi: Some(rng.gen_range(0.3..0.9)),
                    evi: Some(rng.gen_range(0.4..0.7)),
                    sarvi: Some(rng.gen_range(0.5..0.8)),
                }
            };
            SeriesStore::<SatelliteReading>::append(&storage, satellite).await?;

            let weather = {
                let mut rng = rand::thread_rng();
                NewWeatherReading {
                    field_id: field.id.clone(),
                    date,
                    temperature: Some(rng.gen_range(15.0..30.0)),
                    humidity: Some(rng.gen_range(40.0..80.0)),
                    rainfall: Some(rng.gen_range(0.0..50.0)),
                    wind_speed: Some(rng.gen_range(5.0..25.0)),
                    condition: Some(CONDITIONS[rng.gen_range(0..CONDITIONS.len())].to_owned()),
                }
            };
            SeriesStore::<WeatherReading>::append(&storage, weather).await?;
        }

        let prediction = {
            let mut rng = rand::thread_rng();
            NewYieldPrediction {
                field_id: field.id.clone(),
                prediction_date: Utc::now(),
                predicted_yield: Some(rng.gen_range(1.0..4.0)),
                confidence: Some(rng.gen_range(70.0..90.0)),
                model_version: Some("v1.0".to_owned()),
            }
        };
        SeriesStore::<YieldPrediction>::append(&storage, prediction).await?;

        storage
            .create_alert(NewAlert {
                user_id: user_id.to_owned(),
                field_id: Some(field.id.clone()),
                kind: AlertKind::Health,
                priority: AlertPriority::Medium,
                title: format!("Vegetation dip on {}", field.name),
                description: Some("NDVI dropped below the seasonal average".to_owned()),
            })
            .await?;

        tracing::info!(field = %field.name, "seeded field with {} days of readings", days);
    }

    tracing::info!(user_id, fields, "seeding complete");
    Ok(())
}
