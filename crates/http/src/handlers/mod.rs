pub mod alerts;
pub mod dashboard;
pub mod fields;
pub mod mock;
pub mod readings;
pub mod users;
