pub mod api;
pub mod metrics;
pub mod models;
pub mod seed;
pub mod store;
pub mod telemetry;
