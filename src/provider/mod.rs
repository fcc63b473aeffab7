mod analytics;
mod database;

pub use analytics::Analytics;
pub use database::DatabasePool;
