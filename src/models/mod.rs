mod analytics;

pub use analytics::AnalyticsRecord;
