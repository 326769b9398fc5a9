mod file;
mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::{Config, SourceKind},
    error::SourceError,
    models::AnalyticsRecord,
};

pub use file::FileIntentSource;
pub use sqlite::{RECENT_LIMIT, SqliteIntentSource};

/// A read-only provider of the latest batch of analytics records.
#[async_trait]
pub trait IntentSource: Send + Sync {
    async fn fetch_recent(&self) -> Result<Vec<AnalyticsRecord>, SourceError>;

    fn kind(&self) -> &'static str;
}

pub fn create_source(config: &Config) -> anyhow::Result<Arc<dyn IntentSource>> {
    let source: Arc<dyn IntentSource> = match config.source {
        SourceKind::File => Arc::new(FileIntentSource::new(&config.intent_file_path)),
        SourceKind::Sqlite => Arc::new(SqliteIntentSource::new(&config.database_url)?),
    };

    tracing::info!(source = source.kind(), "Intent source configured");

    Ok(source)
}
