use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::instrument;

use super::IntentSource;
use crate::{error::SourceError, models::AnalyticsRecord};

/// Serves the JSON array written by the analytics job. The file is re-read on
/// every call.
#[derive(Debug, Clone)]
pub struct FileIntentSource {
    path: PathBuf,
    file_name: String,
}

impl FileIntentSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self { path, file_name }
    }
}

#[async_trait]
impl IntentSource for FileIntentSource {
    #[instrument(name = "source.file.fetch_recent", skip(self), fields(path = %self.path.display()))]
    async fn fetch_recent(&self) -> Result<Vec<AnalyticsRecord>, SourceError> {
        let data = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Read {
                file: self.file_name.clone(),
                source,
            })?;

        serde_json::from_slice(&data).map_err(|source| SourceError::Parse {
            file: self.file_name.clone(),
            source,
        })
    }

    fn kind(&self) -> &'static str {
        "file"
    }
}
