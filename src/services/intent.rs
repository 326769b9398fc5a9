use std::sync::Arc;

use opentelemetry::KeyValue;
use tracing::instrument;

use crate::{
    error::AppResult,
    models::AnalyticsRecord,
    repository::IntentSource,
    telemetry::{INTENT_RECORDS_SERVED, INTENT_SOURCE_ERRORS},
};

#[derive(Clone)]
pub struct IntentService {
    source: Arc<dyn IntentSource>,
}

impl IntentService {
    pub fn new(source: Arc<dyn IntentSource>) -> Self {
        Self { source }
    }

    #[instrument(name = "intent.latest", skip(self), fields(source = self.source.kind(), records = tracing::field::Empty))]
    pub async fn latest(&self) -> AppResult<Vec<AnalyticsRecord>> {
        let source = self.source.kind();

        let records = self.source.fetch_recent().await.inspect_err(|e| {
            INTENT_SOURCE_ERRORS.add(
                1,
                &[
                    KeyValue::new("source", source),
                    KeyValue::new("kind", e.kind()),
                ],
            );
        })?;

        tracing::Span::current().record("records", records.len());
        INTENT_RECORDS_SERVED.add(records.len() as u64, &[KeyValue::new("source", source)]);

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, SourceError};
    use async_trait::async_trait;

    struct FixedSource(Vec<AnalyticsRecord>);

    #[async_trait]
    impl IntentSource for FixedSource {
        async fn fetch_recent(&self) -> Result<Vec<AnalyticsRecord>, SourceError> {
            Ok(self.0.clone())
        }

        fn kind(&self) -> &'static str {
            "fixed"
        }
    }

    struct BrokenSource;

    #[async_trait]
    impl IntentSource for BrokenSource {
        async fn fetch_recent(&self) -> Result<Vec<AnalyticsRecord>, SourceError> {
            Err(SourceError::Query(sqlx::Error::PoolClosed))
        }

        fn kind(&self) -> &'static str {
            "broken"
        }
    }

    #[tokio::test]
    async fn test_latest_passes_records_through() {
        let record = AnalyticsRecord {
            customer_id: "c004".to_string(),
            intent_score: 60,
            churn_score: 15,
            next_best_action: "offer_discount".to_string(),
        };
        let service = IntentService::new(Arc::new(FixedSource(vec![record.clone()])));

        assert_eq!(service.latest().await.unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn test_latest_surfaces_source_error() {
        let service = IntentService::new(Arc::new(BrokenSource));

        let err = service.latest().await.unwrap_err();

        assert!(matches!(err, AppError::Source(SourceError::Query(_))));
    }
}
