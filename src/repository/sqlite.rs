use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{
    Connection, Decode, Row, Sqlite, Type,
    sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow},
};
use tracing::instrument;

use super::IntentSource;
use crate::{error::SourceError, models::AnalyticsRecord};

/// Maximum number of rows returned per request.
pub const RECENT_LIMIT: i64 = 50;

/// Serves the newest rows of the `analytics` table. Each call opens its own
/// connection and closes it before returning.
#[derive(Debug, Clone)]
pub struct SqliteIntentSource {
    options: SqliteConnectOptions,
}

impl SqliteIntentSource {
    pub fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .read_only(true)
            .create_if_missing(false);

        Ok(Self { options })
    }

    async fn query_recent(
        conn: &mut SqliteConnection,
    ) -> Result<Vec<AnalyticsRecord>, SourceError> {
        let rows = sqlx::query(
            r#"
            SELECT customer_id, intent_score, churn_score, next_best_action
            FROM analytics
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(RECENT_LIMIT)
        .fetch_all(&mut *conn)
        .await
        .map_err(SourceError::Query)?;

        rows.iter()
            .map(decode_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(SourceError::Decode)
    }
}

// SQLite hands back NULL as "" or 0 for non-optional targets, so every
// column is read as an Option and a missing value rejects the whole row.
fn decode_row(row: &SqliteRow) -> Result<AnalyticsRecord, sqlx::Error> {
    let customer_id: String = required(row, "customer_id")?;
    if customer_id.is_empty() {
        return Err(sqlx::Error::ColumnDecode {
            index: "customer_id".to_string(),
            source: "customer_id must not be empty".into(),
        });
    }

    Ok(AnalyticsRecord {
        customer_id,
        intent_score: required(row, "intent_score")?,
        churn_score: required(row, "churn_score")?,
        next_best_action: required(row, "next_best_action")?,
    })
}

fn required<'r, T>(row: &'r SqliteRow, column: &str) -> Result<T, sqlx::Error>
where
    T: Decode<'r, Sqlite> + Type<Sqlite>,
{
    row.try_get::<Option<T>, _>(column)?
        .ok_or_else(|| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: format!("unexpected NULL in column {column}").into(),
        })
}

#[async_trait]
impl IntentSource for SqliteIntentSource {
    #[instrument(name = "source.sqlite.fetch_recent", skip(self))]
    async fn fetch_recent(&self) -> Result<Vec<AnalyticsRecord>, SourceError> {
        let mut conn = SqliteConnection::connect_with(&self.options)
            .await
            .map_err(SourceError::Connect)?;

        let result = Self::query_recent(&mut conn).await;

        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "Failed to close database connection");
        }

        result
    }

    fn kind(&self) -> &'static str {
        "sqlite"
    }
}
