use std::{env, fmt, path::PathBuf, str::FromStr};

use anyhow::Context;

/// Which backing store serves `/intent`. Exactly one is active per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    File,
    Sqlite,
}

impl FromStr for SourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" | "json" => Ok(SourceKind::File),
            "sqlite" | "db" => Ok(SourceKind::Sqlite),
            other => anyhow::bail!("unknown INTENT_SOURCE '{other}', expected 'file' or 'sqlite'"),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::File => f.write_str("file"),
            SourceKind::Sqlite => f.write_str("sqlite"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub environment: String,
    pub source: SourceKind,
    pub intent_file_path: PathBuf,
    pub database_url: String,
    pub otel_service_name: String,
    pub otel_exporter_endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            environment: "development".to_string(),
            source: SourceKind::File,
            intent_file_path: PathBuf::from("../analytics/intent_results.json"),
            database_url: "sqlite:../common/localboost.db".to_string(),
            otel_service_name: "localboost-intent-api".to_string(),
            otel_exporter_endpoint: "http://localhost:4317".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a number, got '{raw}'"))?,
            None => defaults.port,
        };
        let source = match lookup("INTENT_SOURCE") {
            Some(raw) => raw.parse()?,
            None => defaults.source,
        };

        Ok(Self {
            port,
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            source,
            intent_file_path: lookup("INTENT_FILE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.intent_file_path),
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            otel_service_name: lookup("OTEL_SERVICE_NAME").unwrap_or(defaults.otel_service_name),
            otel_exporter_endpoint: lookup("OTEL_EXPORTER_OTLP_ENDPOINT")
                .unwrap_or(defaults.otel_exporter_endpoint),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
