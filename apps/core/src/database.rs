use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::types::Json;
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;

use crate::analysis::AnalysisResult;
use crate::models::AnalysisRecord;

pub async fn init_db(db_url: &str) -> Result<SqlitePool, sqlx::Error> {
    info!("Initializing database at: {}", db_url);

    let options = SqliteConnectOptions::from_str(db_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS analyses (
            id TEXT PRIMARY KEY,
            input_text TEXT NOT NULL,
            polarity TEXT NOT NULL,
            detected_keywords JSON NOT NULL,
            identified_concerns JSON NOT NULL,
            intensity_analysis JSON NOT NULL,
            risk_assessment JSON NOT NULL,
            created_at DATETIME NOT NULL
        );
        "#,
    )
    .execute(&pool)
    .await?;

    info!("Database initialized and migrations applied.");

    Ok(pool)
}

/// Persist one analysis. Records are insert-only.
pub async fn insert_analysis(
    pool: &SqlitePool,
    result: &AnalysisResult,
) -> Result<AnalysisRecord, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let created_at = result.timestamp.timestamp();

    sqlx::query_as::<_, AnalysisRecord>(
        r#"
        INSERT INTO analyses (
            id, input_text, polarity, detected_keywords,
            identified_concerns, intensity_analysis, risk_assessment, created_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING
            id, input_text, polarity, detected_keywords,
            identified_concerns, intensity_analysis, risk_assessment, created_at
        "#,
    )
    .bind(&id)
    .bind(&result.input_text)
    .bind(result.polarity.label())
    .bind(Json(&result.detected_keywords))
    .bind(Json(&result.identified_concerns))
    .bind(Json(&result.intensity_analysis))
    .bind(Json(&result.risk_assessment))
    .bind(created_at)
    .fetch_one(pool)
    .await
}

/// Fetch the most recently stored record, used as a connectivity probe.
pub async fn fetch_latest(pool: &SqlitePool) -> Result<Option<AnalysisRecord>, sqlx::Error> {
    sqlx::query_as::<_, AnalysisRecord>(
        r#"
        SELECT
            id, input_text, polarity, detected_keywords,
            identified_concerns, intensity_analysis, risk_assessment, created_at
        FROM analyses
        ORDER BY created_at DESC, rowid DESC
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await
}

