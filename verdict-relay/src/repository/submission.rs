//! Submission Repository
//!
//! Handles all database operations related to stored submissions.

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;
use verdict_core::domain::language::Language;
use verdict_core::domain::verdict::SuiteReport;
use verdict_core::dto::submission::{SaveSubmission, SubmissionRecord};

/// Insert a finished suite run
pub async fn create(pool: &PgPool, req: &SaveSubmission) -> Result<SubmissionRecord, sqlx::Error> {
    let record = SubmissionRecord {
        id: Uuid::new_v4(),
        user_id: req.stored_user_id().map(str::to_string),
        question_index: req.question_index,
        language: req.language,
        source_code: req.source_code.clone(),
        result: req.result.clone(),
        is_correct: req.is_correct,
        submitted_at: chrono::Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO submissions (
            id, user_id, question_index, language, source_code,
            result, is_correct, submitted_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(record.id)
    .bind(&record.user_id)
    .bind(record.question_index)
    .bind(record.language.as_str())
    .bind(&record.source_code)
    .bind(Json(&record.result))
    .bind(record.is_correct)
    .bind(record.submitted_at)
    .execute(pool)
    .await?;

    Ok(record)
}

/// List submissions for one question, newest first
pub async fn list_by_question(
    pool: &PgPool,
    question_index: i32,
) -> Result<Vec<SubmissionRecord>, sqlx::Error> {
    let rows = sqlx::query_as::<_, SubmissionRow>(
        r#"
        SELECT id, user_id, question_index, language, source_code,
               result, is_correct, submitted_at
        FROM submissions
        WHERE question_index = $1
        ORDER BY submitted_at DESC
        "#,
    )
    .bind(question_index)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(SubmissionRecord::try_from).collect()
}

/// List all submissions, newest first
pub async fn list_all(pool: &PgPool) -> Result<Vec<SubmissionRecord>, sqlx::Error> {
    let rows = sqlx::query_as::<_, SubmissionRow>(
        r#"
        SELECT id, user_id, question_index, language, source_code,
               result, is_correct, submitted_at
        FROM submissions
        ORDER BY submitted_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(SubmissionRecord::try_from).collect()
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct SubmissionRow {
    id: Uuid,
    user_id: Option<String>,
    question_index: Option<i32>,
    language: String,
    source_code: String,
    result: Json<SuiteReport>,
    is_correct: bool,
    submitted_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<SubmissionRow> for SubmissionRecord {
    type Error = sqlx::Error;

    fn try_from(row: SubmissionRow) -> Result<Self, Self::Error> {
        let language: Language = row
            .language
            .parse()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(SubmissionRecord {
            id: row.id,
            user_id: row.user_id,
            question_index: row.question_index,
            language,
            source_code: row.source_code,
            result: row.result.0,
            is_correct: row.is_correct,
            submitted_at: row.submitted_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(language: &str) -> SubmissionRow {
        SubmissionRow {
            id: Uuid::new_v4(),
            user_id: None,
            question_index: Some(2),
            language: language.to_string(),
            source_code: "print(1)".to_string(),
            result: Json(SuiteReport::from_verdicts(Vec::new())),
            is_correct: true,
            submitted_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_row_conversion() {
        let record = SubmissionRecord::try_from(row("java")).unwrap();
        assert_eq!(record.language, Language::Java);
        assert_eq!(record.question_index, Some(2));
        assert!(record.result.all_correct);
    }

    #[test]
    fn test_row_with_unknown_language_fails() {
        let err = SubmissionRecord::try_from(row("cobol")).unwrap_err();
        assert!(matches!(err, sqlx::Error::Decode(_)));
    }
}
