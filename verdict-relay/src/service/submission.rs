//! Submission Service
//!
//! Validates and stores finished suite runs.

use sqlx::PgPool;
use thiserror::Error;
use verdict_core::dto::submission::{SaveSubmission, SubmissionRecord};

use crate::repository::submission_repository;

/// Service error type
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("{0}")]
    ValidationError(String),

    #[error("database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, SubmissionError>;

/// Store a finished suite run
pub async fn save_submission(pool: &PgPool, req: SaveSubmission) -> Result<SubmissionRecord> {
    validate_save_request(&req)?;

    let record = submission_repository::create(pool, &req).await?;

    tracing::info!(
        id = %record.id,
        question_index = ?record.question_index,
        language = %record.language,
        is_correct = record.is_correct,
        "Submission stored"
    );

    Ok(record)
}

/// List stored submissions, optionally for one question
pub async fn list_submissions(
    pool: &PgPool,
    question_index: Option<i32>,
) -> Result<Vec<SubmissionRecord>> {
    let records = match question_index {
        Some(index) => submission_repository::list_by_question(pool, index).await?,
        None => submission_repository::list_all(pool).await?,
    };
    Ok(records)
}

// =============================================================================
// Validation
// =============================================================================

fn validate_save_request(req: &SaveSubmission) -> Result<()> {
    if req.source_code.trim().is_empty() {
        return Err(SubmissionError::ValidationError(
            "Source code cannot be empty".to_string(),
        ));
    }

    if let Some(index) = req.question_index {
        if index < 0 {
            return Err(SubmissionError::ValidationError(
                "Question index cannot be negative".to_string(),
            ));
        }
    }

    if req.is_correct != req.result.all_correct {
        return Err(SubmissionError::ValidationError(
            "isCorrect does not match the reported results".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_core::domain::language::Language;
    use verdict_core::domain::verdict::SuiteReport;

    fn request() -> SaveSubmission {
        SaveSubmission {
            user_id: Some("anonymous".to_string()),
            source_code: "print(input())".to_string(),
            language: Language::Python,
            result: SuiteReport::from_verdicts(Vec::new()),
            question_index: Some(0),
            is_correct: true,
        }
    }

    #[test]
    fn test_validate_valid_request() {
        assert!(validate_save_request(&request()).is_ok());
    }

    #[test]
    fn test_validate_empty_source() {
        let mut req = request();
        req.source_code = "  \n".to_string();

        let result = validate_save_request(&req);
        assert!(matches!(result, Err(SubmissionError::ValidationError(_))));
    }

    #[test]
    fn test_validate_negative_question_index() {
        let mut req = request();
        req.question_index = Some(-1);

        let result = validate_save_request(&req);
        assert!(matches!(result, Err(SubmissionError::ValidationError(_))));
    }

    #[test]
    fn test_validate_inconsistent_flag() {
        let mut req = request();
        req.is_correct = false;

        let err = validate_save_request(&req).unwrap_err();
        assert!(err.to_string().contains("isCorrect"));
    }
}
