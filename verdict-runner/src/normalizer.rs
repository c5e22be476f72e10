//! Result Normalizer
//!
//! Maps a raw backend payload onto the canonical `{output, status, error}`
//! triple verdicts are judged on. Pure: the same payload always yields the same
//! result.
//!
//! Output selection:
//! 1. stdout, but only for Accepted runs
//! 2. compile output
//! 3. stderr
//! 4. the literal "No output"
//!
//! Error detail (non-Accepted runs only): compile output > stderr > message >
//! generic fallback.

use verdict_core::domain::result::{NormalizedResult, RawResult};

pub const NO_OUTPUT: &str = "No output";
pub const UNKNOWN_STATUS: &str = "Unknown Status";
pub const EXECUTION_FAILED: &str = "Execution failed.";

/// Normalize a backend payload
pub fn normalize(raw: &RawResult) -> NormalizedResult {
    let accepted = raw.is_accepted();

    let stdout = raw.stdout.as_deref().filter(|_| accepted);
    let output = stdout
        .or(raw.compile_output.as_deref())
        .or(raw.stderr.as_deref())
        .unwrap_or(NO_OUTPUT);

    let error_detail = (!accepted).then(|| {
        raw.compile_output
            .as_deref()
            .or(raw.stderr.as_deref())
            .or(raw.message.as_deref())
            .unwrap_or(EXECUTION_FAILED)
            .to_string()
    });

    let status_label = raw
        .status_description
        .clone()
        .unwrap_or_else(|| UNKNOWN_STATUS.to_string());

    NormalizedResult {
        output: trim_output(output).to_string(),
        status_label,
        error_detail,
    }
}

/// Strip trailing whitespace and newlines; leading whitespace is significant
pub fn trim_output(output: &str) -> &str {
    output.trim_end()
}
