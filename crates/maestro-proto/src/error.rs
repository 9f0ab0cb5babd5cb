//! Translation-level errors.

use thiserror::Error;

/// Why a single inbound record produced no command.
///
/// Never escapes [`crate::translate::translate`]; records that fail are
/// logged and skipped so the rest of the batch still translates.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error("empty entity name")]
    EmptyEntityName,
}
