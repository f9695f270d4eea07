//! GET /diagnostics/speech-key
//!
//! Reports whether the speech-to-text API key is present in the process
//! environment. Read per request so a key injected after startup shows up.
//! Only a short prefix of the key ever leaves the process.

use std::env::VarError;

use axum::Json;

use crate::api::v1::dto::diagnostics::SpeechKeyStatus;
use crate::error::AppError;

pub const SPEECH_API_KEY_VAR: &str = "SPEECH_API_KEY";

pub async fn speech_key() -> Result<Json<SpeechKeyStatus>, AppError> {
    let status = speech_key_status(std::env::var(SPEECH_API_KEY_VAR))?;
    tracing::debug!(has_key = status.has_key, "speech key diagnostic");
    Ok(Json(status))
}

fn speech_key_status(lookup: Result<String, VarError>) -> Result<SpeechKeyStatus, AppError> {
    match lookup {
        // Any non-empty value counts, whitespace included.
        Ok(key) if !key.is_empty() => Ok(SpeechKeyStatus::configured(&key)),
        Ok(_) | Err(VarError::NotPresent) => Ok(SpeechKeyStatus::missing()),
        Err(err @ VarError::NotUnicode(_)) => {
            tracing::error!(error = %err, var = SPEECH_API_KEY_VAR, "failed to read speech API key");
            Err(AppError::Internal)
        }
    }
}
