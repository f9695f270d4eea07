use serde::Serialize;

const PREFIX_CHARS: usize = 10;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SpeechKeyStatus {
    pub has_key: bool,
    pub key_prefix: Option<String>,
    pub message: &'static str,
}

impl SpeechKeyStatus {
    pub fn configured(key: &str) -> Self {
        // chars, not bytes: never split a multi-byte key
        let prefix: String = key.chars().take(PREFIX_CHARS).collect();

        Self {
            has_key: true,
            key_prefix: Some(format!("{prefix}...")),
            message: "Speech-to-text API key is configured",
        }
    }

    pub fn missing() -> Self {
        Self {
            has_key: false,
            key_prefix: None,
            message: "Speech-to-text API key is not configured",
        }
    }
}
