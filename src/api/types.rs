// src/api/types.rs
use serde::{de, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::models::{Evaluation, Strength};

#[derive(Deserialize, ToSchema)]
pub struct CheckPasswordRequest {
    /// Password to evaluate
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct CheckPasswordResponse {
    /// "Weak" if any check failed, otherwise "Strong"
    pub strength: Strength,
    /// One message per check, in check order
    pub feedback: Vec<String>,
}

impl From<Evaluation> for CheckPasswordResponse {
    fn from(evaluation: Evaluation) -> Self {
        Self {
            strength: evaluation.strength,
            feedback: evaluation.feedback,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

// Form posts send numbers as strings, so "16" is accepted alongside 16
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("length must be an integer, got '{}'", text))),
    }
}

#[derive(Deserialize, ToSchema)]
pub struct GeneratePasswordRequest {
    /// Password length (default: 12, minimum: 8). Numeric strings are accepted.
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    pub length: Option<i64>,
    /// Build the password from dictionary words (default: false)
    #[serde(default)]
    pub use_words: Option<bool>,
}

#[derive(Serialize, ToSchema)]
pub struct GeneratePasswordResponse {
    /// Generated password
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// What was wrong with the request
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
