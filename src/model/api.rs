use serde::{Deserialize, Serialize};

/// Error envelope returned for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDto {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

/// Plain confirmation message, e.g. after a delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}
