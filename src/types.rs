//! Response types returned by the analysis service.
//!
//! All four are transient value objects: created per call, owned by the
//! caller, never mutated by the client afterwards. Wire field names are
//! camelCase to match the service contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of a full argument analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub main_claim: String,
    /// Supporting arguments in the order the service reports them.
    pub supporting_arguments: Vec<String>,
    pub structure: String,
    pub strength: String,
}

/// Result of a logical-validity check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub analysis: String,
    pub explanation: String,
}

/// A single detected fallacy.
///
/// `location` is an opaque string: the service contract does not pin down
/// whether it is a character offset, a quoted substring, or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fallacy {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub location: String,
    pub explanation: String,
}

/// A chat reply. The timestamp is assigned client-side at receipt time,
/// not taken from the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
