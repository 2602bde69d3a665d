use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TestOutcome;

/// One run of a workflow as a persona, real or simulated.
///
/// `workflow_id` and `persona_id` are pinned references: checked for existence
/// when written, but not mirrored on the workflow or persona.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TestResult {
    pub id: String,
    pub workflow_id: String,
    pub persona_id: String,
    pub tested_at: DateTime<Utc>,
    pub outcome: TestOutcome,
    #[serde(default)]
    pub simulated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
