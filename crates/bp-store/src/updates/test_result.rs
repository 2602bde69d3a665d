//! Test result update.

use bp_core::enums::{EntityKind, TestOutcome};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::EntityUpdate;

/// Changing `workflow_id` or `persona_id` re-checks that the new target exists.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TestResultUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tested_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<TestOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

impl EntityUpdate for TestResultUpdate {
    const KIND: EntityKind = EntityKind::TestResult;
}
