use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reviewer state of a pull request after a requested-reviewers call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewerState {
    #[serde(default)]
    pub number: u64,
    #[serde(default)]
    pub requested_reviewers: Vec<Reviewer>,
    #[serde(default)]
    pub requested_teams: Vec<Team>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reviewer {
    pub login: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub slug: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
