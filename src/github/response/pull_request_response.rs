use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A created or fetched pull request. Only `number` is interpreted by
/// this client; everything else the API returned rides along in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    #[serde(default)]
    pub id: u64,
    pub number: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
