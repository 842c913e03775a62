use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewersRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reviewers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub team_reviewers: Vec<String>,
}

impl ReviewersRequest {
    pub fn new(reviewers: Vec<String>, team_reviewers: Vec<String>) -> Self {
        Self {
            reviewers,
            team_reviewers,
        }
    }

    /// Two empty lists mean "nothing to request".
    pub fn is_empty(&self) -> bool {
        self.reviewers.is_empty() && self.team_reviewers.is_empty()
    }
}
