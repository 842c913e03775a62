use super::BuilderExecutor;
use crate::github::{
    error::Error, github_client::GithubClient, request::ReviewersRequest, response::ReviewerState,
};

pub struct AddReviewersBuilder<'a> {
    client: &'a GithubClient,
    pr_number: u64,
    reviewers: Vec<String>,
    team_reviewers: Vec<String>,
}

impl<'a> AddReviewersBuilder<'a> {
    pub(crate) fn new(client: &'a GithubClient, pr_number: u64) -> Self {
        AddReviewersBuilder {
            client,
            pr_number,
            reviewers: Vec::new(),
            team_reviewers: Vec::new(),
        }
    }

    pub fn reviewers(mut self, reviewers: Vec<String>) -> Self {
        self.reviewers = reviewers;
        self
    }

    pub fn team_reviewers(mut self, team_reviewers: Vec<String>) -> Self {
        self.team_reviewers = team_reviewers;
        self
    }
}

impl BuilderExecutor for AddReviewersBuilder<'_> {
    type Output = ReviewerState;

    async fn execute(self) -> Result<Self::Output, Error> {
        let request = ReviewersRequest::new(self.reviewers, self.team_reviewers);

        self.client.add_reviewers(self.pr_number, request).await
    }
}
