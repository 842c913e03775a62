use super::BuilderExecutor;
use crate::github::{
    error::Error,
    github_client::GithubClient,
    request::{PullRequestRequest, ReviewersRequest},
    response::PullRequest,
};

pub struct CreatePullRequestBuilder<'a> {
    client: &'a GithubClient,
    title: String,
    head: String,
    base: String,
    body: Option<String>,
    draft: bool,
    reviewers: Vec<String>,
    team_reviewers: Vec<String>,
    validate_branches: bool,
}

impl<'a> CreatePullRequestBuilder<'a> {
    pub(crate) fn new(client: &'a GithubClient) -> Self {
        CreatePullRequestBuilder {
            client,
            title: String::new(),
            head: String::new(),
            base: String::new(),
            body: None,
            draft: false,
            reviewers: Vec::new(),
            team_reviewers: Vec::new(),
            validate_branches: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn head(mut self, head: impl Into<String>) -> Self {
        self.head = head.into();
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }

    pub fn reviewers(mut self, reviewers: Vec<String>) -> Self {
        self.reviewers = reviewers;
        self
    }

    pub fn team_reviewers(mut self, team_reviewers: Vec<String>) -> Self {
        self.team_reviewers = team_reviewers;
        self
    }

    /// Checks that head and base exist before the create call, trading two
    /// extra requests for an error naming the missing branch.
    pub fn validate_branches(mut self) -> Self {
        self.validate_branches = true;
        self
    }
}

impl BuilderExecutor for CreatePullRequestBuilder<'_> {
    type Output = PullRequest;

    async fn execute(self) -> Result<Self::Output, Error> {
        if self.validate_branches {
            self.client.validate_branches(&self.head, &self.base).await?;
        }

        let mut request = PullRequestRequest::new(self.title, self.head, self.base);
        request.body = self.body;
        request.draft = self.draft;

        let reviewers = ReviewersRequest::new(self.reviewers, self.team_reviewers);

        self.client.create_pr_with_reviewers(request, reviewers).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn executes_create_and_reviewer_requests() -> Result<()> {
        let mut server = Server::new_async().await;
        let create = server
            .mock("POST", "/repos/octo/hello/pulls")
            .match_body(Matcher::Json(json!({
                "title": "Add X",
                "head": "feat",
                "base": "main",
                "body": "details",
                "draft": true
            })))
            .with_status(201)
            .with_body(r#"{"id": 1, "number": 5}"#)
            .create_async()
            .await;
        let review = server
            .mock("POST", "/repos/octo/hello/pulls/5/requested_reviewers")
            .match_body(Matcher::Json(json!({"reviewers": ["alice"]})))
            .with_status(201)
            .with_body(r#"{"number": 5, "requested_reviewers": [{"login": "alice"}]}"#)
            .create_async()
            .await;

        let client = GithubClient::with_base_url("github_pat_test", "octo", "hello", server.url())?;
        let pr = client
            .pull_requests()
            .create()
            .title("Add X")
            .head("feat")
            .base("main")
            .body("details")
            .draft(true)
            .reviewers(vec!["alice".to_owned()])
            .execute()
            .await?;

        create.assert_async().await;
        review.assert_async().await;
        assert_eq!(pr.number, 5);

        Ok(())
    }

    #[tokio::test]
    async fn branch_validation_stops_before_the_create_call() -> Result<()> {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/repos/octo/hello/branches/feat")
            .with_status(404)
            .create_async()
            .await;
        let create = server
            .mock("POST", "/repos/octo/hello/pulls")
            .expect(0)
            .create_async()
            .await;

        let client = GithubClient::with_base_url("github_pat_test", "octo", "hello", server.url())?;
        let err = client
            .pull_requests()
            .create()
            .title("Add X")
            .head("feat")
            .base("main")
            .validate_branches()
            .execute()
            .await
            .unwrap_err();

        create.assert_async().await;
        assert!(matches!(err, Error::NotFound(_)));

        Ok(())
    }
}
