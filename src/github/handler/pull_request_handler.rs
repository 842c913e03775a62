use crate::github::{
    builder::{AddReviewersBuilder, CreatePullRequestBuilder},
    error::Error,
    github_client::GithubClient,
    response::PullRequest,
};

/// Entry point for pull request operations on the client's repository.
pub struct PullRequestHandler<'a> {
    client: &'a GithubClient,
}

impl<'a> PullRequestHandler<'a> {
    pub(crate) fn new(client: &'a GithubClient) -> Self {
        PullRequestHandler { client }
    }

    pub fn create(&self) -> CreatePullRequestBuilder<'a> {
        CreatePullRequestBuilder::new(self.client)
    }

    pub fn add_reviewers(&self, pr_number: u64) -> AddReviewersBuilder<'a> {
        AddReviewersBuilder::new(self.client, pr_number)
    }

    pub async fn get(&self, pr_number: u64) -> Result<PullRequest, Error> {
        self.client.get_pull_request(pr_number).await
    }
}

#[cfg(test)]
mod tests {
    use crate::github::github_client::GithubClient;
    use anyhow::Result;
    use mockito::Server;

    #[tokio::test]
    async fn fetches_a_pull_request_by_number() -> Result<()> {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/repos/octo/hello/pulls/3")
            .with_status(200)
            .with_body(r#"{"id": 30, "number": 3}"#)
            .create_async()
            .await;

        let client = GithubClient::with_base_url("github_pat_test", "octo", "hello", server.url())?;
        let pr = client.pull_requests().get(3).await?;

        assert_eq!(pr.number, 3);
        assert_eq!(pr.id, 30);

        Ok(())
    }
}
