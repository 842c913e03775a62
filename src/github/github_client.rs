use super::{
    error::Error,
    handler::pull_request_handler::PullRequestHandler,
    request::{PullRequestRequest, ReviewersRequest, SerializeRequest},
    response::{PullRequest, ReviewerState},
};
use crate::{
    config::DEFAULT_API_URL,
    http::{FailureContext, Headers, HttpClient, ResponseHandler},
};
use reqwest::header::CONTENT_TYPE;

#[derive(Debug)]
pub struct GithubClient {
    http: HttpClient,
    token: String,
    owner: String,
    repo: String,
    base_url: String,
}

impl GithubClient {
    pub fn new(
        token: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::with_base_url(token, owner, repo, DEFAULT_API_URL)
    }

    pub fn with_base_url(
        token: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, Error> {
        let token = token.into().trim().to_owned();
        let owner = owner.into();
        let repo = repo.into();
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        if token.is_empty() {
            return Err(Error::Configuration("token must not be empty".to_owned()));
        }
        if token.contains('"') || token.contains('\'') {
            return Err(Error::Configuration(
                "token contains quote characters, check how it is loaded".to_owned(),
            ));
        }
        if owner.trim().is_empty() {
            return Err(Error::Configuration("owner must not be empty".to_owned()));
        }
        if repo.trim().is_empty() {
            return Err(Error::Configuration("repo must not be empty".to_owned()));
        }

        if !token.starts_with("github_pat_") && !token.starts_with("ghp_") {
            log::warn!("token does not look like a GitHub personal access token");
        }

        Ok(GithubClient {
            http: HttpClient::new()?,
            token,
            owner,
            repo,
            base_url,
        })
    }

    pub fn pull_requests(&self) -> PullRequestHandler<'_> {
        PullRequestHandler::new(self)
    }

    /// Opens a pull request. Issues exactly one POST; branch existence is
    /// left to the API unless [`validate_branches`](Self::validate_branches)
    /// is called beforehand.
    pub async fn create_pull_request(
        &self,
        request: PullRequestRequest,
    ) -> Result<PullRequest, Error> {
        request.validate()?;

        log::debug!(
            "creating pull request '{}' from '{}' into '{}'",
            request.title,
            request.head,
            request.base
        );

        let uri = format!("{}/repos/{}/{}/pulls", self.base_url, self.owner, self.repo);
        let context = FailureContext {
            not_found: format!(
                "repository {}/{} does not exist or is not visible to this token",
                self.owner, self.repo
            ),
            unprocessable: format!(
                "cannot open a pull request from '{}' into '{}': a branch may not exist, or an open pull request for this pair may already exist",
                request.head, request.base
            ),
        };
        let body = request.into_request()?;

        let payload = self
            .http
            .post(&uri)
            .github_headers(&self.token)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?
            .handle(context)
            .await?;

        let pr = serde_json::from_str::<PullRequest>(&payload)?;

        log::info!("created pull request #{}", pr.number);

        Ok(pr)
    }

    /// Requests reviews on an existing pull request. Rejected locally,
    /// without an HTTP call, when there is nothing to request.
    pub async fn add_reviewers(
        &self,
        pr_number: u64,
        request: ReviewersRequest,
    ) -> Result<ReviewerState, Error> {
        if pr_number == 0 {
            return Err(Error::Configuration(
                "pull request number must be positive".to_owned(),
            ));
        }
        if request.is_empty() {
            return Err(Error::Configuration(
                "at least one reviewer or team reviewer must be provided".to_owned(),
            ));
        }

        log::debug!("requesting reviewers on pull request #{}", pr_number);

        let uri = format!(
            "{}/repos/{}/{}/pulls/{}/requested_reviewers",
            self.base_url, self.owner, self.repo, pr_number
        );
        let context = FailureContext {
            not_found: format!(
                "pull request #{} does not exist in {}/{}",
                pr_number, self.owner, self.repo
            ),
            unprocessable: "a requested reviewer or team does not exist, is not a collaborator, or is the author of the pull request".to_owned(),
        };
        let body = request.into_request()?;

        let payload = self
            .http
            .post(&uri)
            .github_headers(&self.token)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?
            .handle(context)
            .await?;

        let state = serde_json::from_str::<ReviewerState>(&payload)?;

        log::info!(
            "requested {} reviewer(s) and {} team(s) on pull request #{}",
            state.requested_reviewers.len(),
            state.requested_teams.len(),
            pr_number
        );

        Ok(state)
    }

    /// Opens a pull request and requests reviews on it in one go. The pull
    /// request is not rolled back when the reviewer call fails; the error
    /// carries the created pull request so callers know it exists.
    pub async fn create_pr_with_reviewers(
        &self,
        request: PullRequestRequest,
        reviewers: ReviewersRequest,
    ) -> Result<PullRequest, Error> {
        let pr = self.create_pull_request(request).await?;

        if reviewers.is_empty() {
            return Ok(pr);
        }

        match self.add_reviewers(pr.number, reviewers).await {
            Ok(_) => Ok(pr),
            Err(source) => Err(Error::ReviewersNotAssigned {
                pull_request: Box::new(pr),
                source: Box::new(source),
            }),
        }
    }

    pub async fn get_pull_request(&self, pr_number: u64) -> Result<PullRequest, Error> {
        let uri = format!(
            "{}/repos/{}/{}/pulls/{}",
            self.base_url, self.owner, self.repo, pr_number
        );
        let context = FailureContext {
            not_found: format!(
                "pull request #{} does not exist in {}/{}",
                pr_number, self.owner, self.repo
            ),
            unprocessable: format!("pull request #{} cannot be processed", pr_number),
        };

        let payload = self
            .http
            .get(&uri)
            .github_headers(&self.token)
            .send()
            .await?
            .handle(context)
            .await?;

        Ok(serde_json::from_str::<PullRequest>(&payload)?)
    }

    pub async fn branch_exists(&self, branch: &str) -> Result<bool, Error> {
        let uri = format!(
            "{}/repos/{}/{}/branches/{}",
            self.base_url, self.owner, self.repo, branch
        );

        let response = self.http.get(&uri).github_headers(&self.token).send().await?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(true);
        }

        match status {
            404 => Ok(false),
            401 | 403 => Err(Error::Authentication { status }),
            _ => Err(Error::Api {
                status,
                body: response.text().await?,
            }),
        }
    }

    /// Pre-flight check naming the missing branch, instead of the less
    /// specific 422 the create call would produce.
    pub async fn validate_branches(&self, head: &str, base: &str) -> Result<(), Error> {
        if !self.branch_exists(head).await? {
            return Err(Error::NotFound(format!(
                "head branch '{}' does not exist in {}/{}",
                head, self.owner, self.repo
            )));
        }

        if !self.branch_exists(base).await? {
            return Err(Error::NotFound(format!(
                "base branch '{}' does not exist in {}/{}",
                base, self.owner, self.repo
            )));
        }

        Ok(())
    }
}
