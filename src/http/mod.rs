use crate::github::error::Error;
use reqwest::{
    header::{ACCEPT, USER_AGENT},
    Client, RequestBuilder,
};
use std::{ops::Deref, time::Duration};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const API_VERSION: &str = "2022-11-28";

#[derive(Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(HttpClient { client })
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait Headers {
    fn github_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn github_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .header(USER_AGENT, "ghpr")
    }
}

/// Endpoint-specific wording for translated API failures.
pub struct FailureContext {
    pub not_found: String,
    pub unprocessable: String,
}

pub trait ResponseHandler {
    /// Reads the body and maps the status code onto the error taxonomy.
    /// 2xx yields the raw body for the caller to decode.
    async fn handle(self, context: FailureContext) -> Result<String, Error>;
}

impl ResponseHandler for reqwest::Response {
    async fn handle(self, context: FailureContext) -> Result<String, Error> {
        let status = self.status().as_u16();
        let body = self.text().await?;

        if (200..300).contains(&status) {
            return Ok(body);
        }

        Err(match status {
            401 | 403 => Error::Authentication { status },
            404 => Error::NotFound(context.not_found),
            422 => Error::Validation(format!("{} ({})", context.unprocessable, body.trim())),
            _ => Error::Api { status, body },
        })
    }
}
