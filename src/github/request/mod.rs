mod pull_request_request;
mod reviewers_request;

pub use pull_request_request::PullRequestRequest;
pub use reviewers_request::ReviewersRequest;

use crate::github::error::Error;
use serde::Serialize;

pub trait SerializeRequest {
    fn into_request(self) -> Result<String, Error>
    where
        Self: Serialize + Sized,
    {
        let body = serde_json::to_string(&self)?;

        Ok(body)
    }
}

impl SerializeRequest for PullRequestRequest {}
impl SerializeRequest for ReviewersRequest {}
