mod add_reviewers_builder;
mod create_pull_request_builder;

pub use add_reviewers_builder::AddReviewersBuilder;
pub use create_pull_request_builder::CreatePullRequestBuilder;

use crate::github::error::Error;

pub trait BuilderExecutor {
    type Output;

    async fn execute(self) -> Result<Self::Output, Error>;
}
