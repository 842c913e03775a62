mod pull_request_response;
mod reviewer_state_response;

pub use pull_request_response::PullRequest;
pub use reviewer_state_response::{Reviewer, ReviewerState, Team};
