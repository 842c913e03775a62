pub mod builder;
pub mod error;
pub mod github_client;
pub mod handler;
pub mod request;
pub mod response;
