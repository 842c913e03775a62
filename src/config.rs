use crate::github::error::Error;
use std::env;

const TOKEN_VAR: &str = "GITHUB_TOKEN";
const OWNER_VAR: &str = "GITHUB_OWNER";
const REPO_VAR: &str = "GITHUB_REPO";
const API_URL_VAR: &str = "GITHUB_API_URL";

const DEFAULT_OWNER: &str = "some-owner";
const DEFAULT_REPO: &str = "some-repo";
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Process-wide configuration, populated once at startup from the
/// environment. Read-only after loading.
#[derive(Debug)]
pub struct Config {
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Config, Error> {
        Config::resolve(|name| env::var(name).ok())
    }

    fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, Error> {
        let token = lookup(TOKEN_VAR)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| Error::Configuration(format!("{} must be set", TOKEN_VAR)))?;

        Ok(Config {
            token,
            owner: lookup(OWNER_VAR).unwrap_or_else(|| DEFAULT_OWNER.to_owned()),
            repo: lookup(REPO_VAR).unwrap_or_else(|| DEFAULT_REPO.to_owned()),
            base_url: lookup(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
        })
    }
}
