mod config;
mod github;
mod http;
mod logger;

use anyhow::{Context, Result};
use config::Config;
use github::{builder::BuilderExecutor, github_client::GithubClient};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        println!("error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    logger::init()?;

    let Config {
        token,
        owner,
        repo,
        base_url,
    } = Config::from_env().context("Cannot load configuration from the environment")?;

    log::info!("Using repository {}/{} via {}", owner, repo, base_url);

    let client = GithubClient::with_base_url(token, owner, repo, base_url)?;

    log::info!("Creating pull request");
    let pr = client
        .pull_requests()
        .create()
        .title("Add new functionality")
        .head("dev_branch")
        .base("main")
        .body("This PR adds new functionality to the project.")
        .reviewers(vec!["reviewer1".to_owned()])
        .execute()
        .await
        .context("Cannot create the pull request")?;

    println!("created pull request #{}", pr.number);
    println!("{}", serde_json::to_string_pretty(&pr)?);

    Ok(())
}
