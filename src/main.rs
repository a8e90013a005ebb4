use anyhow::Result;
use clap::Parser;
use openai_kit::cli::{self, Cli};
use openai_kit::client::OpenAIClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    let client = OpenAIClient::from_env()?;

    cli::run(cli, &client).await?;
    Ok(())
}
