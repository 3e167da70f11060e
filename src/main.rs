use clap::Parser;
use crier::api::ApiClient;
use crier::cli::{Cli, Command};
use crier::config::{self, ListConfig, PostConfig};
use crier::error::CrierError;
use crier::resolver::Resolver;
use crossterm::style::Stylize;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("{} {e}", "error:".red());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CrierError> {
    config::validate_api_url(&cli.api_url)?;

    match cli.command {
        Command::Post {
            kind,
            name,
            token,
            message,
        } => execute_post(&cli.api_url, cli.quiet, kind, name, token, message).await,
        Command::List { kind, token } => execute_list(&cli.api_url, kind, token).await,
    }
}

async fn execute_post(
    api_url: &str,
    quiet: bool,
    kind: Option<String>,
    name: Option<String>,
    token: Option<String>,
    message: Option<String>,
) -> Result<(), CrierError> {
    let config = PostConfig::from_options(kind, name, token, message)?;

    let client = ApiClient::with_base_url(api_url, &config.token);
    let resolver = Resolver::new(&client);

    // Post depends on the resolved identifier, so the two calls stay sequential.
    let community = resolver.resolve(&config.kind_prefix, &config.name).await?;
    client.post_message(&community.id, &config.message).await?;

    if !quiet {
        println!(
            "{}",
            format!("Message posted to {}", community.label()).green()
        );
    }
    Ok(())
}

async fn execute_list(
    api_url: &str,
    kind: Option<String>,
    token: Option<String>,
) -> Result<(), CrierError> {
    let config = ListConfig::from_options(kind, token)?;

    let client = ApiClient::with_base_url(api_url, &config.token);
    let resolver = Resolver::new(&client);

    let communities = resolver.list(&config.kind_prefix).await?;
    if communities.is_empty() {
        println!("No communities of this type are visible to the token");
        return Ok(());
    }
    for community in &communities {
        println!("{}", community.label());
    }
    Ok(())
}
