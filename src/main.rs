use anyhow::Context;
use clap::Parser;

use cinedeck::api::MovieClient;
use cinedeck::cli::Cli;
use cinedeck::config::Config;
use cinedeck::logging::init_tracing;
use cinedeck::session::TokenStore;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
        config.validate().context("invalid --base-url")?;
    }

    let client = MovieClient::new(&config.api.base_url)?;
    let tokens = TokenStore::open(config.session.resolved_token_path());
    tracing::info!(
        base_url = %client.base_url(),
        signed_in = tokens.is_signed_in(),
        "starting"
    );

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let _enter = runtime.enter();
    cinedeck::ui::runtime::run(client, tokens, cli.start_route(), config.tick_rate())?;

    Ok(())
}
