use anyhow::{Context, Result};
use clap::Parser;

use posts_graphql::cli::Cli;
use posts_graphql::config::PostsConfig;
use posts_graphql::logging;

mod handlers;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_schema {
        return handlers::handle_print_schema();
    }

    logging::init(cli.verbose, cli.log_file.clone());

    let config = PostsConfig::load(cli.config.as_deref())
        .and_then(|config| config.apply(cli.overrides()))
        .context("Failed to load configuration")
        .inspect_err(|e| tracing::error!(error = %format!("{e:#}"), "Startup failed"))?;

    handlers::handle_serve(config)
}
