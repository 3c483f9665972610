use anyhow::{Context, Result};
use colored::Colorize;
use posts_graphql::config::PostsConfig;
use posts_graphql::graphql::{bind, build_schema, router, serve};

pub fn handle_serve(config: PostsConfig) -> Result<()> {
    let schema = build_schema(config.store());
    let settings = config.server;

    tracing::info!(
        host = %settings.host,
        port = settings.port,
        endpoint = %settings.endpoint,
        graphiql = settings.graphiql,
        posts = config.posts.len(),
        "Starting GraphQL server"
    );

    tokio::runtime::Runtime::new()
        .context("Failed to start async runtime")?
        .block_on(async {
            let listener = bind(&settings.listen_addr()).await?;

            // Only announce once the port is actually ours.
            let url = settings.display_url(listener.local_addr()?.port());
            println!("{} {}", "Running a GraphQL API server at".green(), url.cyan());
            if settings.graphiql {
                println!("{} {}", "GraphiQL console:".green(), url.cyan());
            }

            serve(listener, router(schema, &settings)).await
        })
        .inspect_err(|e| tracing::error!(error = %e, "Server failed"))?;
    Ok(())
}
