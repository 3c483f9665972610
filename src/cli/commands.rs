use crate::config::Overrides;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "posts-graphql")]
#[command(
    author,
    version,
    about = "A minimal GraphQL server over an in-memory list of posts"
)]
pub struct Cli {
    /// Port to listen on (defaults to 4000)
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Path to a YAML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not serve the GraphiQL console
    #[arg(long)]
    pub no_graphiql: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the GraphQL schema and exit
    #[arg(long)]
    pub print_schema: bool,
}

impl Cli {
    /// Settings given here take precedence over the config file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            port: self.port,
            graphiql: self.no_graphiql.then_some(false),
        }
    }
}
