use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use reel_server::{ReelServer, ServerConfig};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Config(args) => cmd_config(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(ServerConfig::default()),
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    let server = ReelServer::new(config)?;
    println!(
        "{} reel serving {} on {}",
        "✓".green().bold(),
        "/movies".yellow(),
        server.config().bind_addr.to_string().bold()
    );
    server.serve().await?;
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}
