use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "reel",
    about = "reel: an in-memory movie collection over HTTP",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Print the effective configuration as TOML
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides the config file)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
