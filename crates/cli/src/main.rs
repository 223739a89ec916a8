use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tandem")]
#[command(about = "1:1 meeting manager for team leads", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(short, long, default_value = "8686")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Manage auth session tokens
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// List a user's teams
    Teams {
        #[arg(short, long)]
        user: String,
    },
}

#[derive(Subcommand)]
enum AuthCommands {
    /// Mint a session token for a user
    Issue {
        #[arg(short, long)]
        user: String,
    },
    /// Revoke a session token (sign-out)
    Revoke { token: String },
    /// Drop expired session tokens
    Purge,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await,
        Commands::Auth { command } => match command {
            AuthCommands::Issue { user } => commands::auth::issue(&user).await,
            AuthCommands::Revoke { token } => commands::auth::revoke(&token).await,
            AuthCommands::Purge => commands::auth::purge().await,
        },
        Commands::Teams { user } => commands::teams(&user).await,
    }
}
