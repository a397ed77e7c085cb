use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "fieldsense")]
#[command(about = "Farm-monitoring backend: fields, readings, and dashboard stats", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server.
    Serve {
        /// Port to listen on; falls back to FIELDSENSE_PORT, then 8080.
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Apply database migrations and exit.
    Migrate,
    /// Seed demo data for a user: fields plus per-day readings and alerts.
    Seed {
        /// User id to own the seeded fields.
        #[arg(short, long)]
        user_id: String,
        #[arg(short, long, default_value = "3")]
        fields: usize,
        /// Days of satellite/weather history per field.
        #[arg(short, long, default_value = "14")]
        days: i64,
    },
}

fn database_url() -> Result<String> {
    std::env::var("DATABASE_URL").context("DATABASE_URL environment variable must be set")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { port, host } => {
            let port = port
                .unwrap_or_else(|| fieldsense_core::env_parse_with_default("FIELDSENSE_PORT", 8080));
            commands::serve::run(&host, port, &database_url()?).await
        },
        Commands::Migrate => commands::migrate::run(&database_url()?).await,
        Commands::Seed { user_id, fields, days } => {
            commands::seed::run(&database_url()?, &user_id, fields, days).await
        },
    }
}
