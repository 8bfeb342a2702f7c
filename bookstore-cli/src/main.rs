//! bookstore CLI - serve and migrate the books table over HTTP
//!
//! `bookstore serve` connects the pool, bootstraps the schema, and runs
//! the axum server until Ctrl+C/SIGTERM. `bookstore migrate` runs the
//! schema bootstrap and exits.

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bookstore_server::db;
use bookstore_server::http::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "bookstore",
    author,
    version,
    about = "HTTP CRUD service for a single books table"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Create the books table and exit
    Migrate(MigrateArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to bind to
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    #[command(flatten)]
    database: DatabaseArgs,
}

#[derive(Args, Debug)]
struct MigrateArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

#[derive(Args, Debug)]
struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", default_value = "postgres://localhost/bookstore")]
    database_url: String,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env may carry DATABASE_URL; absence is fine
    dotenvy::dotenv().ok();
    init_tracing().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => run_serve(args).await?,
        Commands::Migrate(args) => run_migrate(args).await?,
    }
    Ok(())
}

async fn run_serve(args: ServeArgs) -> Result<()> {
    let pool = db::create_pool(&args.database.database_url)
        .await
        .context("failed to connect to database")?;
    tracing::info!("Connected to PostgreSQL");

    db::migrations::run(&pool)
        .await
        .context("failed to run migrations")?;

    let config = ServerConfig {
        bind_addr: args.bind,
    };
    run_server(pool, config).await?;
    Ok(())
}

async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = db::create_pool(&args.database.database_url)
        .await
        .context("failed to connect to database")?;

    db::migrations::run(&pool)
        .await
        .context("failed to run migrations")?;
    tracing::info!("Migrations complete");
    Ok(())
}
