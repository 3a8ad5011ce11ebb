/// Roster Server - user management GraphQL API
use clap::{Parser, Subcommand};
use roster_server::{config::ServerConfig, create_router, router, schema, state::AppState};
use roster_storage::UserStore;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster user management GraphQL server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the GraphQL schema (SDL)
    PrintSchema,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::PrintSchema => {
            println!("{}", schema::schema_sdl());
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Volatile store, seeded once per process
    let store = roster_storage::shared(UserStore::seeded());
    tracing::info!("User store seeded with {} users", store.read().await.len());

    // Build application state and router
    let app_state = AppState::new(store, &config.graphql);
    let app = create_router(app_state, &config.graphql);

    let addr = config.socket_addr()?;
    let listener = router::bind(addr).await?;

    tracing::info!("Server Running at: http://{}/", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
