use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use meeting_minutes::{config::DEFAULT_CONFIG_PATH, create_router, telemetry, AppState, AwsServices, Config};
use tracing::info;

/// Meeting minutes pipeline: local server and maintenance commands
#[derive(Parser, Debug)]
#[command(name = "meeting-minutes")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Config file stem (extension optional; the file itself is optional)
    #[arg(long, env = "MEETING_MINUTES_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the upload and listing endpoints locally
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Summarize an existing transcript object
    Summarize {
        #[arg(long)]
        bucket: String,

        /// Transcript key, e.g. transcripts/meeting-transcript-20240101120000.json
        #[arg(long)]
        key: String,
    },

    /// Print stored summaries as JSON, newest first
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_cli();

    let cli = Cli::parse();
    let mut cfg = Config::load(&cli.config)?;
    let services = AwsServices::load().await;

    match cli.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                cfg.http_port = port;
            }

            let mut state =
                AppState::new(services.ingest_handler(&cfg)?, services.list_handler(&cfg));
            if let Some(dir) = cfg.static_dir() {
                info!("Serving browser client from {}", dir);
                state = state.with_static_dir(dir);
            }
            let app = create_router(state);

            let addr = cfg.http_addr();
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;

            info!("Meeting minutes API listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Summarize { bucket, key } => {
            let handler = services.summarize_handler(&cfg);
            let record = handler.summarize_object(&bucket, &key).await?;

            info!("Saved summary {}", record.meeting_id);
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::List => {
            let items = services.list_handler(&cfg).list().await?;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
    }

    Ok(())
}
