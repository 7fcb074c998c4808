use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use ws_registry_common::constants::READINESS_TIMEOUT_SECS;
use ws_registry_common::validation::validate_connection_id;
use ws_registry_common::{Config, ConnectionRecord};
use ws_registry_handler::{ConnectionStore, StoreConnector, YdbConnector};

/// CLI arguments for the registry tool
#[derive(Parser, Debug)]
#[command(name = "wsreg")]
#[command(about = "Inspect and edit the WebSocket connection registry", long_about = None)]
#[command(version)]
struct Args {
    /// Database endpoint
    #[arg(long, env = "ENDPOINT")]
    endpoint: String,

    /// Database path
    #[arg(long, env = "DATABASE")]
    database: String,

    /// Service account key file (metadata service credentials when omitted)
    #[arg(long, env = "SA_KEY_FILE")]
    sa_key_file: Option<PathBuf>,

    /// Seconds to wait for the database to become ready
    #[arg(long, default_value_t = READINESS_TIMEOUT_SECS)]
    readiness_timeout: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every registered connection ID
    List {
        /// Print records as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Register a connection ID
    Register { id: String },

    /// Unregister a connection ID
    Unregister { id: String },
}

impl Args {
    fn config(&self) -> Config {
        Config {
            endpoint: self.endpoint.clone(),
            database: self.database.clone(),
            sa_key_file: self
                .sa_key_file
                .clone()
                .filter(|path| !path.as_os_str().is_empty()),
            readiness_timeout: Duration::from_secs(self.readiness_timeout),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = args.config();
    info!("Registry database {} at {}", config.database, config.endpoint);

    let store = YdbConnector::new(config)
        .connect()
        .await
        .context("Failed to connect to the registry database")?;

    match args.command {
        Command::List { json } => {
            let ids = store.list().await.context("Failed to list connections")?;
            for id in ids {
                if json {
                    println!("{}", serde_json::to_string(&ConnectionRecord::from(id))?);
                } else {
                    println!("{}", id);
                }
            }
        }
        Command::Register { id } => {
            validate_connection_id(&id)?;
            store
                .register(&id)
                .await
                .with_context(|| format!("Failed to register connection {}", id))?;
            info!("Registered connection {}", id);
        }
        Command::Unregister { id } => {
            validate_connection_id(&id)?;
            store
                .unregister(&id)
                .await
                .with_context(|| format!("Failed to unregister connection {}", id))?;
            info!("Unregistered connection {}", id);
        }
    }

    Ok(())
}
