//! Creator launchpad service
//!
//! Backend for the creator verification and meme-coin issuance flow:
//! OAuth callbacks, creator records in Postgres, and SPL token minting
//! against a Solana cluster.

use anyhow::Result;
use clap::Parser;
use launchpad_sdk::{RpcLedgerClient, WalletSession};
use launchpad_service::api::{start_server, ApiState};
use launchpad_service::config::ServiceConfig;
use launchpad_service::database::PostgresStore;
use launchpad_service::ipfs::{MetadataUploader, PinataUploader, PlaceholderUploader};
use launchpad_service::issuance::Issuer;
use launchpad_service::oauth::{IdentityProvider, TwitchProvider, YoutubeProvider};
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "launchpad-service")]
#[command(about = "Creator launchpad backend")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "launchpad.toml")]
    config: String,

    /// Override log level
    #[arg(long)]
    log_level: Option<String>,

    /// Dry run mode (validate config and exit)
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = if std::path::Path::new(&cli.config).exists() {
        ServiceConfig::from_file(&cli.config)?
    } else {
        warn!("Config file not found, using defaults: {}", cli.config);
        ServiceConfig::default()
    };
    config.apply_env_overrides();

    if let Some(log_level) = cli.log_level {
        config.monitoring.log_level = log_level;
    }

    init_logging(&config);

    info!("Starting launchpad service");
    info!("Cluster: {}", config.solana.cluster);
    info!("RPC endpoint: {}", config.solana.rpc_url);

    config.validate()?;
    info!("Configuration validated successfully");

    if cli.dry_run {
        info!("Dry run mode - configuration is valid, exiting");
        return Ok(());
    }

    info!("Connecting to Postgres...");
    let store: Arc<dyn launchpad_service::database::RecordStore> =
        Arc::new(PostgresStore::new(&config.database).await?);
    info!("Database ready");

    let http = reqwest::Client::new();
    let youtube: Arc<dyn IdentityProvider> = Arc::new(YoutubeProvider::new(
        http.clone(),
        config.providers.youtube.clone(),
    ));
    let twitch: Arc<dyn IdentityProvider> = Arc::new(TwitchProvider::new(
        http.clone(),
        config.providers.twitch.clone(),
    ));

    let uploader: Arc<dyn MetadataUploader> = if config.storage.jwt.is_empty() {
        warn!("No pinning JWT configured, using placeholder storage");
        Arc::new(PlaceholderUploader)
    } else {
        Arc::new(PinataUploader::new(http.clone(), config.storage.clone()))
    };

    let ledger: Arc<dyn launchpad_sdk::LedgerClient> =
        Arc::new(RpcLedgerClient::new(config.solana.rpc_url.clone()));

    let wallet = match &config.solana.keypair_path {
        Some(path) => {
            let session = WalletSession::from_file(path)?;
            info!("Service wallet: {}", session.pubkey());
            Some(Arc::new(session))
        }
        None => {
            warn!("No keypair configured, issuance and airdrop are disabled");
            None
        }
    };

    let issuer = Arc::new(Issuer::new(
        ledger.clone(),
        store.clone(),
        uploader.clone(),
        config.solana.cluster,
        config.solana.min_operating_lamports,
    ));

    let state = ApiState {
        store,
        youtube,
        twitch,
        uploader,
        ledger,
        issuer,
        wallet,
        cluster: config.solana.cluster,
    };

    info!("Starting API server on {}", config.api.bind_address);
    let api_server = start_server(state, &config.api).await?;

    info!("Service started successfully. Press Ctrl+C to shutdown.");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
        _ = api_server => {
            info!("API server finished");
        }
    }

    info!("Shutting down launchpad service");
    Ok(())
}

fn init_logging(config: &ServiceConfig) {
    let log_level = &config.monitoring.log_level;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("launchpad_service={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
