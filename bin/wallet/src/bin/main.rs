//! CLI front end for the token transfer client.
//!
//! Stands in for the presentation layer: it supplies the recipient and
//! amount, triggers connect and transfer, and prints the connected
//! address, transaction hash, and per-failure alert messages.

use clap::{Parser, Subcommand};
use std::time::Instant;
use tracing::{error, info};
use transfer::{units, TransferExecutor, TransferRequest};
use wallet::{
    config::Config,
    metrics::{install_prometheus_exporter, Metrics},
};

#[derive(Parser)]
#[command(name = "wallet")]
#[command(about = "Connect a wallet and transfer ERC20 tokens")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Private key for the "local" backend (hex string, with or
    /// without 0x prefix)
    #[arg(short = 'k', long, env = "PRIVATE_KEY")]
    private_key: Option<String>,

    /// Wallet backend to connect through; overrides the config file
    #[arg(short, long)]
    backend: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Connect a wallet and print the account address
    Connect,

    /// Connect a wallet and print the account's token balance
    Balance,

    /// Connect a wallet and send tokens
    Send {
        /// Recipient account address
        #[arg(short, long)]
        recipient: String,

        /// Amount in human-readable token units (e.g. "2.5")
        #[arg(short, long)]
        amount: String,
    },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_file(&cli.config)?;
    let backend = cli
        .backend
        .clone()
        .unwrap_or_else(|| config.wallet_backend.clone());

    info!("Loaded config:");
    info!("  RPC URL: {}", config.rpc_url);
    info!("  Chain ID: {}", config.chain_id);
    info!("  Token: {} ({})", config.token.symbol, config.token.address);
    info!("  Backend: {}", backend);

    if let Some(port) = config.metrics_port {
        install_prometheus_exporter(port)?;
        info!("  Metrics: http://0.0.0.0:{}/metrics", port);
    }
    let metrics = Metrics::new();

    let provider = client::create_provider(&config.rpc_url)?;
    let registry = wallet::build_registry(&config, cli.private_key.as_deref());
    let store = session::SessionStore::new();

    // Connect first; every subcommand needs a session.
    let session = match wallet::connect_wallet(&registry, &backend, &store).await {
        Ok(session) => {
            metrics.record_connect();
            println!("Connected wallet: {}", session.address);
            session
        }
        Err(e) => {
            metrics.record_connect_failure();
            error!(backend = %backend, error = %e, "Wallet connection failed");
            println!("⚠ {}", e);
            return Ok(());
        }
    };

    match cli.command {
        Command::Connect => {}
        Command::Balance => {
            let balance =
                wallet::query_token_balance(&provider, &config.token, session.address).await?;
            metrics.set_token_balance(balance.try_into().unwrap_or(u128::MAX));

            println!(
                "Balance: {} {}",
                units::descale(balance, config.token.decimals),
                config.token.symbol
            );
        }
        Command::Send { recipient, amount } => {
            let executor =
                TransferExecutor::new(provider, config.token.address, config.token.decimals);
            let request = TransferRequest { recipient, amount };

            let started = Instant::now();
            match wallet::send_token(&executor, &store, &request).await {
                Ok(result) => {
                    metrics.record_transfer_submitted(started.elapsed());
                    println!("Transaction sent! Hash: {}", result.tx_hash);
                }
                Err(e) => {
                    metrics.record_transfer_failed(e.kind(), started.elapsed());
                    error!(kind = e.kind(), error = %e, "Transfer failed");
                    println!("⚠ {}", e);
                }
            }
        }
    }

    Ok(())
}
