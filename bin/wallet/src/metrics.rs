//! Prometheus metrics for the wallet client.
//!
//! All metrics are aggregated in the [`Metrics`] struct for easy tracking and management.

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use std::time::Duration;

/// Aggregated metrics for the wallet client.
///
/// Metric descriptions are registered with the global registry on creation.
#[derive(Debug, Clone)]
pub struct Metrics {
    _private: (),
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics instance and register all metric descriptions.
    pub fn new() -> Self {
        Self::register_descriptions();
        Self { _private: () }
    }

    /// Register metric descriptions with the global registry.
    fn register_descriptions() {
        // Connection metrics
        describe_counter!(
            "wallet_connects_total",
            "Total number of successful wallet connections"
        );
        describe_counter!(
            "wallet_connect_failures_total",
            "Total number of failed wallet connection attempts"
        );

        // Transfer metrics
        describe_counter!(
            "wallet_transfers_submitted_total",
            "Total number of token transfers submitted to the chain"
        );
        describe_counter!(
            "wallet_transfers_failed_total",
            "Total failed transfer attempts by failure kind"
        );
        describe_histogram!(
            "wallet_transfer_duration_seconds",
            "Duration of each transfer attempt in seconds"
        );

        // Balance metrics (gauge - current value)
        describe_gauge!(
            "wallet_token_balance_units",
            "Last observed token balance of the connected account, in smallest units"
        );
    }

    /// Record a successful wallet connection.
    pub fn record_connect(&self) {
        counter!("wallet_connects_total").increment(1);
    }

    /// Record a failed connection attempt.
    pub fn record_connect_failure(&self) {
        counter!("wallet_connect_failures_total").increment(1);
    }

    /// Record a submitted transfer.
    pub fn record_transfer_submitted(&self, duration: Duration) {
        counter!("wallet_transfers_submitted_total").increment(1);
        histogram!("wallet_transfer_duration_seconds").record(duration.as_secs_f64());
    }

    /// Record a failed transfer attempt by kind.
    pub fn record_transfer_failed(&self, kind: &str, duration: Duration) {
        counter!("wallet_transfers_failed_total", "kind" => kind.to_string()).increment(1);
        histogram!("wallet_transfer_duration_seconds").record(duration.as_secs_f64());
    }

    /// Set the last observed token balance in smallest units.
    pub fn set_token_balance(&self, balance_units: u128) {
        gauge!("wallet_token_balance_units").set(balance_units as f64);
    }
}

/// Install the Prometheus metrics exporter and start the HTTP server.
///
/// Returns an error if the server fails to bind to the specified port.
pub fn install_prometheus_exporter(port: u16) -> eyre::Result<()> {
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::net::SocketAddr;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| eyre::eyre!("Failed to install Prometheus exporter: {}", e))?;

    Ok(())
}
