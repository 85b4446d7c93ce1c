mod config;
mod error;
mod relay;
mod routes;
mod state;

use std::sync::Arc;

use crate::error::ErrorCode;
use crate::relay::{HttpWalletRelay, SponsorshipPolicy, WalletRelay};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port = config::port_from_env().expect("invalid PORT");

    // Wallet relay is optional: the page still renders, wallet routes answer 503.
    let (relay, sponsorship) = match config::RelayConfig::from_env() {
        Ok(cfg) => {
            let sponsorship = SponsorshipPolicy::from_config(&cfg);
            match HttpWalletRelay::new(&cfg) {
                Ok(relay) => {
                    tracing::info!(
                        rpc_url = relay.rpc_url(),
                        chain_id = cfg.chain_id,
                        sponsored = cfg.policy_id.is_some(),
                        "wallet relay initialized"
                    );
                    (Some(Arc::new(relay) as Arc<dyn WalletRelay>), sponsorship)
                }
                Err(e) => {
                    tracing::error!(error = %e, code = e.error_code(), "wallet relay client build failed");
                    (None, sponsorship)
                }
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, code = e.error_code(), "wallet relay not configured, wallet features disabled");
            (None, SponsorshipPolicy { chain_id: config::DEFAULT_CHAIN_ID, policy_id: None })
        }
    };

    let state = state::AppState::new(relay, sponsorship);
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "smart-wallet-demo listening");
    axum::serve(listener, app).await.expect("server failed");
}
