use std::sync::Arc;

use axum::http::Method;
use axum::{Router, routing::get};
use broadsheet::assets::serve_embedded;
use broadsheet::config::{Cli, Config, default_config_path};
use broadsheet::pages::{self, AppState, handler::health};
use broadsheet::site::Site;
use clap::Parser;
use tokio::{signal, sync::RwLock};
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tracing;

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    dotenvy::dotenv().ok();

    let config_path = match args.config_path {
        Some(path) => std::path::PathBuf::from(path),
        None => default_config_path(),
    };

    tracing_subscriber::fmt().json().init();
    tracing::info!("broadsheet.svc starting");

    let cfg = Config::new(config_path.to_str().unwrap()).unwrap_or_else(|e| {
        tracing::error!(error = %e, path = ?config_path, "failed to load config file");
        std::process::exit(1);
    });
    let site = Site::load(&cfg.app).unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to load site content");
        std::process::exit(1);
    });
    tracing::info!("loaded {} entries", site.entries().len());

    let site = Arc::new(RwLock::new(site));
    let address = format!("0.0.0.0:{}", cfg.app.get_port());
    let cancellation_token = CancellationToken::new();

    // Background task to pick up content changes without a restart
    let reload_site = site.clone();
    let reload_cfg = cfg.app.clone();
    let reload_token = cancellation_token.clone();
    tokio::spawn(async move {
        let period = std::time::Duration::from_secs(reload_cfg.reload_interval_seconds);
        let mut interval = tokio::time::interval(period);
        interval.tick().await;
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    match Site::load(&reload_cfg) {
                        Ok(fresh) => {
                            let count = fresh.entries().len();
                            *reload_site.write().await = fresh;
                            tracing::info!("reloaded site content, {} entries", count);
                        }
                        Err(e) => {
                            tracing::warn!("failed to reload site content: {}", e);
                        }
                    }
                }
                _ = reload_token.cancelled() => {
                    tracing::info!("content reload task shutting down");
                    break;
                }
            }
        }
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .merge(pages::routes())
        .fallback(serve_embedded)
        .layer(cors)
        .with_state(AppState { site });

    let listener = tokio::net::TcpListener::bind(&address).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to setup tcp listener");
        std::process::exit(1);
    });

    tracing::info!("broadsheet.svc running on {}", &address);
    tokio::select! {
        result = axum::serve(listener, app) => {
            if let Err(err) = result {
                tracing::error!(error = %err, "server exited with error");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            tracing::info!("ctrl+c signal received, preparing to shutdown");
            cancellation_token.cancel();
        }
    }

    tracing::info!("broadsheet.svc going off, graceful shutdown complete");
}
