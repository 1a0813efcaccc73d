//! `labdesk-inspect` -- print a summary of the file-backed asset catalogue.
//!
//! Opens the store directory, waits for the catalogue to load, then
//! writes stats, category counts and an audit of inconsistent assets to
//! stdout as JSON. Optionally checks that the chemistry API is reachable.
//!
//! # Environment variables
//!
//! | Variable                   | Default                        | Description                         |
//! |----------------------------|--------------------------------|-------------------------------------|
//! | `LABDESK_STORE_DIR`        | `.labdesk`                     | Root directory of the file store    |
//! | `LABDESK_CATALOGUE_KEY`    | `asset-catalogue`              | Key the catalogue is persisted under |
//! | `LABDESK_PROBE_API`        | `false`                        | Probe `GET /health` when truthy     |
//! | `LABDESK_API_URL`          | `http://localhost:8000/api/v1` | Chemistry API root                  |
//! | `LABDESK_API_TIMEOUT_SECS` | `30`                           | Request timeout                     |

mod audit;
mod config;

use std::sync::Arc;

use anyhow::Context;
use labdesk_catalogue::AssetCatalogue;
use labdesk_client::{ChemistryApi, ClientConfig};
use labdesk_store::FileStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::InspectConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "labdesk_inspect=info,labdesk_catalogue=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = InspectConfig::from_env();
    tracing::info!(
        store_dir = %config.store_dir.display(),
        key = %config.catalogue_key,
        probe_api = config.probe_api,
        "Starting labdesk-inspect",
    );

    let store = FileStore::open(config.store_dir.clone())
        .await
        .with_context(|| format!("opening store at {}", config.store_dir.display()))?;
    let catalogue = Arc::new(AssetCatalogue::with_key(
        Arc::new(store),
        config.catalogue_key.clone(),
    ));

    // Loading starts in the background; `ready` joins it.
    let _loader = catalogue.spawn_load();
    catalogue.ready().await.context("loading asset catalogue")?;

    let stats = catalogue.stats().await?;
    let categories = catalogue.categories().await?;
    tracing::info!(
        total = stats.total,
        protected = stats.protected,
        total_size = stats.total_size,
        "Catalogue loaded",
    );

    let report = audit::audit(&catalogue.list_all().await?);
    if !report.is_clean() {
        tracing::warn!(
            unknown_category = report.unknown_category.len(),
            type_mismatch = report.type_mismatch.len(),
            "Catalogue has inconsistent assets",
        );
    }

    let summary = serde_json::json!({
        "key": catalogue.key(),
        "stats": stats,
        "categories": categories,
        "audit": report,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    if config.probe_api {
        probe_api().await;
    }

    Ok(())
}

/// Log the chemistry API health. Failures are reported, not fatal.
async fn probe_api() {
    let client_config = ClientConfig::from_env();
    let api = match ChemistryApi::from_config(&client_config) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build chemistry API client");
            return;
        }
    };

    match api.health().await {
        Ok(health) if health.is_healthy() => {
            tracing::info!(
                url = api.base_url(),
                version = health.version.as_deref().unwrap_or("unknown"),
                "Chemistry API healthy",
            );
        }
        Ok(health) => {
            tracing::warn!(url = api.base_url(), status = %health.status, "Chemistry API degraded");
        }
        Err(e) => {
            tracing::warn!(url = api.base_url(), error = %e, "Chemistry API unreachable");
        }
    }
}
