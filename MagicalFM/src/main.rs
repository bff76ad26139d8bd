use mfmconfig::get_config;
use mfmepisodes::{EpisodeStore, EpisodesConfigExt};
use mfmredirect::{RedirectConfigExt, RedirectTable};
use mfmserver::{ServerBuilder, episodes_api_router, init_logging};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ========== PHASE 1 : Infrastructure ==========

    init_logging();
    let config = get_config();

    // ========== PHASE 2 : Site content ==========

    // A broken redirect file refuses to start rather than serving wrong answers
    info!("🔀 Loading redirect rules...");
    let redirects = RedirectTable::load(config.get_redirects_file()?)?;
    info!("✅ {} redirect rule(s) loaded", redirects.len());

    info!("📻 Loading episode snapshot...");
    let store = Arc::new(EpisodeStore::load(config.get_episodes_file()?)?);
    info!("✅ {} episode(s) loaded", store.len());

    let mut server = ServerBuilder::new_configured().build();

    let page_size = config.get_api_page_size()?;
    server
        .add_router("/api", episodes_api_router(store, page_size))
        .await;
    server.set_redirects(redirects);

    // Application info route
    server
        .add_route("/info", || async {
            serde_json::json!({"version": "1.0.0"})
        })
        .await;

    // ========== PHASE 3 : Server startup ==========

    info!("🌐 Starting HTTP server...");
    server.start().await;

    info!("✅ MagicalFM is ready!");
    info!("Press Ctrl+C to stop...");
    server.wait().await;

    Ok(())
}
