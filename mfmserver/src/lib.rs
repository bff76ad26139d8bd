//! # mfmserver - MagicalFM HTTP server
//!
//! This crate assembles the site's HTTP surface on top of axum:
//!
//! - 🚀 **High level server**: [`Server`] and [`ServerBuilder`] hide the
//!   listener, router composition and graceful Ctrl+C shutdown
//! - 🔀 **Site redirects**: the configured redirect table is applied as
//!   middleware before routing, answering plain 301/302
//! - 📻 **Episodes API**: JSON endpoints over the episode snapshot
//! - 📋 **Logging**: tracing initialization driven by the site config
//!
//! ## Architecture
//!
//! - [`server`]: the main server type and its builder
//! - [`redirect`]: the before-routing redirect middleware
//! - [`episodes_api`]: the `/episodes` JSON endpoints
//! - [`logs`]: tracing subscriber setup
//!
//! ## Example
//!
//! ```rust,no_run
//! use mfmserver::{ServerBuilder, episodes_api_router, init_logging};
//! use mfmepisodes::EpisodeStore;
//! use mfmredirect::RedirectTable;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     init_logging();
//!
//!     let store = Arc::new(EpisodeStore::load("content/episodes.json")?);
//!     let redirects = RedirectTable::load("content/redirects.yaml")?;
//!
//!     let mut server = ServerBuilder::new_configured().build();
//!     server.add_router("/api", episodes_api_router(store, 12)).await;
//!     server.set_redirects(redirects);
//!
//!     server.start().await;
//!     server.wait().await;
//!     Ok(())
//! }
//! ```

pub mod episodes_api;
pub mod logs;
pub mod redirect;
pub mod server;

pub use episodes_api::episodes_api_router;
pub use logs::init_logging;
pub use redirect::apply_redirects;
pub use server::{Server, ServerBuilder, ServerInfo};
