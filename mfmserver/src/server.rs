//! # Server module - high level API over Axum
//!
//! This module wraps axum behind a small, ergonomic server type so the
//! application binary only assembles pieces instead of wiring routers,
//! listeners and shutdown handling by hand.
//!
//! ## Features
//!
//! - 🚀 **Simple JSON routes**: add API endpoints with `add_route()`
//! - 🧩 **Sub-routers**: mount whole APIs with `add_router()`
//! - 🔀 **Site redirects**: an injected redirect table applied before routing
//! - ⚡ **Graceful shutdown**: clean stop on Ctrl+C

use crate::redirect::apply_redirects;
use axum::routing::get;
use axum::{Json, Router};
use mfmconfig::get_config;
use mfmredirect::RedirectTable;
use serde::Serialize;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::{signal, sync::RwLock, task::JoinHandle};
use tracing::info;

/// Serializable server info
#[derive(Clone, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub base_url: String,
    pub http_port: u16,
}

/// Main server
pub struct Server {
    name: String,
    base_url: String,
    http_port: u16,
    router: Arc<RwLock<Router>>,
    redirects: Option<Arc<RedirectTable>>,
    join_handle: Option<JoinHandle<()>>,
}

impl Server {
    /// Create a new server instance
    ///
    /// # Arguments
    ///
    /// * `name` - Server name (for logs)
    /// * `base_url` - Public base URL (e.g. "http://localhost")
    /// * `http_port` - HTTP port to listen on
    ///
    /// # Example
    ///
    /// ```rust
    /// # use mfmserver::Server;
    /// let server = Server::new("MyAPI", "http://localhost", 3000);
    /// ```
    pub fn new(name: impl Into<String>, base_url: impl Into<String>, http_port: u16) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            http_port,
            router: Arc::new(RwLock::new(Router::new())),
            redirects: None,
            join_handle: None,
        }
    }

    /// Create a server from the site configuration
    pub fn new_configured() -> Self {
        let config = get_config();
        let url = config.get_base_url();
        let port = config.get_http_port();
        Self::new("MagicalFM-Server", url, port)
    }

    /// Add a dynamic JSON route
    ///
    /// Creates an endpoint returning JSON. The provided closure runs on
    /// every GET request to the given path.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use mfmserver::Server;
    /// # #[tokio::main]
    /// # async fn main() {
    /// # let mut server = Server::new("Test", "http://localhost", 3000);
    /// server.add_route("/api/status", || async {
    ///     serde_json::json!({
    ///         "status": "online",
    ///         "version": "1.0.0"
    ///     })
    /// }).await;
    /// # }
    /// ```
    pub async fn add_route<F, Fut, T>(&mut self, path: &str, f: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
        T: Serialize + Send + 'static,
    {
        let f = Arc::new(f);
        let handler = {
            let f = f.clone();
            move || {
                let f = f.clone();
                async move { Json(f().await) }
            }
        };

        let route = Router::new().route("/", get(handler));

        let mut r = self.router.write().await;
        *r = if path == "/" {
            std::mem::take(&mut *r).merge(route)
        } else {
            std::mem::take(&mut *r).nest(path, route)
        };
    }

    /// Add a sub-router to the server
    ///
    /// - If `path` is "/", merges directly into the main router
    /// - Otherwise, nests the router under the given path
    pub async fn add_router(&mut self, path: &str, sub_router: Router) {
        let mut r = self.router.write().await;

        let combined = if path == "/" {
            r.clone().merge(sub_router)
        } else {
            let normalized = format!("/{}", path.trim_start_matches('/'));
            r.clone().nest(&normalized, sub_router)
        };

        *r = combined;
    }

    /// Install the site redirect table
    ///
    /// The table is consulted before routing on every request, so
    /// redirects also fire for paths no route matches.
    pub fn set_redirects(&mut self, table: RedirectTable) {
        info!("Installing {} redirect rule(s)", table.len());
        self.redirects = Some(Arc::new(table));
    }

    /// Start the HTTP server
    ///
    /// Binds the configured port and installs Ctrl+C handling for a
    /// graceful stop.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use mfmserver::Server;
    /// # #[tokio::main]
    /// # async fn main() {
    /// # let mut server = Server::new("Test", "http://localhost", 3000);
    /// server.start().await;
    /// server.wait().await;  // Waits for Ctrl+C
    /// # }
    /// ```
    pub async fn start(&mut self) {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.http_port));
        info!(
            "Server {} running at {}:{}",
            self.name, self.base_url, self.http_port
        );

        let router = self.router.clone();
        let redirects = self.redirects.clone();
        let server_task = tokio::spawn(async move {
            let mut r = router.read().await.clone();
            if let Some(table) = redirects {
                r = apply_redirects(r, table);
            }
            let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
            axum::serve(listener, r.into_make_service()).await.unwrap();
        });

        let shutdown_task = tokio::spawn(async move {
            signal::ctrl_c().await.expect("failed to listen for ctrl_c");
            info!("Ctrl+C received, shutting down");
        });

        self.join_handle = Some(tokio::spawn(async move {
            tokio::select! {
                _ = server_task => {},
                _ = shutdown_task => {},
            }
        }));
    }

    /// Wait for the server to finish
    pub async fn wait(&mut self) {
        if let Some(h) = self.join_handle.take() {
            let _ = h.await;
        }
    }

    /// Get the server info
    pub fn info(&self) -> ServerInfo {
        ServerInfo {
            name: self.name.clone(),
            base_url: self.base_url.clone(),
            http_port: self.http_port,
        }
    }
}

/// Builder pattern
pub struct ServerBuilder {
    name: String,
    base_url: String,
    http_port: u16,
}

impl ServerBuilder {
    /// Create a new builder
    ///
    /// # Arguments
    ///
    /// * `name` - Server name
    /// * `base_url` - Public base URL (e.g. "http://localhost")
    /// * `http_port` - HTTP port
    pub fn new(name: impl Into<String>, base_url: impl Into<String>, http_port: u16) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            http_port,
        }
    }

    /// Create a builder from the site configuration
    pub fn new_configured() -> Self {
        let config = get_config();
        Self {
            name: "MagicalFM-Server".to_string(),
            base_url: config.get_base_url(),
            http_port: config.get_http_port(),
        }
    }

    /// Build the server
    ///
    /// Consumes the builder and returns a ready-to-use `Server`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use mfmserver::ServerBuilder;
    /// let mut server = ServerBuilder::new("MyAPI", "http://localhost", 3000)
    ///     .build();
    /// ```
    pub fn build(self) -> Server {
        Server::new(self.name, self.base_url, self.http_port)
    }
}
