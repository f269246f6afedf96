//! # HTTP Server
//!
//! Builds the combined router around one `BookStore` and serves it.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::book::BookStore;
use crate::observability::{log_event_with_fields, Event, Logger, MetricsRegistry};

use super::book_routes::{book_routes, BooksState};
use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, observability_routes};

pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
    metrics: Arc<MetricsRegistry>,
}

impl HttpServer {
    /// Create a server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a server whose store is seeded according to `config.seed`
    pub fn with_config(config: HttpServerConfig) -> Self {
        let store = if config.seed {
            BookStore::seeded()
        } else {
            BookStore::new()
        };
        Self::with_store(config, store)
    }

    /// Create a server around an existing store
    pub fn with_store(config: HttpServerConfig, store: BookStore) -> Self {
        let metrics = Arc::new(MetricsRegistry::new());
        let books_state = Arc::new(BooksState::new(store, Arc::clone(&metrics)));
        let router = Self::build_router(&config, books_state, Arc::clone(&metrics));
        Self {
            config,
            router,
            metrics,
        }
    }

    fn build_router(
        config: &HttpServerConfig,
        books_state: Arc<BooksState>,
        metrics: Arc<MetricsRegistry>,
    ) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(book_routes(books_state))
            .nest("/observability", observability_routes(Arc::clone(&metrics)))
            .layer(middleware::from_fn_with_state(metrics, log_requests))
            .layer(cors)
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    pub fn metrics(&self) -> Arc<MetricsRegistry> {
        Arc::clone(&self.metrics)
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> std::io::Result<()> {
        self.start_with_shutdown(async {
            // If the signal handler cannot be installed, serve until killed
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        })
        .await
    }

    /// Bind the configured address and serve until `shutdown` resolves
    ///
    /// The host may be an IP literal or a resolvable hostname.
    pub async fn start_with_shutdown<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local = listener.local_addr()?.to_string();
        log_event_with_fields(Event::Serving, &[("addr", local.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        log_event_with_fields(Event::ShutdownComplete, &[("addr", local.as_str())]);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Count and log every request with its status and latency
async fn log_requests(
    State(metrics): State<Arc<MetricsRegistry>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let latency_us = start.elapsed().as_micros().to_string();
    let fields = [
        ("latency_us", latency_us.as_str()),
        ("method", method.as_str()),
        ("path", path.as_str()),
        ("status", status.as_str()),
    ];

    metrics.increment_requests();
    if status.is_client_error() || status.is_server_error() {
        metrics.increment_requests_rejected();
        Logger::warn(Event::RequestRejected.as_str(), &fields);
    } else {
        log_event_with_fields(Event::RequestComplete, &fields);
    }

    response
}
