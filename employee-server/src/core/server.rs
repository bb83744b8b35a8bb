//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::future::Future;
use std::net::SocketAddr;

use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use crate::core::{Config, Result, ServerError, ServerState};

/// HTTP 请求日志中间件
async fn log_request(
    request: axum::extract::Request,
    next: middleware::Next,
) -> axum::response::Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", request_id = %request_id, "{} {} {}", method, uri, status);

    response
}

/// 单一来源的 CORS 配置
fn cors_layer(config: &Config) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(&config.cors_origin)
        .map_err(|e| ServerError::Config(format!("CORS_ORIGIN {}: {}", config.cors_origin, e)))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Build the full application router (routes + state + middleware)
pub fn build_router(state: ServerState) -> Result<Router> {
    let cors = cors_layer(&state.config)?;

    let app = crate::api::build_app()
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(PropagateRequestIdLayer::x_request_id())
                // HTTP 请求日志中间件
                .layer(middleware::from_fn(log_request))
                .layer(cors),
        );

    Ok(app)
}

/// Serve `router` on an already bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn ctrl_c() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down...");
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with an initialized state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> Result<()> {
        let router = build_router(self.state.clone())?;

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Employee server listening on {}", addr);
        tracing::info!("CORS origin: {}", self.config.cors_origin);

        serve(listener, router, ctrl_c()).await
    }
}
