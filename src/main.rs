mod core;
mod features;
mod shared;

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::core::mapper::Mapper;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::service::CrudService;
use crate::core::{database, middleware};
use crate::features::destination_types::{
    mapping as destination_type_mapping, repositories::PgDestinationTypeRepository,
    routes as destination_types_routes,
};
use crate::features::destinations::{
    mapping as destination_mapping, repositories::PgDestinationRepository,
    routes as destinations_routes,
};
use crate::features::hashtags::{
    mapping as hashtag_mapping, repositories::PgHashtagRepository, routes as hashtags_routes,
};
use crate::features::poi_types::{
    mapping as poi_type_mapping, repositories::PgPoiTypeRepository, routes as poi_types_routes,
};
use crate::features::pois::{
    mapping as poi_mapping, repositories::PgPoiRepository, routes as pois_routes,
};
use crate::features::provinces::{
    mapping as province_mapping, repositories::PgProvinceRepository, routes as provinces_routes,
};
use crate::features::users::{
    mapping as user_mapping, repositories::PgUserRepository, routes as users_routes,
};

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

/// Registers every feature's conversion rules and checks that each rule the
/// request path depends on is present, so a missing registration fails at
/// startup instead of surfacing as a 500 later.
fn build_mapper() -> anyhow::Result<Arc<Mapper>> {
    let mut mapper = Mapper::new();
    user_mapping::register_mappings(&mut mapper);
    destination_mapping::register_mappings(&mut mapper);
    hashtag_mapping::register_mappings(&mut mapper);
    province_mapping::register_mappings(&mut mapper);
    destination_type_mapping::register_mappings(&mut mapper);
    poi_type_mapping::register_mappings(&mut mapper);
    poi_mapping::register_mappings(&mut mapper);

    user_mapping::verify_mappings(&mapper)?;
    destination_mapping::verify_mappings(&mapper)?;
    hashtag_mapping::verify_mappings(&mapper)?;
    province_mapping::verify_mappings(&mapper)?;
    destination_type_mapping::verify_mappings(&mapper)?;
    poi_type_mapping::verify_mappings(&mapper)?;
    poi_mapping::verify_mappings(&mapper)?;

    Ok(Arc::new(mapper))
}

fn api_routes(pool: PgPool, mapper: Arc<Mapper>) -> Router {
    let user_service = Arc::new(CrudService::new(
        Arc::new(PgUserRepository::new(pool.clone())),
        Arc::clone(&mapper),
    ));
    let destination_service = Arc::new(CrudService::new(
        Arc::new(PgDestinationRepository::new(pool.clone())),
        Arc::clone(&mapper),
    ));
    let hashtag_service = Arc::new(CrudService::new(
        Arc::new(PgHashtagRepository::new(pool.clone())),
        Arc::clone(&mapper),
    ));
    let province_service = Arc::new(CrudService::new(
        Arc::new(PgProvinceRepository::new(pool.clone())),
        Arc::clone(&mapper),
    ));
    let destination_type_service = Arc::new(CrudService::new(
        Arc::new(PgDestinationTypeRepository::new(pool.clone())),
        Arc::clone(&mapper),
    ));
    let poi_type_service = Arc::new(CrudService::new(
        Arc::new(PgPoiTypeRepository::new(pool.clone())),
        Arc::clone(&mapper),
    ));
    let poi_service = Arc::new(CrudService::new(
        Arc::new(PgPoiRepository::new(pool)),
        mapper,
    ));

    Router::new()
        .merge(users_routes::routes(user_service))
        .merge(destinations_routes::routes(destination_service))
        .merge(hashtags_routes::routes(hashtag_service))
        .merge(provinces_routes::routes(province_service))
        .merge(destination_types_routes::routes(destination_type_service))
        .merge(poi_types_routes::routes(poi_type_service))
        .merge(pois_routes::routes(poi_service))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Log system info
    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations automatically
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Register and verify every feature's conversion rules up front
    let mapper = build_mapper()?;
    tracing::info!("Mapping registry verified");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    let app = Router::new()
        .merge(swagger)
        .merge(api_routes(pool, mapper))
        .merge(health_route)
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(65535)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
