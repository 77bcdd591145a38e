use commute_server::config::ServerConfig;
use commute_server::planner::PlannerConfig;
use commute_server::store::{CacheConfig, InMemoryConnectionStore};
use commute_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().expect("Invalid server configuration");

    // Load the network (fail fast if unavailable)
    let network = InMemoryConnectionStore::from_json_file(&config.network_path)
        .expect("Failed to load network");
    info!(
        path = %config.network_path.display(),
        stations = network.stations().len(),
        connections = network.connection_count(),
        schools = network.schools().len(),
        "Loaded network"
    );

    let state = AppState::new(network, &CacheConfig::default(), PlannerConfig::default());
    let app = create_router(state);

    info!(addr = %config.addr, "Commute route finder listening");
    info!("  GET  /health          - Health check");
    info!("  GET  /api/stations    - List stations");
    info!("  GET  /api/schools     - List schools");
    info!("  GET  /api/routes      - Best routes between two stations");
    info!("  POST /api/compare     - Compare schools from one station");
    info!("  POST /api/simulate    - Simulate the commute to one school");

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
