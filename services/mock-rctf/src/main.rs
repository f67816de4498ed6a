use common_obs::ObsInit;
use mock_rctf::config::MockRctfConfig;
use mock_rctf::{build_router, AppState, SERVICE_NAME};
use tokio::net::TcpListener;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn build_sha() -> &'static str {
    option_env!("BUILD_SHA").unwrap_or("unknown")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ObsInit::init(SERVICE_NAME)?;

    let config = MockRctfConfig::default();
    let listener = TcpListener::bind(config.listen_target()).await?;
    let addr = listener.local_addr()?;
    tracing::info!(
        event = "service_start",
        service = SERVICE_NAME,
        version = VERSION,
        build_sha = build_sha(),
        listen_addr = %addr,
        "starting service"
    );

    let app = build_router(AppState::new(config.identity));
    axum::serve(listener, app.into_make_service()).await?;

    tracing::info!(event = "service_stop", service = SERVICE_NAME);

    Ok(())
}
