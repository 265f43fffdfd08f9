use hash_service::api;
use hash_service::service::hasher::HashService;
use hash_service::service::shutdown::ShutdownCoordinator;

use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "0.0.0.0:8080".parse()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" if i + 1 < args.len() => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing::info!("Starting hash service");

    let service = HashService::new();
    let coordinator = ShutdownCoordinator::new();

    let app = api::router(service, coordinator.clone());

    tracing::info!("Hash service listening on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { coordinator.terminated().await })
        .await?;

    // Reached only once the shutdown sequence signals termination;
    // returning exits the process with status 0.
    tracing::info!("Hash service stopped");
    Ok(())
}
