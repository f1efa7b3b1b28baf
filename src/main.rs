use product_recommender::config::ServerConfig;
use product_recommender::handlers::global_handler;
use product_recommender::services::store::build_store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()?;
    let store = build_store(config.data_file.as_deref())?;

    let (addr, server) =
        warp::serve(global_handler(store)).try_bind_with_graceful_shutdown(config.addr, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("Failed to listen for shutdown signal: {}", e);
            }
        })?;

    log::info!("Serving product recommendations on http://{}", addr);
    server.await;
    log::info!("Server stopped");

    Ok(())
}
