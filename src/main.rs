mod model;
mod server;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    scheduler::checkout_reconciliation,
    service::{checkout::CheckoutClient, media::MediaSigner},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;

    let checkout = CheckoutClient::new(
        http_client.clone(),
        config.checkout_api_base.clone(),
        config.checkout_secret_key.clone(),
    );
    let media_signer = MediaSigner::new(
        config.media_cloud_name.clone(),
        config.media_api_key.clone(),
        config.media_api_secret.clone(),
    );

    // Create the bootstrap admin if this is a first boot
    startup::ensure_admin(&db, &config).await?;

    tracing::info!("Starting server");

    // Start checkout reconciliation scheduler
    let scheduler_db = db.clone();
    let scheduler_checkout = checkout.clone();
    tokio::spawn(async move {
        if let Err(e) =
            checkout_reconciliation::start_scheduler(scheduler_db, scheduler_checkout).await
        {
            tracing::error!("Checkout reconciliation scheduler error: {}", e);
        }
    });

    let app = server::router::router()
        .with_state(AppState::new(
            db,
            http_client,
            checkout,
            media_signer,
            config.app_url.clone(),
        ))
        .layer(session_layer)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
