use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::AppState;
use crate::store::dynamo::DynamoPlayerTable;
use crate::store::mongo::MongoSettings;
use crate::store::s3::S3ImageBucket;

mod config;
mod db;
mod error;
mod models;
mod routes;
mod sanitize;
mod state;
mod store;

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting roster admin API...");

    dotenvy::dotenv().ok();

    let config = config::Config::from_env();

    // Store clients are built once here and shared read-only across requests
    let aws_config = aws_config::load_from_env().await;
    let dynamo = aws_sdk_dynamodb::Client::new(&aws_config);
    let s3 = aws_sdk_s3::Client::new(&aws_config);

    let mongo = mongodb::Client::with_uri_str(&config.mongodb_uri)
        .await
        .expect("Failed to connect to settings database");
    let settings_db = mongo
        .default_database()
        .unwrap_or_else(|| mongo.database("roster_admin"));

    tracing::info!("Store clients initialized.");

    let state = AppState {
        players: Arc::new(DynamoPlayerTable::new(dynamo, config.players_table.clone())),
        images: Arc::new(S3ImageBucket::new(
            s3,
            config.images_bucket.clone(),
            config.aws_region.clone(),
        )),
        settings: Arc::new(MongoSettings::new(settings_db)),
        admin_password: config.admin_password.clone(),
    };

    let addr = SocketAddr::from((config.host, config.port));

    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
