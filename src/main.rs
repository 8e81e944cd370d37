use std::sync::Arc;

use actix_web::{web::Data, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::info;

use nuclear_chat_relay::config::Config;
use nuclear_chat_relay::model::OpenAiModel;
use nuclear_chat_relay::{app, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting nuclear chat relay");

    let config = Config::from_env().context("failed to load configuration")?;
    info!("Loaded configuration: {:?}", config);

    // Built once and shared read-only by every worker
    let model = OpenAiModel::new(&config).context("failed to build completion client")?;
    let app_state = Data::new(AppState::new(Arc::new(model)));

    let bind = (config.host.clone(), config.port);
    info!("Listening on {}:{}", bind.0, bind.1);

    HttpServer::new(move || app(app_state.clone()))
        .bind(bind)
        .context("failed to bind listener")?
        .run()
        .await?;

    Ok(())
}
