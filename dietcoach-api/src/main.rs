use std::{error::Error, sync::Arc};

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use dietcoach_api::{config::Config, AppState};
use dietcoach_session::identity::{self, IdentityConfig};
use log::{info, warn};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    let config = Config::from_env()?;
    info!("Loaded configuration: {:?}", config);

    match identity::init(IdentityConfig::from_env()) {
        Ok(client) => info!(
            "Identity provider configured, profiles stored in {}",
            client.database_path()
        ),
        Err(e) => warn!("Identity provider unavailable: {}", e),
    }

    let generator = dietcoach_client::create_generator(
        config.generation_url.clone(),
        config.api_key.clone(),
        config.generation_timeout,
    )?;
    let state = web::Data::new(AppState::new(Arc::new(generator)));

    info!("Listening on {}:{}", config.bind_address, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .configure(dietcoach_api::configure)
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
