pub mod config;
pub mod error;
pub mod handlers;
pub mod plan;
pub mod requester;
pub mod resolver;

use std::sync::Arc;

use actix_web::{error::JsonPayloadError, web, HttpRequest};
use dietcoach_client::Generator;
use log::error;

use crate::error::ApiError;

pub struct AppState {
    pub generator: Arc<dyn Generator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self { generator }
    }
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    error!("Error: {}", err);
    ApiError::Unhandled(err.to_string()).into()
}

/// Registers the API routes along with the JSON body settings they rely on.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(json_error),
    );
    handlers::configure(cfg);
}
