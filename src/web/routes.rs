use actix_web::{error, web, HttpRequest};
use log::warn;

use crate::error::RelayError;
use crate::web::handlers;

/// Largest accepted `/chat` body.
pub const MAX_CHAT_BODY_BYTES: usize = 256 * 1024;

// Any body that fails to parse, whatever the content type, becomes InvalidInput
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_CHAT_BODY_BYTES)
        .content_type_required(false)
        .error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
            warn!("Rejected chat body: {}", err);
            RelayError::InvalidInput(err.to_string()).into()
        })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/chat")
            .app_data(json_config())
            .route(web::post().to(handlers::chat)),
    )
    .route("/health", web::get().to(handlers::health_check));
}
