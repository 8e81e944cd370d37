use actix_web::{web, HttpResponse, Responder};
use log::{debug, error, info};
use serde_json::json;
use uuid::Uuid;

use crate::error::Result;
use crate::model::build_prompt;
use crate::web::models::{ChatRequest, ChatResponse};
use crate::AppState;

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Chat API endpoint
pub async fn chat(
    data: web::Data<AppState>,
    req: web::Json<ChatRequest>,
) -> Result<HttpResponse> {
    let request_id = Uuid::new_v4();
    let ChatRequest { message } = req.into_inner();

    info!("Chat request {} ({} characters)", request_id, message.len());
    debug!("Chat request {} message: {}", request_id, message);

    let prompt = build_prompt(&message);

    let reply = match data.model.complete(&prompt).await.and_then(|c| c.into_first_reply()) {
        Ok(reply) => reply,
        Err(e) => {
            error!("Chat request {} failed: {}", request_id, e);
            return Err(e);
        }
    };

    info!("Chat request {} answered ({} characters)", request_id, reply.len());
    Ok(HttpResponse::Ok().json(ChatResponse { reply }))
}
