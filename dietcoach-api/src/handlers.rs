use actix_web::{get, post, web, HttpResponse};
use dietcoach_model::advice::{AdviceRequest, AdviceResponse};
use log::{info, warn};
use serde_json::json;

use crate::{error::ApiError, plan, requester, resolver, AppState};

#[get("/health")]
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

#[post("/api/generate-plan")]
async fn generate_plan(
    state: web::Data<AppState>,
    request: web::Json<AdviceRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    let metrics = request.validated_metrics().map_err(|e| {
        warn!("Rejecting request: {}", e);
        e
    })?;
    let targets = metrics.targets()?;

    if !request.is_chat() {
        info!("Generating plan for BMI category {}", metrics.bmi_category());
        return Ok(HttpResponse::Ok().json(plan::generate_plan(&metrics, &targets)));
    }

    let response = match requester::request_advice(
        state.generator.as_ref(),
        &metrics,
        &targets,
        &request.user_input,
        &request.username,
    )
    .await
    {
        Ok(response) => response,
        Err(e) => {
            warn!("Falling back to rule-based advice: {}", e);
            resolver::resolve(&metrics, &targets, &request.user_input, &request.username)
        }
    };

    Ok(HttpResponse::Ok().json(AdviceResponse::Response(response)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(generate_plan);
}
