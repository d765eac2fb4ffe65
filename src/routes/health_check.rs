use actix_web::HttpResponse;

/// Liveness probe. No inputs, no state: if this handler runs at all, the
/// process is up, so the body is always the same.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}
