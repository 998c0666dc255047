pub mod auth_handlers;
pub mod exercise_handlers;

use actix_web::{HttpResponse, web};

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Route table, shared between `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/signup", web::post().to(auth_handlers::sign_up))
        .route("/auth/signin", web::post().to(auth_handlers::sign_in))
        .route("/auth/signout", web::post().to(auth_handlers::sign_out))
        .route("/auth/me", web::get().to(auth_handlers::me))
        .route("/auth/reset", web::post().to(auth_handlers::reset_password))
        .route("/auth/reset/confirm", web::post().to(auth_handlers::reset_confirm))
        .route("/exercises", web::get().to(exercise_handlers::list))
        .route("/exercises/{id}", web::get().to(exercise_handlers::detail))
        .route("/health", web::get().to(health));
}
