use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::auth::{AuthLimiters, events, messages, password, session, token, validate};
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::user;

/// Reset tokens stay valid for one hour.
const RESET_TOKEN_TTL_MS: i64 = 3_600_000;

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after_ms: Option<i64>,
}

impl AuthResponse {
    fn ok() -> Self {
        Self { success: true, message: None, error: None, retry_after_ms: None }
    }

    fn ok_with_message(message: impl Into<String>) -> Self {
        Self { success: true, message: Some(message.into()), error: None, retry_after_ms: None }
    }

    fn error(error: impl Into<String>) -> Self {
        Self { success: false, message: None, error: Some(error.into()), retry_after_ms: None }
    }

    fn rate_limited(retry_after_ms: i64) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(messages::format_auth_error(messages::RATE_LIMITED)),
            retry_after_ms: Some(retry_after_ms),
        }
    }
}

#[derive(Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub display_name: String,
}

#[derive(Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ResetRequest {
    pub email: String,
}

#[derive(Deserialize)]
pub struct ResetConfirmRequest {
    pub token: String,
    pub password: String,
}

fn validation_failure(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(AuthResponse::error(message))
}

pub async fn sign_up(
    pool: web::Data<DbPool>,
    limiters: web::Data<AuthLimiters>,
    body: web::Json<SignUpRequest>,
) -> Result<HttpResponse, AppError> {
    let email = validate::normalize_email(&body.email);

    // Rate-limit check BEFORE validation and any database access.
    if !limiters.sign_up.is_allowed(&email) {
        let wait = limiters.sign_up.remaining_ms(&email);
        events::log_auth_event("sign_up_rate_limited", Some(json!({ "email": email })));
        return Ok(HttpResponse::TooManyRequests().json(AuthResponse::rate_limited(wait)));
    }

    if let Some(msg) = validate::validate_email(&email) {
        return Ok(validation_failure(msg));
    }
    if validate::validate_password(&body.password).is_some() {
        return Ok(validation_failure(messages::format_auth_error(messages::WEAK_PASSWORD)));
    }
    if let Some(msg) = validate::validate_display_name(&body.display_name) {
        return Ok(validation_failure(msg));
    }

    let password_hash = password::hash_password(&body.password)?;
    let new_user = user::NewUser {
        email: email.clone(),
        password_hash,
        display_name: body.display_name.trim().to_string(),
    };

    let conn = pool.get()?;
    match user::create(&conn, &new_user) {
        Ok(id) => {
            events::log_auth_event("sign_up_success", Some(json!({ "user_id": id })));
            Ok(HttpResponse::Created().json(AuthResponse::ok_with_message("Account created.")))
        }
        Err(e) if user::is_duplicate_email(&e) => {
            events::log_auth_event("sign_up_duplicate", Some(json!({ "email": email })));
            Ok(HttpResponse::Conflict().json(AuthResponse::error(
                messages::format_auth_error(messages::EMAIL_TAKEN),
            )))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn sign_in(
    pool: web::Data<DbPool>,
    session: Session,
    limiters: web::Data<AuthLimiters>,
    body: web::Json<SignInRequest>,
) -> Result<HttpResponse, AppError> {
    let email = validate::normalize_email(&body.email);

    if !limiters.sign_in.is_allowed(&email) {
        let wait = limiters.sign_in.remaining_ms(&email);
        events::log_auth_event("sign_in_rate_limited", Some(json!({ "email": email })));
        return Ok(HttpResponse::TooManyRequests().json(AuthResponse::rate_limited(wait)));
    }

    let conn = pool.get()?;
    let found = user::find_by_email(&conn, &email)?;

    // Same response for unknown email and wrong password.
    let invalid = || {
        events::log_auth_event("sign_in_failure", Some(json!({ "email": email })));
        HttpResponse::Unauthorized().json(AuthResponse::error(
            messages::format_auth_error(messages::INVALID_CREDENTIALS),
        ))
    };

    match found {
        Some(u) => {
            if password::verify_password(&body.password, &u.password_hash)? {
                session::sign_in(&session, u.id, &u.email);
                events::log_auth_event("sign_in_success", Some(json!({ "user_id": u.id })));
                Ok(HttpResponse::Ok().json(AuthResponse::ok()))
            } else {
                Ok(invalid())
            }
        }
        None => Ok(invalid()),
    }
}

pub async fn sign_out(session: Session) -> Result<HttpResponse, AppError> {
    session::sign_out(&session);
    events::log_auth_event("sign_out", None);
    Ok(HttpResponse::Ok().json(AuthResponse::ok()))
}

pub async fn me(session: Session) -> Result<HttpResponse, AppError> {
    match session::current_user(&session) {
        Some(identity) => Ok(HttpResponse::Ok().json(identity)),
        None => Ok(HttpResponse::Unauthorized().json(AuthResponse::error("Not signed in"))),
    }
}

/// Request a password reset. Always reports success so callers cannot probe
/// which emails have accounts.
pub async fn reset_password(
    pool: web::Data<DbPool>,
    limiters: web::Data<AuthLimiters>,
    body: web::Json<ResetRequest>,
) -> Result<HttpResponse, AppError> {
    let email = validate::normalize_email(&body.email);

    if !limiters.reset.is_allowed(&email) {
        let wait = limiters.reset.remaining_ms(&email);
        events::log_auth_event("reset_rate_limited", Some(json!({ "email": email })));
        return Ok(HttpResponse::TooManyRequests().json(AuthResponse::rate_limited(wait)));
    }

    if let Some(msg) = validate::validate_email(&email) {
        return Ok(validation_failure(msg));
    }

    let conn = pool.get()?;
    if let Some(u) = user::find_by_email(&conn, &email)? {
        let reset_token = token::generate_token();
        let expires_ms = Utc::now().timestamp_millis() + RESET_TOKEN_TTL_MS;
        user::set_reset_token(&conn, u.id, &reset_token, expires_ms)?;
        events::log_auth_event("reset_requested", Some(json!({ "user_id": u.id })));
    }

    Ok(HttpResponse::Ok().json(AuthResponse::ok_with_message(
        "If an account exists for this email, a reset link has been sent.",
    )))
}

pub async fn reset_confirm(
    pool: web::Data<DbPool>,
    body: web::Json<ResetConfirmRequest>,
) -> Result<HttpResponse, AppError> {
    if validate::validate_password(&body.password).is_some() {
        return Ok(validation_failure(messages::format_auth_error(messages::WEAK_PASSWORD)));
    }

    let conn = pool.get()?;
    let found = user::find_by_reset_token(&conn, &body.token)?;

    let invalid = || {
        HttpResponse::BadRequest().json(AuthResponse::error(
            messages::format_auth_error(messages::RESET_TOKEN_INVALID),
        ))
    };

    let Some(u) = found else {
        return Ok(invalid());
    };

    let now = Utc::now().timestamp_millis();
    if u.reset_token_expires_ms.is_none_or(|exp| exp < now) {
        return Ok(invalid());
    }

    let password_hash = password::hash_password(&body.password)?;
    user::update_password(&conn, u.id, &password_hash)?;
    user::clear_reset_token(&conn, u.id)?;
    events::log_auth_event("reset_completed", Some(json!({ "user_id": u.id })));

    Ok(HttpResponse::Ok().json(AuthResponse::ok_with_message("Password updated.")))
}
