use actix_session::Session;
use serde::Serialize;

/// Identity stored in the cookie session after a successful sign-in.
#[derive(Debug, Clone, Serialize)]
pub struct SessionUser {
    pub user_id: i64,
    pub email: String,
}

pub fn current_user(session: &Session) -> Option<SessionUser> {
    let user_id = session.get::<i64>("user_id").unwrap_or(None)?;
    let email = session.get::<String>("email").unwrap_or(None)?;
    Some(SessionUser { user_id, email })
}

/// Establish the session for a signed-in user.
pub fn sign_in(session: &Session, user_id: i64, email: &str) {
    let _ = session.insert("user_id", user_id);
    let _ = session.insert("email", email);
}

/// Drop all session state, signing the user out.
pub fn sign_out(session: &Session) {
    session.purge();
}
