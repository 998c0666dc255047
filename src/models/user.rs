use rusqlite::{Connection, OptionalExtension, params};

/// Internal user row for authentication — includes the password hash.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub reset_token: Option<String>,
    pub reset_token_expires_ms: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
}

const SELECT_USER: &str = "\
    SELECT id, email, password_hash, display_name, \
           reset_token, reset_token_expires_ms, created_at, updated_at \
    FROM users";

fn row_to_user(row: &rusqlite::Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get("id")?,
        email: row.get("email")?,
        password_hash: row.get("password_hash")?,
        display_name: row.get("display_name")?,
        reset_token: row.get("reset_token")?,
        reset_token_expires_ms: row.get("reset_token_expires_ms")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Insert a new user and return its id. A duplicate email surfaces as a
/// `SqliteFailure` with `ErrorCode::ConstraintViolation`.
pub fn create(conn: &Connection, new_user: &NewUser) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO users (email, password_hash, display_name) VALUES (?1, ?2, ?3)",
        params![new_user.email, new_user.password_hash, new_user.display_name],
    )?;
    Ok(conn.last_insert_rowid())
}

/// True when the error is the unique-email constraint firing on `create`.
pub fn is_duplicate_email(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

pub fn find_by_email(conn: &Connection, email: &str) -> rusqlite::Result<Option<User>> {
    conn.query_row(
        &format!("{SELECT_USER} WHERE email = ?1"),
        params![email],
        row_to_user,
    )
    .optional()
}

pub fn find_by_reset_token(conn: &Connection, token: &str) -> rusqlite::Result<Option<User>> {
    conn.query_row(
        &format!("{SELECT_USER} WHERE reset_token = ?1"),
        params![token],
        row_to_user,
    )
    .optional()
}

pub fn update_password(conn: &Connection, id: i64, password_hash: &str) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE users SET password_hash = ?1, updated_at = datetime('now') WHERE id = ?2",
        params![password_hash, id],
    )?;
    Ok(())
}

pub fn set_reset_token(
    conn: &Connection,
    id: i64,
    token: &str,
    expires_ms: i64,
) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE users SET reset_token = ?1, reset_token_expires_ms = ?2, \
         updated_at = datetime('now') WHERE id = ?3",
        params![token, expires_ms, id],
    )?;
    Ok(())
}

pub fn clear_reset_token(conn: &Connection, id: i64) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE users SET reset_token = NULL, reset_token_expires_ms = NULL, \
         updated_at = datetime('now') WHERE id = ?1",
        params![id],
    )?;
    Ok(())
}
