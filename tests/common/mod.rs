//! Shared test infrastructure — temporary SQLite databases with the schema
//! applied, matching what `main` does at startup.

use liftlog::db::{self, DbPool};
use tempfile::TempDir;

pub const TEST_EMAIL: &str = "test@example.com";
pub const TEST_PASSWORD: &str = "password123";

/// Create a pooled connection to a fresh database in a temp directory.
///
/// Returns (TempDir, DbPool); the TempDir must be kept alive for the pool to
/// remain valid.
pub fn setup_test_pool() -> (TempDir, DbPool) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let pool = db::init_pool(db_path.to_str().expect("temp path is valid UTF-8"));
    db::run_migrations(&pool);
    (dir, pool)
}
