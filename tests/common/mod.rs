use chrono::Utc;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use terravista::db::{DbPool, establish_connection_pool};
use terravista::schema::users;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Per-test SQLite database in a temp directory, migrated and cleaned up on
/// drop together with the directory.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("Non-UTF8 temp path"))
            .expect("Failed to create pool");
        let mut conn = pool.get().expect("Failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Failed to run migrations");
        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Inserts a user row directly. Foreign keys are enforced on every
/// connection, so most fixtures need at least one user first.
#[allow(dead_code)]
pub fn seed_user(pool: &DbPool, id: &str, name: &str, email: &str, role: &str) {
    let mut conn = pool.get().expect("Failed to get connection");
    diesel::insert_into(users::table)
        .values((
            users::id.eq(id),
            users::name.eq(name),
            users::email.eq(email),
            users::role.eq(role),
            users::created_at.eq(Utc::now().naive_utc()),
        ))
        .execute(&mut conn)
        .expect("Failed to seed user");
}
