//! SQL schema for the Frond SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Users are provisioned out of band (CLI helper); the API only reads them.
CREATE TABLE IF NOT EXISTS users (
    user_id      TEXT PRIMARY KEY,
    email        TEXT NOT NULL UNIQUE,
    token_digest TEXT NOT NULL UNIQUE,   -- hex SHA-256 of the bearer token
    created_at   TEXT NOT NULL           -- ISO 8601 UTC; server-assigned
);

CREATE TABLE IF NOT EXISTS plants (
    plant_id   TEXT PRIMARY KEY,
    name       TEXT NOT NULL,
    kind       TEXT NOT NULL,
    owner      TEXT NOT NULL REFERENCES users(user_id),
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS plants_owner_idx ON plants(owner);

PRAGMA user_version = 1;
";
