//! SQL schema for the CeritaKita SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS couples (
    couple_id          TEXT PRIMARY KEY,
    code               TEXT NOT NULL UNIQUE,
    participant_a_name TEXT NOT NULL,
    participant_b_name TEXT,             -- NULL until the partner joins
    created_at         TEXT NOT NULL,
    updated_at         TEXT NOT NULL
);

-- Moods and quotes are strictly append-only.
-- No UPDATE or DELETE is ever issued against these tables.
CREATE TABLE IF NOT EXISTS moods (
    mood_id    TEXT PRIMARY KEY,
    couple_id  TEXT NOT NULL REFERENCES couples(couple_id),
    slot       TEXT NOT NULL,    -- 'a' | 'b'
    mood       TEXT NOT NULL,    -- kebab-case Mood name
    note       TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL     -- fixed-width RFC 3339 UTC; server-assigned
);

CREATE TABLE IF NOT EXISTS quotes (
    quote_id   TEXT PRIMARY KEY,
    couple_id  TEXT NOT NULL REFERENCES couples(couple_id),
    text       TEXT NOT NULL,
    author     TEXT NOT NULL,
    added_by   TEXT NOT NULL,    -- 'a' | 'b'
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS moods_owner_idx  ON moods(couple_id, slot, created_at);
CREATE INDEX IF NOT EXISTS quotes_owner_idx ON quotes(couple_id, created_at);

PRAGMA user_version = 1;
";
