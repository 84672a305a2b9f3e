//! SQL schema for the scheduler SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Listing order relies on the implicit `rowid`, which grows with every
/// insert, so every `find_all` sorts by it.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS offices (
    office_id   TEXT PRIMARY KEY,
    name        TEXT NOT NULL CHECK (length(name) BETWEEN 1 AND 100),
    time_zone   TEXT NOT NULL,   -- IANA name, e.g. 'Europe/Moscow'
    created_at  TEXT NOT NULL    -- ISO 8601 UTC; server-assigned
);

CREATE TABLE IF NOT EXISTS clients (
    client_id   TEXT PRIMARY KEY,
    office_id   TEXT NOT NULL REFERENCES offices(office_id),
    name        TEXT NOT NULL CHECK (length(name) BETWEEN 1 AND 100),
    created_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS office_groups (
    group_id    TEXT PRIMARY KEY,
    office_id   TEXT NOT NULL REFERENCES offices(office_id),
    name        TEXT NOT NULL CHECK (length(name) BETWEEN 1 AND 100),
    created_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS subjects (
    subject_id        TEXT PRIMARY KEY,
    office_id         TEXT NOT NULL REFERENCES offices(office_id),
    group_id          TEXT NOT NULL REFERENCES office_groups(group_id),
    name              TEXT NOT NULL CHECK (length(name) BETWEEN 1 AND 100),
    periodicity_type  TEXT NOT NULL,   -- 'daily' | 'weekly' | 'biweekly' | 'monthly'
    periodicity_json  TEXT NOT NULL,   -- full tagged JSON of the Periodicity
    time_start        TEXT NOT NULL,   -- HH:MM:SS
    time_end          TEXT NOT NULL,   -- HH:MM:SS, strictly after time_start
    required_teachers INTEGER NOT NULL CHECK (required_teachers BETWEEN 1 AND 3),
    created_at        TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS clients_office_idx  ON clients(office_id);
CREATE INDEX IF NOT EXISTS groups_office_idx   ON office_groups(office_id);
CREATE INDEX IF NOT EXISTS subjects_office_idx ON subjects(office_id);
CREATE INDEX IF NOT EXISTS subjects_group_idx  ON subjects(group_id);

PRAGMA user_version = 1;
";
