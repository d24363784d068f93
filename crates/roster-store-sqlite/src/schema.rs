//! SQL schema for the roster SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! schema revision; later migrations will be gated on it.

/// Full schema DDL; idempotent thanks to `CREATE ... IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Rows are only ever inserted; nothing updates or deletes them.
CREATE TABLE IF NOT EXISTS people (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name  TEXT NOT NULL,
    last_name   TEXT NOT NULL,
    id_number   TEXT NOT NULL UNIQUE,
    status      TEXT NOT NULL DEFAULT 'PENDING'
                CHECK (status IN ('SUCCESS', 'FAIL', 'PENDING',
                                  'IN_PROGRESS', 'WAITING_FOR_CODE')),
    last_log    TEXT NOT NULL    -- ISO 8601 UTC; server-assigned
);

-- Declared for compatibility; no operation reads or writes it.
CREATE TABLE IF NOT EXISTS users (
    id                    INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name            TEXT,
    last_name             TEXT,
    identification_number TEXT,
    status                INTEGER NOT NULL DEFAULT 0,
    last_log              TEXT
);

CREATE INDEX IF NOT EXISTS people_status_idx ON people(status);

PRAGMA user_version = 1;
";
