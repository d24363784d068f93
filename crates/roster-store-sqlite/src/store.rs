//! [`SqliteStore`] — the SQLite implementation of [`PersonStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::{OptionalExtension as _, ffi};

use roster_core::{
  person::{NewPerson, Person},
  status::PersonStatus,
  store::{PersonQuery, PersonStore},
};

use crate::{
  Error, Result,
  encode::{RawPerson, contains_pattern, encode_dt, status_rank_sql},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A person registry backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Every
/// operation borrows the connection inside one `call` closure, so it is held
/// for exactly that operation and handed back on every exit path.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    tracing::debug!("schema initialised");
    Ok(())
  }

  #[cfg(test)]
  pub(crate) fn conn_for_tests(&self) -> &tokio_rusqlite::Connection { &self.conn }

  /// Names of the tables present in the database, sorted.
  #[cfg(test)]
  pub(crate) async fn table_names(&self) -> Result<Vec<String>> {
    let names = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT name FROM sqlite_master
           WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
           ORDER BY name",
        )?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(names)
  }
}

/// Insert a `people` row, returning its rowid.
///
/// Returns `Ok(None)` when the UNIQUE constraint on `id_number` rejects the
/// row, which happens when another writer on the same file inserted it after
/// our existence check.
pub(crate) fn insert_person(
  conn:     &rusqlite::Connection,
  row:      &NewPerson,
  status:   &str,
  last_log: &str,
) -> rusqlite::Result<Option<i64>> {
  let inserted = conn.execute(
    "INSERT INTO people (first_name, last_name, id_number, status, last_log)
     VALUES (?1, ?2, ?3, ?4, ?5)",
    rusqlite::params![
      row.first_name,
      row.last_name,
      row.id_number,
      status,
      last_log,
    ],
  );

  match inserted {
    Ok(_) => Ok(Some(conn.last_insert_rowid())),
    Err(rusqlite::Error::SqliteFailure(e, _))
      if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
    {
      Ok(None)
    }
    Err(e) => Err(e),
  }
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = Error;

  async fn create_person(&self, input: NewPerson) -> Result<Person> {
    let status   = PersonStatus::default();
    let last_log = Utc::now();

    let status_str   = status.as_str();
    let last_log_str = encode_dt(last_log);
    let row          = input.clone();

    // `None` means the id number is already taken.
    let id: Option<i64> = self
      .conn
      .call(move |conn| {
        let taken = conn
          .query_row(
            "SELECT 1 FROM people WHERE id_number = ?1",
            rusqlite::params![row.id_number],
            |_| Ok(()),
          )
          .optional()?
          .is_some();

        if taken {
          return Ok(None);
        }

        insert_person(conn, &row, status_str, &last_log_str).map_err(Into::into)
      })
      .await?;

    let Some(id) = id else {
      return Err(roster_core::Error::DuplicateIdNumber(input.id_number).into());
    };

    Ok(Person {
      id,
      first_name: input.first_name,
      last_name: input.last_name,
      id_number: input.id_number,
      status,
      last_log,
    })
  }

  async fn list_people(&self, query: &PersonQuery) -> Result<Vec<Person>> {
    let status_str = query.status.map(PersonStatus::as_str);
    let pattern    = query
      .search
      .as_deref()
      .filter(|s| !s.is_empty())
      .map(contains_pattern);

    let sql = format!(
      "SELECT {columns} FROM people
       WHERE (?1 IS NULL OR status = ?1)
         AND (?2 IS NULL
              OR first_name LIKE ?2 ESCAPE '\\'
              OR last_name  LIKE ?2 ESCAPE '\\')
       ORDER BY {rank}, id",
      columns = RawPerson::COLUMNS,
      rank = status_rank_sql(),
    );

    let raws: Vec<RawPerson> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![status_str, pattern], RawPerson::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPerson::into_person).collect()
  }
}
