//! Integration tests for `SqliteStore` against an in-memory database.

use roster_core::{
  person::NewPerson,
  status::PersonStatus,
  store::{PersonQuery, PersonStore},
};

use crate::{Error, SqliteStore, store::insert_person};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

/// Insert a person directly with the given status, bypassing the store's
/// default of PENDING.
async fn seed(s: &SqliteStore, first: &str, last: &str, id_number: &str, status: PersonStatus) {
  let first     = first.to_owned();
  let last      = last.to_owned();
  let id_number = id_number.to_owned();
  let status    = status.as_str();
  s.conn_for_tests()
    .call(move |conn| {
      conn.execute(
        "INSERT INTO people (first_name, last_name, id_number, status, last_log)
         VALUES (?1, ?2, ?3, ?4, '2022-02-24T15:30:00+00:00')",
        rusqlite::params![first, last, id_number, status],
      )?;
      Ok(())
    })
    .await
    .unwrap();
}

fn names(people: &[roster_core::person::Person]) -> Vec<&str> {
  people.iter().map(|p| p.first_name.as_str()).collect()
}

// ─── Schema ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn schema_creates_people_and_users_tables() {
  let s = store().await;
  let tables = s.table_names().await.unwrap();
  assert!(tables.contains(&"people".to_owned()), "tables: {tables:?}");
  assert!(tables.contains(&"users".to_owned()), "tables: {tables:?}");
}

#[tokio::test]
async fn reopening_a_file_store_keeps_rows() {
  let dir  = tempfile::tempdir().unwrap();
  let path = dir.path().join("reopen.db");

  {
    let s = SqliteStore::open(&path).await.unwrap();
    s.create_person(NewPerson::new("John", "Doe", "123")).await.unwrap();
  }

  let s = SqliteStore::open(&path).await.unwrap();
  let all = s.list_people(&PersonQuery::default()).await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].id_number, "123");
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_assigns_id_pending_status_and_timestamp() {
  let s = store().await;
  let before = chrono::Utc::now();

  let person = s
    .create_person(NewPerson::new("John", "Doe", "123"))
    .await
    .unwrap();

  assert!(person.id > 0);
  assert_eq!(person.first_name, "John");
  assert_eq!(person.last_name, "Doe");
  assert_eq!(person.id_number, "123");
  assert_eq!(person.status, PersonStatus::Pending);
  assert!(person.last_log >= before);
  assert!(person.last_log <= chrono::Utc::now());
}

#[tokio::test]
async fn created_person_matches_listed_row() {
  let s = store().await;
  let person = s
    .create_person(NewPerson::new("Jane", "Doe", "456"))
    .await
    .unwrap();

  let all = s.list_people(&PersonQuery::default()).await.unwrap();
  assert_eq!(all, vec![person]);
}

#[tokio::test]
async fn ids_are_distinct() {
  let s = store().await;
  let a = s.create_person(NewPerson::new("A", "A", "1")).await.unwrap();
  let b = s.create_person(NewPerson::new("B", "B", "2")).await.unwrap();
  assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn duplicate_id_number_is_rejected_and_nothing_is_written() {
  let s = store().await;
  s.create_person(NewPerson::new("John", "Doe", "123"))
    .await
    .unwrap();

  let err = s
    .create_person(NewPerson::new("Sara", "Lee", "123"))
    .await
    .unwrap_err();
  assert!(
    matches!(err, Error::Core(roster_core::Error::DuplicateIdNumber(ref n)) if n == "123"),
    "unexpected error: {err}"
  );
  assert!(roster_core::error::find_core_error(&err).is_some());

  let all = s.list_people(&PersonQuery::default()).await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].first_name, "John");
}

#[tokio::test]
async fn insert_reports_unique_violation_as_none() {
  let s = store().await;
  seed(&s, "John", "Doe", "123", PersonStatus::Success).await;

  let outcome = s
    .conn_for_tests()
    .call(|conn| {
      let row = NewPerson::new("Sara", "Lee", "123");
      Ok(insert_person(conn, &row, "PENDING", "2022-02-18T11:00:00+00:00"))
    })
    .await
    .unwrap();
  assert!(matches!(outcome, Ok(None)), "unexpected outcome: {outcome:?}");

  let all = s.list_people(&PersonQuery::default()).await.unwrap();
  assert_eq!(names(&all), vec!["John"]);
}

#[tokio::test]
async fn insert_returns_rowid_for_fresh_id_number() {
  let s = store().await;
  let outcome = s
    .conn_for_tests()
    .call(|conn| {
      let row = NewPerson::new("Sara", "Lee", "999");
      Ok(insert_person(conn, &row, "PENDING", "2022-02-18T11:00:00+00:00"))
    })
    .await
    .unwrap();
  assert!(matches!(outcome, Ok(Some(id)) if id > 0), "unexpected outcome: {outcome:?}");
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_empty_store() {
  let s = store().await;
  let all = s.list_people(&PersonQuery::default()).await.unwrap();
  assert!(all.is_empty());
}

#[tokio::test]
async fn list_filters_by_status() {
  let s = store().await;
  seed(&s, "John", "Doe", "123", PersonStatus::Success).await;
  seed(&s, "Tom", "Green", "890", PersonStatus::Fail).await;
  seed(&s, "Bob", "Smith", "789", PersonStatus::InProgress).await;
  seed(&s, "Ann", "Black", "111", PersonStatus::Fail).await;

  let query = PersonQuery { status: Some(PersonStatus::Fail), search: None };
  let failed = s.list_people(&query).await.unwrap();
  assert_eq!(failed.len(), 2);
  assert!(failed.iter().all(|p| p.status == PersonStatus::Fail));
}

#[tokio::test]
async fn list_search_is_case_insensitive_over_both_names() {
  let s = store().await;
  seed(&s, "John", "Doe", "123", PersonStatus::Pending).await;
  seed(&s, "Alice", "Jones", "234", PersonStatus::Pending).await;
  seed(&s, "Bob", "Smith", "789", PersonStatus::Pending).await;

  let query = PersonQuery { status: None, search: Some("jo".into()) };
  let found = s.list_people(&query).await.unwrap();
  assert_eq!(names(&found), vec!["John", "Alice"]);

  let query = PersonQuery { status: None, search: Some("SMI".into()) };
  let found = s.list_people(&query).await.unwrap();
  assert_eq!(names(&found), vec!["Bob"]);
}

#[tokio::test]
async fn list_search_treats_wildcards_literally() {
  let s = store().await;
  seed(&s, "John", "Doe", "123", PersonStatus::Pending).await;
  seed(&s, "Jo_hn", "Doe", "124", PersonStatus::Pending).await;

  let query = PersonQuery { status: None, search: Some("o_h".into()) };
  let found = s.list_people(&query).await.unwrap();
  assert_eq!(names(&found), vec!["Jo_hn"]);

  let query = PersonQuery { status: None, search: Some("%".into()) };
  assert!(s.list_people(&query).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_empty_search_matches_everything() {
  let s = store().await;
  seed(&s, "John", "Doe", "123", PersonStatus::Pending).await;
  seed(&s, "Bob", "Smith", "789", PersonStatus::Pending).await;

  let query = PersonQuery { status: None, search: Some(String::new()) };
  assert_eq!(s.list_people(&query).await.unwrap().len(), 2);
}

#[tokio::test]
async fn list_combines_filters_with_and() {
  let s = store().await;
  seed(&s, "John", "Doe", "123", PersonStatus::Fail).await;
  seed(&s, "Alice", "Jones", "234", PersonStatus::Success).await;
  seed(&s, "Tom", "Green", "890", PersonStatus::Fail).await;

  let query = PersonQuery {
    status: Some(PersonStatus::Fail),
    search: Some("jo".into()),
  };
  let found = s.list_people(&query).await.unwrap();
  assert_eq!(names(&found), vec!["John"]);
}

#[tokio::test]
async fn list_orders_by_status_rank_then_id() {
  let s = store().await;
  seed(&s, "Wait", "X", "1", PersonStatus::WaitingForCode).await;
  seed(&s, "Prog", "X", "2", PersonStatus::InProgress).await;
  seed(&s, "Pend", "X", "3", PersonStatus::Pending).await;
  seed(&s, "Succ", "X", "4", PersonStatus::Success).await;
  seed(&s, "Fail1", "X", "5", PersonStatus::Fail).await;
  seed(&s, "Fail2", "X", "6", PersonStatus::Fail).await;

  let all = s.list_people(&PersonQuery::default()).await.unwrap();
  assert_eq!(
    names(&all),
    vec!["Fail1", "Fail2", "Succ", "Pend", "Prog", "Wait"]
  );
}
