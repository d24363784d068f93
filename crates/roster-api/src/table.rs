//! Handler for `GET /table`: a static HTML table of sample rows.
//!
//! Rendering is a pure function of the fixed rows below; there is no store
//! access.

use std::{fmt::Write as _, str::FromStr as _};

use axum::response::Html;
use roster_core::status::PersonStatus;

/// One row of the sample table. `status` is a free-form literal; anything
/// that is not a [`PersonStatus`] renders without a background color.
#[derive(Debug, Clone, Copy)]
pub struct MockRow {
  pub first_name: &'static str,
  pub last_name:  &'static str,
  pub id_number:  &'static str,
  pub status:     &'static str,
  pub last_log:   &'static str,
}

pub const MOCK_ROWS: [MockRow; 7] = [
  MockRow {
    first_name: "John",
    last_name:  "Doe",
    id_number:  "123",
    status:     "SUCCESS",
    last_log:   "2022-02-24 15:30:00",
  },
  MockRow {
    first_name: "Jane",
    last_name:  "Doe",
    id_number:  "456",
    status:     "PENDING",
    last_log:   "2022-02-23 10:15:00",
  },
  MockRow {
    first_name: "Bob",
    last_name:  "Smith",
    id_number:  "789",
    status:     "IN_PROGRESS",
    last_log:   "2022-02-22 08:00:00",
  },
  MockRow {
    first_name: "Alice",
    last_name:  "Jones",
    id_number:  "234",
    status:     "WAITING_FOR_CODE",
    last_log:   "2022-02-21 13:45:00",
  },
  MockRow {
    first_name: "Sam",
    last_name:  "Brown",
    id_number:  "567",
    status:     "IN_PROGRESS",
    last_log:   "2022-02-20 18:00:00",
  },
  MockRow {
    first_name: "Tom",
    last_name:  "Green",
    id_number:  "890",
    status:     "FAIL",
    last_log:   "2022-02-19 09:30:00",
  },
  MockRow {
    first_name: "Sara",
    last_name:  "Lee",
    id_number:  "123",
    status:     "IN_PROGRESS",
    last_log:   "2022-02-18 11:00:00",
  },
];

/// Background color for a status literal, if it names a known status.
pub fn row_color(status: &str) -> Option<&'static str> {
  PersonStatus::from_str(status).ok().map(PersonStatus::row_color)
}

/// Render `rows` as a single-line HTML `<table>`.
pub fn render_table(rows: &[MockRow]) -> String {
  let mut html = String::from("<table>");
  for row in rows {
    match row_color(row.status) {
      Some(color) => {
        let _ = write!(html, "<tr style='background-color: {color};'>");
      }
      None => html.push_str("<tr>"),
    }
    for cell in [
      row.first_name,
      row.last_name,
      row.id_number,
      row.status,
      row.last_log,
    ] {
      let _ = write!(html, "<td>{cell}</td>");
    }
    html.push_str("</tr>");
  }
  html.push_str("</table>");
  html
}

/// Render the fixed sample rows.
pub fn render_mock_table() -> String { render_table(&MOCK_ROWS) }

/// `GET /table`
pub async fn handler() -> Html<String> { Html(render_mock_table()) }
