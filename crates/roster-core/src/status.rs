//! Processing status of a registered person.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Where a person currently is in processing.
///
/// The wire and storage form is the SCREAMING_SNAKE_CASE literal
/// (`"IN_PROGRESS"`), shared by serde and strum.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PersonStatus {
  Success,
  Fail,
  #[default]
  Pending,
  InProgress,
  WaitingForCode,
}

impl PersonStatus {
  /// The literal stored in the `status` column.
  pub fn as_str(self) -> &'static str { self.into() }

  /// Listing priority; lower ranks are listed first.
  pub fn list_rank(self) -> u8 {
    match self {
      PersonStatus::Fail => 0,
      PersonStatus::Success => 1,
      PersonStatus::Pending => 2,
      PersonStatus::InProgress => 3,
      PersonStatus::WaitingForCode => 4,
    }
  }

  /// CSS background color used when rendering a row in this status.
  pub fn row_color(self) -> &'static str {
    match self {
      PersonStatus::Success => "green",
      PersonStatus::Pending => "yellow",
      PersonStatus::InProgress => "blue",
      PersonStatus::WaitingForCode => "orange",
      PersonStatus::Fail => "red",
    }
  }
}
