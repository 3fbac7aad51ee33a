/*! Branded ID types for type-safe entity references. */

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Logical window identifier, chosen by the client at creation time.
///
/// Opaque to the host. Must be unique among the live windows of one running
/// application instance - every command and close notification is keyed by
/// it, so a reused id would silently target the wrong window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS, Display, From, Into)]
#[ts(export)]
pub struct WindowId(pub String);

impl WindowId {
  /// Borrow the raw string form.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for WindowId {
  fn from(id: &str) -> Self {
    Self(id.to_owned())
  }
}
