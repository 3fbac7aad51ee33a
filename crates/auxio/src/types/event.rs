/*! Event types crossing the host/client boundary. */

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::WindowId;

/// Events the host delivers to the client side.
///
/// This channel is the sole source of truth for remote state changes:
/// neither side ever reads the other's registry directly, so removal is
/// idempotent on both ends to tolerate redelivery at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "event", content = "data")]
#[ts(export)]
pub enum WindowEvent {
  /// The native window for `window_id` no longer exists. Delivered once
  /// per window; after delivery the id may be reused by a new create.
  #[serde(rename = "window:closed")]
  Closed { window_id: WindowId },
}
