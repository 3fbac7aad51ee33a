/*! Spawn configuration smuggled through the generic navigation request. */

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::WindowId;

/// Window-construction options: string keys to arbitrary JSON values.
///
/// Opaque at this layer. The core only carries it from the client to the
/// native window-construction primitive; validation of individual keys
/// belongs to that collaborator, not to the protocol.
pub type OptionsMap = serde_json::Map<String, serde_json::Value>;

/// The `{id, options}` payload that bootstraps a new auxiliary window.
///
/// Travels base64-encoded inside the feature string of the spawn request
/// (see [`crate::codec`]), since the generic spawn primitive carries no
/// structured data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpawnConfig {
  pub id: WindowId,
  #[ts(type = "Record<string, unknown>")]
  pub options: OptionsMap,
}
