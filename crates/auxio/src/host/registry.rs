/*!
Handle registry - the host's source of truth for live auxiliary windows.

All fields are private. Mutations go through methods that keep the one
invariant: at most one live entry per `WindowId`. Removal hands the handle
back out exactly once, which is what lets callers deliver the close
notification exactly once regardless of which side initiated the close.
*/

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use crate::platform::NativeWindow;
use crate::types::WindowId;

#[derive(Default)]
pub(crate) struct HandleRegistry {
  windows: HashMap<WindowId, Arc<dyn NativeWindow>>,
}

impl HandleRegistry {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Insert a newly bound window. Refuses to replace a live entry - a
  /// silent overwrite would orphan the previous handle's close wiring.
  /// Returns false when `id` is already live.
  pub(crate) fn insert(&mut self, id: WindowId, handle: Arc<dyn NativeWindow>) -> bool {
    match self.windows.entry(id) {
      Entry::Occupied(_) => false,
      Entry::Vacant(slot) => {
        slot.insert(handle);
        true
      }
    }
  }

  /// Idempotent removal. Returns `Some` exactly once per registered
  /// window; used both by the close observer and for forced teardown.
  pub(crate) fn remove(&mut self, id: &WindowId) -> Option<Arc<dyn NativeWindow>> {
    self.windows.remove(id)
  }

  /// Clone of the native handle for `id`. Callers drop the registry lock
  /// before touching the handle - native calls can fire the close
  /// observer, which re-enters the registry.
  pub(crate) fn handle(&self, id: &WindowId) -> Option<Arc<dyn NativeWindow>> {
    self.windows.get(id).map(Arc::clone)
  }

  pub(crate) fn contains(&self, id: &WindowId) -> bool {
    self.windows.contains_key(id)
  }

  pub(crate) fn ids(&self) -> Vec<WindowId> {
    self.windows.keys().cloned().collect()
  }
}
