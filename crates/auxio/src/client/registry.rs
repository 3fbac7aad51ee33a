/*!
Client registry - mirror of the host's handle registry, kept convergent
purely by close notifications.

All fields are private. The invariant matches the host side: at most one
live entry per `WindowId`, and removal hands the entry back out so the
removal callback can fire exactly once no matter which side initiated the
close.
*/

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::platform::NavigationRef;
use crate::types::{OptionsMap, WindowId};

use super::RemovalCallback;

/// One requested window: the navigation that spawned it, the cached
/// construction options, and the exactly-once removal callback.
pub(crate) struct ClientEntry {
  options: OptionsMap,
  nav: Box<dyn NavigationRef>,
  on_removed: RemovalCallback,
}

impl ClientEntry {
  pub(crate) fn new(
    options: OptionsMap,
    nav: Box<dyn NavigationRef>,
    on_removed: RemovalCallback,
  ) -> Self {
    Self {
      options,
      nav,
      on_removed,
    }
  }

  /// Tear down after removal from the map: close the navigation (a no-op
  /// when the native window is already gone) and fire the callback.
  /// Taking `self` by value makes a second invocation unrepresentable.
  pub(crate) fn finish(self, id: &WindowId) {
    self.nav.close();
    (self.on_removed)(id);
  }

  /// Tear down a spawn whose entry never became live. The removal
  /// callback does not fire - nothing was ever created from the caller's
  /// point of view.
  pub(crate) fn abort(self) {
    self.nav.close();
  }

  fn is_open(&self) -> bool {
    self.nav.is_open()
  }
}

#[derive(Default)]
pub(crate) struct ClientRegistry {
  windows: HashMap<WindowId, ClientEntry>,
}

impl ClientRegistry {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Insert a new entry. On duplicate the rejected entry is handed back
  /// untouched so the caller can tear its spawn down.
  pub(crate) fn insert(&mut self, id: WindowId, entry: ClientEntry) -> Result<(), ClientEntry> {
    match self.windows.entry(id) {
      Entry::Occupied(_) => Err(entry),
      Entry::Vacant(slot) => {
        slot.insert(entry);
        Ok(())
      }
    }
  }

  /// Idempotent removal. Returns `Some` exactly once per live entry.
  pub(crate) fn remove(&mut self, id: &WindowId) -> Option<ClientEntry> {
    self.windows.remove(id)
  }

  pub(crate) fn contains(&self, id: &WindowId) -> bool {
    self.windows.contains_key(id)
  }

  /// Whether the navigation for `id` still reports open. False for
  /// unknown ids.
  pub(crate) fn is_open(&self, id: &WindowId) -> bool {
    self.windows.get(id).is_some_and(ClientEntry::is_open)
  }

  pub(crate) fn options(&self, id: &WindowId) -> Option<OptionsMap> {
    self.windows.get(id).map(|entry| entry.options.clone())
  }

  /// Replace the cached options for `id`. Returns false for unknown ids.
  pub(crate) fn update_options(&mut self, id: &WindowId, options: OptionsMap) -> bool {
    match self.windows.get_mut(id) {
      Some(entry) => {
        entry.options = options;
        true
      }
      None => false,
    }
  }

  pub(crate) fn ids(&self) -> Vec<WindowId> {
    self.windows.keys().cloned().collect()
  }
}
