/*!
Unprivileged client side - requests windows, never holds a real handle.

# Module structure

- `mod.rs` - `WindowClient` instance, creation, close-notification pumping
- `registry.rs` - client registry mirroring the host's handle registry
- `window.rs` - `ClientWindow`, the per-window user-facing handle
*/

mod registry;
mod window;

pub use window::ClientWindow;

use std::sync::Arc;

use async_broadcast::{Receiver, TryRecvError};
use parking_lot::{Mutex, RwLock};

use registry::{ClientEntry, ClientRegistry};

use crate::codec;
use crate::host::{CommandSink, WindowCommand};
use crate::platform::WindowOpener;
use crate::types::{AuxioError, AuxioResult, OptionsMap, SpawnConfig, WindowEvent, WindowId};

/// Callback invoked exactly once when a window's entry is removed, whether
/// the close started locally or on the host side.
pub type RemovalCallback = Box<dyn FnOnce(&WindowId) + Send>;

/// Client instance - owns the client registry and the subscription to the
/// host's close notifications.
///
/// Construct one per display surface and inject it. Clone is cheap
/// (Arc bumps).
pub struct WindowClient {
  inner: Arc<ClientInner>,
}

struct ClientInner {
  registry: RwLock<ClientRegistry>,
  commands: Arc<dyn CommandSink>,
  opener: Arc<dyn WindowOpener>,
  events: Mutex<Receiver<WindowEvent>>,
}

impl Clone for WindowClient {
  fn clone(&self) -> Self {
    Self {
      inner: Arc::clone(&self.inner),
    }
  }
}

impl std::fmt::Debug for WindowClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WindowClient").finish_non_exhaustive()
  }
}

impl WindowClient {
  /// Wire a client to its host-side collaborators: the spawn primitive,
  /// the command sink, and a subscription to the close notifications.
  pub fn new(
    opener: Arc<dyn WindowOpener>,
    commands: Arc<dyn CommandSink>,
    events: Receiver<WindowEvent>,
  ) -> Self {
    Self {
      inner: Arc::new(ClientInner {
        registry: RwLock::new(ClientRegistry::new()),
        commands,
        opener,
        events: Mutex::new(events),
      }),
    }
  }

  /// Request a new auxiliary window.
  ///
  /// Fails synchronously with [`AuxioError::DuplicateId`] when `id` is
  /// already live, without mutating the registry - ids are caller-chosen,
  /// so a collision is a programming error, not a runtime race.
  pub fn create(
    &self,
    id: impl Into<WindowId>,
    options: OptionsMap,
    on_removed: RemovalCallback,
  ) -> AuxioResult<ClientWindow> {
    let id = id.into();
    if self.inner.registry.read().contains(&id) {
      return Err(AuxioError::DuplicateId(id));
    }

    let features = codec::encode(&SpawnConfig {
      id: id.clone(),
      options: options.clone(),
    });
    let nav = self
      .inner
      .opener
      .open(codec::BLANK_TARGET, "_blank", &features)?;

    let entry = ClientEntry::new(options, nav, on_removed);
    if let Err(entry) = self.inner.registry.write().insert(id.clone(), entry) {
      // Lost a create/create race after the pre-check; tear the extra
      // spawn down without firing its removal callback.
      entry.abort();
      return Err(AuxioError::DuplicateId(id));
    }

    log::debug!("created client window {id}");
    Ok(ClientWindow::new(id, self.clone()))
  }

  /// Close `id` and drop its entry. Safe to call when already closed -
  /// both the local path and the remote notification funnel into the same
  /// removal, so whichever arrives second is a no-op.
  pub fn close(&self, id: &WindowId) {
    let Some(entry) = self.inner.registry.write().remove(id) else {
      log::debug!("close for unknown window {id}, ignoring");
      return;
    };
    // Lock released before the native close: it can synchronously bounce
    // a Closed notification back through the host.
    entry.finish(id);
  }

  /// Deliver any queued close notifications from the host.
  ///
  /// Call this from the surface's event loop. Per-id ordering holds
  /// because notifications are keyed on the id itself, never on creation
  /// order.
  pub fn pump_events(&self) {
    loop {
      let next = self.inner.events.lock().try_recv();
      match next {
        Ok(WindowEvent::Closed { window_id }) => {
          log::debug!("host reports {window_id} closed");
          self.close(&window_id);
        }
        Err(TryRecvError::Overflowed(missed)) => {
          log::error!("close-notification channel overflowed, {missed} events lost");
        }
        Err(TryRecvError::Empty | TryRecvError::Closed) => break,
      }
    }
  }

  /// Whether the navigation for `id` still reports open.
  pub fn is_open(&self, id: &WindowId) -> bool {
    self.inner.registry.read().is_open(id)
  }

  /// Whether an entry for `id` is live.
  pub fn contains(&self, id: &WindowId) -> bool {
    self.inner.registry.read().contains(id)
  }

  /// Ids of all live entries.
  pub fn window_ids(&self) -> Vec<WindowId> {
    self.inner.registry.read().ids()
  }

  /// Cached construction options for `id`.
  pub fn options(&self, id: &WindowId) -> Option<OptionsMap> {
    self.inner.registry.read().options(id)
  }

  /// Replace the locally cached options for `id`.
  ///
  /// Remote propagation is a declared extension point: the stub command is
  /// sent but the host applies nothing, so live windows keep their
  /// original construction options.
  pub fn update_options(&self, id: &WindowId, options: OptionsMap) {
    if !self
      .inner
      .registry
      .write()
      .update_options(id, options.clone())
    {
      log::warn!("update_options for unknown window {id}");
      return;
    }
    self.forward(WindowCommand::UpdateOptions {
      window_id: id.clone(),
      options,
    });
  }

  pub(crate) fn forward(&self, command: WindowCommand) {
    self.inner.commands.send(command);
  }
}
