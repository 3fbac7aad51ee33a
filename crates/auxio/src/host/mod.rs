/*!
Privileged host side - owns real native window handles.

# Module structure

- `mod.rs` - `WindowHost` instance, construction, close-notification channel
- `registry.rs` - handle registry with private fields, invariant-preserving mutation
- `intercept.rs` - spawn interception and the decision/ticket types
- `commands.rs` - command surface keyed by `WindowId`
*/

mod commands;
mod intercept;
mod registry;

pub use commands::{CommandSink, WindowCommand};
pub use intercept::{SpawnDecision, SpawnTicket};

use std::sync::Arc;

use async_broadcast::{InactiveReceiver, Receiver, Sender};
use parking_lot::RwLock;

use registry::HandleRegistry;

use crate::platform::NativeWindow;
use crate::types::{WindowEvent, WindowId};

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Callback for navigation targets the host refuses to intercept
/// (the external-link opener).
pub type ExternalOpener = Box<dyn Fn(&str) + Send + Sync>;

/// Privileged host instance - source of truth for which auxiliary windows
/// exist, and the sender side of the close-notification channel.
///
/// Construct one per application and inject it; there is deliberately no
/// process-global instance, so tests build isolated hosts. Clone is cheap
/// (Arc bumps) - share freely across threads.
pub struct WindowHost {
  inner: Arc<HostInner>,
}

pub(crate) struct HostInner {
  registry: RwLock<HandleRegistry>,
  events_tx: Sender<WindowEvent>,
  events_keepalive: InactiveReceiver<WindowEvent>,
  external_opener: Option<ExternalOpener>,
}

impl Clone for WindowHost {
  fn clone(&self) -> Self {
    Self {
      inner: Arc::clone(&self.inner),
    }
  }
}

impl std::fmt::Debug for WindowHost {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WindowHost").finish_non_exhaustive()
  }
}

impl Default for WindowHost {
  fn default() -> Self {
    Self::new()
  }
}

/// Builder for configuring a `WindowHost`.
#[derive(Default)]
#[must_use = "Builder does nothing until .build() is called"]
pub struct WindowHostBuilder {
  capacity: Option<usize>,
  external_opener: Option<ExternalOpener>,
}

impl std::fmt::Debug for WindowHostBuilder {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WindowHostBuilder")
      .field("capacity", &self.capacity)
      .finish_non_exhaustive()
  }
}

impl WindowHostBuilder {
  /// Route non-blank navigation targets to this callback.
  ///
  /// Default: non-blank targets are denied and dropped.
  pub fn external_opener(mut self, opener: impl Fn(&str) + Send + Sync + 'static) -> Self {
    self.external_opener = Some(Box::new(opener));
    self
  }

  /// Capacity of the close-notification channel. Default: 64.
  pub const fn event_capacity(mut self, capacity: usize) -> Self {
    self.capacity = Some(capacity);
    self
  }

  /// Build the host with the configured options.
  pub fn build(self) -> WindowHost {
    let capacity = self.capacity.unwrap_or(EVENT_CHANNEL_CAPACITY);
    let (mut tx, rx) = async_broadcast::broadcast(capacity);
    tx.set_overflow(true); // Drop oldest messages when full

    WindowHost {
      inner: Arc::new(HostInner {
        registry: RwLock::new(HandleRegistry::new()),
        events_tx: tx,
        events_keepalive: rx.deactivate(),
        external_opener: self.external_opener,
      }),
    }
  }
}

impl WindowHost {
  /// Create a host with default options.
  pub fn new() -> Self {
    Self::builder().build()
  }

  /// Create a builder for configuring a new host.
  pub fn builder() -> WindowHostBuilder {
    WindowHostBuilder::default()
  }

  /// Subscribe to close notifications from this host.
  pub fn subscribe(&self) -> Receiver<WindowEvent> {
    self.inner.events_keepalive.activate_cloned()
  }

  /// Ids of all live windows.
  pub fn window_ids(&self) -> Vec<WindowId> {
    self.inner.registry.read().ids()
  }

  /// Whether a live handle is registered for `id`.
  pub fn contains(&self, id: &WindowId) -> bool {
    self.inner.registry.read().contains(id)
  }

  /// Forced teardown: drop the registry entry and notify the client side
  /// without waiting for the native closed event. Idempotent - the close
  /// observer funnels into the same removal, so whichever runs first wins
  /// and the other is a no-op.
  pub fn unregister(&self, id: &WindowId) {
    self.inner.handle_window_closed(id);
  }

  /// Read registry state. Never call native window operations inside the
  /// closure - clone the handle out first.
  #[inline]
  pub(crate) fn read<R>(&self, f: impl FnOnce(&HandleRegistry) -> R) -> R {
    f(&self.inner.registry.read())
  }

  pub(crate) fn inner(&self) -> &Arc<HostInner> {
    &self.inner
  }
}

impl HostInner {
  /// Close-observer entry point. Only the call that actually removes the
  /// entry emits the notification, so redelivered close events for the
  /// same id collapse to no-ops.
  pub(crate) fn handle_window_closed(&self, id: &WindowId) {
    if self.registry.write().remove(id).is_some() {
      log::debug!("window {id} closed, notifying client side");
      self.emit(WindowEvent::Closed {
        window_id: id.clone(),
      });
    }
  }

  pub(crate) fn register(&self, id: WindowId, handle: Arc<dyn NativeWindow>) -> bool {
    self.registry.write().insert(id, handle)
  }

  pub(crate) fn external_opener(&self) -> Option<&ExternalOpener> {
    self.external_opener.as_ref()
  }

  fn emit(&self, event: WindowEvent) {
    if let Err(e) = self.events_tx.try_broadcast(event) {
      if e.is_full() {
        log::error!(
          "Close-notification channel overflow - events are being dropped. \
           Consider increasing the event capacity or pumping events faster."
        );
      }
    }
  }
}
