/*!
Platform abstraction traits.

These traits define the contract between the protocol core and the
windowing system. The host side sees [`NativeWindow`] - a real handle with
lifecycle authority. The client side sees only [`NavigationRef`], the
result of a generic spawn through [`WindowOpener`], and never a handle.
*/

use crate::types::AuxioResult;

/// Observer invoked when a native window reports it has closed.
pub type CloseObserver = Box<dyn Fn() + Send + Sync>;

/// A real native window. Host side only.
///
/// Once a spawn is bound, the handle registry holds the one long-lived
/// reference; nothing outside the host may extend the handle's lifetime.
pub trait NativeWindow: Send + Sync {
  /// Request native close. Destruction is reported through the observer
  /// passed to [`NativeWindow::subscribe_closed`], not by this call
  /// returning.
  fn close(&self);

  /// Iconify the window.
  fn minimize(&self);

  /// Maximize the window.
  fn maximize(&self);

  /// Restore from maximized state.
  fn unmaximize(&self);

  /// Whether the window is currently maximized.
  fn is_maximized(&self) -> bool;

  /// Whether the window is currently visible on screen.
  fn is_visible(&self) -> bool;

  /// Subscribe to the closed event. The observer fires once, whichever of
  /// user action, programmatic close, or host teardown destroys the
  /// window first. Subscribing to an already-closed window fires the
  /// observer immediately.
  fn subscribe_closed(&self, observer: CloseObserver);
}

/// The client's view of the navigation it opened.
pub trait NavigationRef: Send + Sync {
  /// Request close of the underlying navigation. Idempotent.
  fn close(&self);

  /// Whether the navigation still points at a live window.
  fn is_open(&self) -> bool;
}

/// Client-side spawn primitive (the `window.open` analog).
///
/// Implementations route the request to the host's interceptor; the
/// feature string carries the encoded spawn configuration.
pub trait WindowOpener: Send + Sync {
  /// Open `url` with the given target and feature string.
  fn open(&self, url: &str, target: &str, features: &str) -> AuxioResult<Box<dyn NavigationRef>>;
}
