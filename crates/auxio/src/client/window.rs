/*!
Per-window handle held by display-surface code.

A thin wrapper over the shared client: it carries the id and forwards
user intent. State lives in the client registry, so handles may be cloned
and dropped freely without affecting the window.
*/

use crate::host::WindowCommand;
use crate::types::{OptionsMap, WindowId};

use super::WindowClient;

/// One logical auxiliary window, from the client's viewpoint.
#[derive(Clone)]
pub struct ClientWindow {
  id: WindowId,
  client: WindowClient,
}

impl std::fmt::Debug for ClientWindow {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ClientWindow").field("id", &self.id).finish()
  }
}

impl ClientWindow {
  pub(crate) const fn new(id: WindowId, client: WindowClient) -> Self {
    Self { id, client }
  }

  /// The id this window was created under.
  pub const fn id(&self) -> &WindowId {
    &self.id
  }

  /// Whether the underlying navigation still reports open.
  pub fn is_open(&self) -> bool {
    self.client.is_open(&self.id)
  }

  /// Toggle maximized state. No-op when the window is not open.
  pub fn minimize(&self) {
    self.forward(WindowCommand::Minimize {
      window_id: self.id.clone(),
    });
  }

  /// Maximize regardless of prior state. No-op when the window is not
  /// open.
  pub fn maximize(&self) {
    self.forward(WindowCommand::Maximize {
      window_id: self.id.clone(),
    });
  }

  /// Iconify. No-op when the window is not open.
  pub fn collapse(&self) {
    self.forward(WindowCommand::Collapse {
      window_id: self.id.clone(),
    });
  }

  /// Close this window and drop its entry. Safe to call twice, and safe
  /// to race with a host-side close.
  pub fn close(&self) {
    self.client.close(&self.id);
  }

  /// Replace the cached construction options. Live windows are not
  /// retrofitted; see [`WindowClient::update_options`].
  pub fn update_options(&self, options: OptionsMap) {
    self.client.update_options(&self.id, options);
  }

  fn forward(&self, command: WindowCommand) {
    if !self.is_open() {
      log::debug!("dropping {command:?} for closed window {}", self.id);
      return;
    }
    self.client.forward(command);
  }
}
