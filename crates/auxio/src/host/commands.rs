/*!
Command surface keyed by `WindowId`.

Everything here is fire-and-forget: the client sends, the host does its
best, and a command targeting an id that already closed is absorbed and
logged - the close notification may still be in flight toward the sender.
*/

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{OptionsMap, WindowId};

use super::WindowHost;

/// Commands the client side may send, all keyed by window id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "method", content = "args", rename_all = "snake_case")]
#[ts(export)]
pub enum WindowCommand {
  /// Toggle maximized state: un-maximize when maximized, maximize
  /// otherwise. Deliberately a toggle, unlike `Maximize`.
  Minimize { window_id: WindowId },
  /// Maximize regardless of prior state. Idempotent.
  Maximize { window_id: WindowId },
  /// Iconify to the taskbar/dock.
  Collapse { window_id: WindowId },
  /// Request native close. Registry removal happens asynchronously through
  /// the close observer, never inside dispatch.
  Close { window_id: WindowId },
  /// Declared extension point; the live-update path is not implemented and
  /// the host applies nothing.
  UpdateOptions {
    window_id: WindowId,
    #[ts(type = "Record<string, unknown>")]
    options: OptionsMap,
  },
}

impl WindowCommand {
  /// The window this command targets.
  pub const fn window_id(&self) -> &WindowId {
    match self {
      Self::Minimize { window_id }
      | Self::Maximize { window_id }
      | Self::Collapse { window_id }
      | Self::Close { window_id }
      | Self::UpdateOptions { window_id, .. } => window_id,
    }
  }
}

/// Transport seam the client sends commands through.
///
/// The host implements this directly for in-process wiring; an embedder
/// with a process boundary serializes [`WindowCommand`] across it instead.
pub trait CommandSink: Send + Sync {
  /// Deliver one command, best-effort.
  fn send(&self, command: WindowCommand);
}

impl WindowHost {
  /// Dispatch one command against the handle registry.
  ///
  /// An unknown id is not an error: the window may have closed under a
  /// race the sender could not observe yet.
  pub fn dispatch(&self, command: WindowCommand) {
    let id = command.window_id();
    let Some(handle) = self.read(|registry| registry.handle(id)) else {
      log::warn!("command for unknown window {id}: {command:?}");
      return;
    };

    // The registry lock is released here; native calls below may fire the
    // close observer, which re-enters the registry.
    match command {
      WindowCommand::Minimize { .. } => {
        if handle.is_maximized() {
          handle.unmaximize();
        } else {
          handle.maximize();
        }
      }
      WindowCommand::Maximize { .. } => handle.maximize(),
      WindowCommand::Collapse { .. } => handle.minimize(),
      WindowCommand::Close { .. } => handle.close(),
      WindowCommand::UpdateOptions { window_id, options } => {
        log::debug!(
          "update_options for {window_id} is a stub, {} keys ignored",
          options.len()
        );
      }
    }
  }
}

impl CommandSink for WindowHost {
  fn send(&self, command: WindowCommand) {
    self.dispatch(command);
  }
}
