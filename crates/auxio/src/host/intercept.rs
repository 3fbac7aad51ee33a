/*!
Spawn interception.

The display surface cannot construct windows. It opens the blank sentinel
target with the encoded config riding in the feature string; the host
intercepts every new-window request, recovers the config, and decides.

Binding is correlated by identity, not by creation order: `Allow` carries a
move-only [`SpawnTicket`] and [`WindowHost::bind`] consumes it, so each
accepted spawn binds exactly one handle and interleaved creations cannot be
mis-bound to the wrong id.
*/

use std::sync::{Arc, Weak};

use crate::codec;
use crate::platform::NativeWindow;
use crate::types::{OptionsMap, WindowId};

use super::{HostInner, WindowHost};

/// One-shot token tying an accepted spawn decision to the handle it
/// produces. Consumed by [`WindowHost::bind`].
#[derive(Debug)]
pub struct SpawnTicket {
  id: WindowId,
}

impl SpawnTicket {
  /// The window id this spawn was accepted for.
  pub const fn id(&self) -> &WindowId {
    &self.id
  }
}

/// Outcome of intercepting a new-window request.
#[derive(Debug)]
pub enum SpawnDecision {
  /// Construct a native window from `options` and hand it to
  /// [`WindowHost::bind`] together with the ticket, before allowing any
  /// other spawn to proceed.
  Allow {
    /// Decoded construction options merged with the mandatory
    /// control-channel preferences.
    options: OptionsMap,
    /// One-shot binding token.
    ticket: SpawnTicket,
  },
  /// Do not create a window for this request.
  Deny,
}

/// Entries the host always forces onto accepted spawns so the command and
/// notification bridge keeps working inside the new window. They win over
/// caller-supplied values of the same key.
fn merge_control_preferences(options: &mut OptionsMap) {
  options.insert(
    "control".to_owned(),
    serde_json::json!({ "bridge": "auxio", "enabled": true }),
  );
}

impl WindowHost {
  /// Intercept a new-window request.
  ///
  /// Anything that is not the blank sentinel is routed to the external
  /// opener and denied. A config that fails to decode is logged and
  /// denied - terminal for that one spawn, never fatal for the caller,
  /// and no registry state is created for it.
  pub fn intercept(&self, url: &str, features: &str) -> SpawnDecision {
    if url != codec::BLANK_TARGET {
      log::debug!("non-blank spawn target {url}, routing externally");
      if let Some(opener) = self.inner().external_opener() {
        opener(url);
      }
      return SpawnDecision::Deny;
    }

    let config = match codec::decode(features) {
      Ok(config) => config,
      Err(e) => {
        log::warn!("rejecting spawn with undecodable config: {e}");
        return SpawnDecision::Deny;
      }
    };

    if self.contains(&config.id) {
      log::warn!("rejecting spawn for already-live window {}", config.id);
      return SpawnDecision::Deny;
    }

    let mut options = config.options;
    merge_control_preferences(&mut options);

    SpawnDecision::Allow {
      options,
      ticket: SpawnTicket { id: config.id },
    }
  }

  /// Bind the native window created for an accepted spawn.
  ///
  /// Consumes the ticket, so a decision can bind at most one handle.
  /// Attaches the close observer that unregisters the entry and delivers
  /// the `Closed` notification - exactly once, whichever of user action,
  /// client command, or forced teardown destroys the window first.
  pub fn bind(&self, ticket: SpawnTicket, handle: Arc<dyn NativeWindow>) {
    let SpawnTicket { id } = ticket;

    if !self.inner().register(id.clone(), Arc::clone(&handle)) {
      // Two decisions for the same id can only race between intercept and
      // bind. Keep the first binding; the loser's window is closed.
      log::warn!("window {id} already bound, closing duplicate handle");
      handle.close();
      return;
    }

    // Weak: the observer must never extend the host's lifetime.
    let inner: Weak<HostInner> = Arc::downgrade(self.inner());
    let observed = id.clone();
    handle.subscribe_closed(Box::new(move || {
      if let Some(inner) = inner.upgrade() {
        inner.handle_window_closed(&observed);
      }
    }));

    log::debug!("bound native window for {id}");
  }
}
