/*!
Fake platform for tests: an in-memory native window plus an opener that
routes spawns through a real `WindowHost`, the way the display surface
routes its generic spawn into the privileged process.
*/

use std::sync::Arc;

use parking_lot::Mutex;

use super::{CloseObserver, NativeWindow, NavigationRef, WindowOpener};
use crate::host::{SpawnDecision, WindowHost};
use crate::types::{AuxioError, AuxioResult};

#[derive(Default)]
struct FakeState {
  closed: bool,
  visible: bool,
  maximized: bool,
  minimized: bool,
  observers: Vec<CloseObserver>,
}

/// In-memory stand-in for a native window.
#[derive(Clone, Default)]
pub(crate) struct FakeWindow {
  state: Arc<Mutex<FakeState>>,
}

impl FakeWindow {
  pub(crate) fn new() -> Self {
    Self {
      state: Arc::new(Mutex::new(FakeState {
        visible: true,
        ..FakeState::default()
      })),
    }
  }

  pub(crate) fn is_closed(&self) -> bool {
    self.state.lock().closed
  }

  pub(crate) fn is_minimized(&self) -> bool {
    self.state.lock().minimized
  }

  /// Simulate the user closing the window from native chrome.
  pub(crate) fn close_from_user(&self) {
    self.fire_closed();
  }

  fn fire_closed(&self) {
    let observers = {
      let mut state = self.state.lock();
      if state.closed {
        return;
      }
      state.closed = true;
      state.visible = false;
      std::mem::take(&mut state.observers)
    };
    // Observers run without the state lock; they re-enter the registry.
    for observer in observers {
      observer();
    }
  }
}

impl NativeWindow for FakeWindow {
  fn close(&self) {
    self.fire_closed();
  }

  fn minimize(&self) {
    self.state.lock().minimized = true;
  }

  fn maximize(&self) {
    let mut state = self.state.lock();
    state.maximized = true;
    state.minimized = false;
  }

  fn unmaximize(&self) {
    self.state.lock().maximized = false;
  }

  fn is_maximized(&self) -> bool {
    self.state.lock().maximized
  }

  fn is_visible(&self) -> bool {
    let state = self.state.lock();
    state.visible && !state.closed
  }

  fn subscribe_closed(&self, observer: CloseObserver) {
    {
      let mut state = self.state.lock();
      if !state.closed {
        state.observers.push(observer);
        return;
      }
    }
    observer();
  }
}

struct FakeNavigation {
  window: FakeWindow,
}

impl NavigationRef for FakeNavigation {
  fn close(&self) {
    self.window.close();
  }

  fn is_open(&self) -> bool {
    self.window.is_visible()
  }
}

/// Opener that spawns through a real host, like the display surface does.
pub(crate) struct FakeOpener {
  host: WindowHost,
  spawned: Mutex<Vec<FakeWindow>>,
}

impl FakeOpener {
  pub(crate) fn new(host: WindowHost) -> Self {
    Self {
      host,
      spawned: Mutex::new(Vec::new()),
    }
  }

  /// The most recently spawned native window, if any.
  pub(crate) fn last_window(&self) -> Option<FakeWindow> {
    self.spawned.lock().last().cloned()
  }

  pub(crate) fn spawn_count(&self) -> usize {
    self.spawned.lock().len()
  }
}

impl WindowOpener for FakeOpener {
  fn open(&self, url: &str, _target: &str, features: &str) -> AuxioResult<Box<dyn NavigationRef>> {
    match self.host.intercept(url, features) {
      SpawnDecision::Allow { ticket, .. } => {
        let window = FakeWindow::new();
        self.host.bind(ticket, Arc::new(window.clone()));
        self.spawned.lock().push(window.clone());
        Ok(Box::new(FakeNavigation { window }))
      }
      SpawnDecision::Deny => Err(AuxioError::SpawnFailed(format!("denied by host: {url}"))),
    }
  }
}
