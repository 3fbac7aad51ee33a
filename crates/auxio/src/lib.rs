/*!
auxio - auxiliary-window lifecycle protocol.

A privileged host owns real native window handles; unprivileged display
clients request windows through a generic blank navigation target, with the
`{id, options}` spawn configuration base64-encoded into the feature string.
Each side keeps a registry keyed by the caller-chosen [`WindowId`], and the
two registries converge purely through the host's close-notification
channel - neither side ever reads the other's map.

```ignore
use std::sync::Arc;
use auxio::{SpawnDecision, WindowClient, WindowHost};

let host = WindowHost::builder()
    .external_opener(|url| open_in_browser(url))
    .build();

// The embedding shell routes every new-window request through the host:
match host.intercept(url, features) {
    SpawnDecision::Allow { options, ticket } => {
        let handle = build_native_window(&options)?;
        host.bind(ticket, handle);
    }
    SpawnDecision::Deny => {}
}

// A display surface drives the client side:
let client = WindowClient::new(opener, Arc::new(host.clone()), host.subscribe());
let window = client.create("w1", options, Box::new(|id| log::info!("{id} gone")))?;

window.minimize(); // toggles maximized state
window.close();    // converges both registries, callback fires once

client.pump_events(); // deliver host-initiated closes
```
*/

mod client;
pub mod codec;
mod host;
mod platform;
mod types;

pub use client::{ClientWindow, RemovalCallback, WindowClient};
pub use host::{
  CommandSink, ExternalOpener, SpawnDecision, SpawnTicket, WindowCommand, WindowHost,
  WindowHostBuilder,
};
pub use platform::{CloseObserver, NativeWindow, NavigationRef, WindowOpener};
pub use types::*;
