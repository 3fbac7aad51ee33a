/*!
Platform seams consumed by the core.

The native windowing primitive and the client-side spawn primitive are
external collaborators: core code only uses these traits, and concrete
implementations belong to the embedding application (and to the test
fakes).
*/

mod traits;

pub use traits::{CloseObserver, NativeWindow, NavigationRef, WindowOpener};

#[cfg(test)]
pub(crate) mod fake;
