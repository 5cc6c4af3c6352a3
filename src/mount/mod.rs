//! Attach each behavior to the elements it expects.
//!
//! Every mount function looks its elements up by selector first. Missing
//! elements mean the page simply does not use that behavior: the function
//! logs at `debug` and returns without registering anything.

pub mod nav;
pub mod scroll_spy;
pub mod typewriter;

pub use nav::mount_nav_toggle;
pub use scroll_spy::mount_scroll_spy;
pub use typewriter::mount_typewriter;
