//! Browser-free cores for the portfolio page behaviors.
//!
//! Everything in this crate is plain Rust: no `web-sys`, no `wasm-bindgen`.
//! Each behavior is a small state machine that takes an input (a timer tick,
//! a click, a scroll offset) and returns a description of what the page should
//! show. The `folio` crate owns the browser and applies those descriptions to
//! real elements through the [`surface`] traits.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`typewriter`] | Typing/erasing state machine over a fixed phrase list |
//! | [`nav`] | Mobile navigation open/closed state |
//! | [`scroll_spy`] | Section offset table and active-section lookup |
//! | [`schedule`] | Chained one-shot timers with a cancellation token |
//! | [`surface`] | Output traits the host implements, plus the typewriter driver |
//! | [`consts`] | Shared defaults (timings, header offset, class names) |

pub mod consts;
pub mod nav;
pub mod schedule;
pub mod scroll_spy;
pub mod surface;
pub mod typewriter;
