//! # folio
//!
//! WebAssembly front end for a static portfolio page. Three independent
//! behaviors are attached to markup the page already contains:
//!
//! - a typewriter that cycles the hero subtitle through a list of phrases,
//! - a hamburger toggle for the mobile navigation menu,
//! - a scroll spy that highlights the navigation link of the visible section.
//!
//! The state machines live in the browser-free `interact` crate. This crate
//! holds configuration, the controllers that apply core decisions to element
//! surfaces, and (behind the `hydrate` feature) the `web-sys` bindings and the
//! JavaScript entry points in [`boot`].

pub mod boot;
pub mod config;
pub mod controllers;
#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod mount;
