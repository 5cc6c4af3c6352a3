//! Output surfaces: the seam between the cores and whatever renders them.
//!
//! The browser crate implements these for DOM elements; tests implement them
//! with in-memory fakes.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::rc::Rc;

use crate::schedule::{CancelToken, Timers, spawn_chain};
use crate::typewriter::Typewriter;

/// Something that displays a single run of text.
pub trait TextSurface {
    fn set_text(&self, text: &str);
}

/// Something carrying a set of presentation classes.
pub trait ClassSurface {
    /// Add `class` when `on`, remove it otherwise.
    fn set_class(&self, class: &str, on: bool);

    fn has_class(&self, class: &str) -> bool;
}

impl<S: TextSurface + ?Sized> TextSurface for Rc<S> {
    fn set_text(&self, text: &str) {
        (**self).set_text(text);
    }
}

impl<S: ClassSurface + ?Sized> ClassSurface for Rc<S> {
    fn set_class(&self, class: &str, on: bool) {
        (**self).set_class(class, on);
    }

    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }
}

/// Show the typewriter's initial text on `surface`, then keep animating it
/// until `token` is cancelled.
pub fn run_typewriter<T, S>(timers: T, token: CancelToken, mut typewriter: Typewriter, surface: S)
where
    T: Timers + Clone + 'static,
    S: TextSurface + 'static,
{
    surface.set_text(typewriter.text());
    let first_delay = typewriter.first_delay();
    spawn_chain(timers, token, first_delay, move || {
        let delay = typewriter.tick();
        surface.set_text(typewriter.text());
        Some(delay)
    });
}
