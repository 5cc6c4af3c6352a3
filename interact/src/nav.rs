//! Mobile navigation menu state.
//!
//! One boolean drives both presentation classes: `open` on the menu panel and
//! `active` on the toggle button. Deriving both from the same flag means they
//! cannot drift apart, whatever order clicks arrive in.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{ACTIVE_CLASS, OPEN_CLASS};
use crate::surface::ClassSurface;

/// User input the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// The hamburger button was clicked.
    ToggleClicked,
    /// A navigation link inside the menu was clicked.
    LinkClicked,
}

/// Classes the host should apply after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavPresentation {
    pub menu_open: bool,
    pub toggle_active: bool,
}

impl NavPresentation {
    /// Write this presentation onto the menu and toggle surfaces.
    pub fn apply(self, menu: &impl ClassSurface, toggle: &impl ClassSurface) {
        menu.set_class(OPEN_CLASS, self.menu_open);
        toggle.set_class(ACTIVE_CLASS, self.toggle_active);
    }
}

/// Open/closed state of the navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavToggle {
    open: bool,
}

impl NavToggle {
    #[must_use]
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    #[must_use]
    pub fn presentation(self) -> NavPresentation {
        NavPresentation { menu_open: self.open, toggle_active: self.open }
    }

    /// Apply `event`. Toggle clicks flip the state; link clicks always close.
    pub fn handle(&mut self, event: NavEvent) -> NavPresentation {
        self.open = match event {
            NavEvent::ToggleClicked => !self.open,
            NavEvent::LinkClicked => false,
        };
        self.presentation()
    }
}
