//! Controllers: own a core state machine plus the surfaces it renders to.
//!
//! Controllers take `&self` so the browser layer can share one instance
//! between several event listeners through an `Rc`. They know nothing about
//! `web-sys`; tests drive them with in-memory surfaces.

#[cfg(test)]
#[path = "controllers_test.rs"]
mod controllers_test;

use std::cell::{Cell, RefCell};

use interact::consts::OPEN_CLASS;
use interact::nav::{NavEvent, NavToggle};
use interact::scroll_spy::{ScrollSpy, highlight_links};
use interact::surface::ClassSurface;

/// Mobile navigation: the menu panel and its toggle button.
pub struct NavController<M, T> {
    state: Cell<NavToggle>,
    menu: M,
    toggle: T,
}

impl<M: ClassSurface, T: ClassSurface> NavController<M, T> {
    /// Take the initial open state from the menu's markup and bring the
    /// toggle in line with it.
    pub fn new(menu: M, toggle: T) -> Self {
        let state = NavToggle::new(menu.has_class(OPEN_CLASS));
        state.presentation().apply(&menu, &toggle);
        Self { state: Cell::new(state), menu, toggle }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    pub fn on_toggle_click(&self) {
        self.dispatch(NavEvent::ToggleClicked);
    }

    pub fn on_link_click(&self) {
        self.dispatch(NavEvent::LinkClicked);
    }

    fn dispatch(&self, event: NavEvent) {
        let mut state = self.state.get();
        let shown = state.handle(event);
        self.state.set(state);
        shown.apply(&self.menu, &self.toggle);
        log::debug!("nav {event:?}: open={}", shown.menu_open);
    }
}

/// A navigation link and the `href` it was found with.
pub struct NavLink<L> {
    pub href: Option<String>,
    pub surface: L,
}

/// Scroll spy over a fixed set of navigation links.
pub struct ScrollSpyController<L> {
    spy: RefCell<ScrollSpy>,
    links: Vec<NavLink<L>>,
    synced: Cell<bool>,
}

impl<L: ClassSurface> ScrollSpyController<L> {
    pub fn new(header_offset: f64, links: Vec<NavLink<L>>) -> Self {
        Self { spy: RefCell::new(ScrollSpy::new(header_offset)), links, synced: Cell::new(false) }
    }

    /// Rebuild the offset table from `(id, document_top)` pairs. Call on load
    /// and whenever layout may have moved.
    pub fn refresh_offsets<I, S>(&self, sections: I)
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut spy = self.spy.borrow_mut();
        spy.set_sections(sections);
        log::debug!("scroll spy tracking {} sections, header offset {}", spy.offsets().len(), spy.header_offset());
    }

    /// Re-evaluate the current section for `scroll_y` and update link
    /// classes. The first call always writes every link, clearing any
    /// `active` class left in the markup; later calls only write on change.
    pub fn on_scroll(&self, scroll_y: f64) {
        let change = self.spy.borrow_mut().observe(scroll_y);
        if change.is_none() && self.synced.get() {
            return;
        }
        self.synced.set(true);

        let spy = self.spy.borrow();
        highlight_links(self.links.iter().map(|link| (link.href.as_deref(), &link.surface)), spy.active());
        if let Some(change) = change {
            log::debug!("scroll spy: {:?} -> {:?}", change.previous, change.current);
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<String> {
        self.spy.borrow().active().map(str::to_owned)
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        self.spy.borrow().offsets().len()
    }

    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}
