//! Hamburger toggle for the mobile navigation menu.

use std::rc::Rc;

use web_sys::Document;

use crate::config::NavSelectors;
use crate::controllers::NavController;
use crate::dom::{DomElement, elements, listen, query_one};

/// Wire the toggle button and the links inside the menu. Returns `false`
/// without registering anything if the toggle or the menu is missing.
pub fn mount_nav_toggle(document: &Document, selectors: &NavSelectors) -> bool {
    let (Some(toggle), Some(menu)) = (query_one(document, &selectors.toggle), query_one(document, &selectors.menu)) else {
        log::debug!("no `{}` / `{}` pair; nav toggle skipped", selectors.toggle, selectors.menu);
        return false;
    };
    let links = elements(menu.query_selector_all(&selectors.link), &selectors.link);
    let controller = Rc::new(NavController::new(DomElement(menu), DomElement(toggle.clone())));

    let on_toggle = Rc::clone(&controller);
    listen(&toggle, "click", move |_| on_toggle.on_toggle_click());
    for link in &links {
        let on_link = Rc::clone(&controller);
        listen(link, "click", move |_| on_link.on_link_click());
    }

    log::info!("nav toggle mounted with {} links", links.len());
    true
}
