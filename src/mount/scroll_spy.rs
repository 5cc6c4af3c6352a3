//! Scroll spy over the page sections and navigation links.

use std::rc::Rc;

use web_sys::{Document, Element, Window};

use crate::config::ScrollSpySettings;
use crate::controllers::{NavLink, ScrollSpyController};
use crate::dom::{DomElement, FrameThrottle, elements, listen, scroll_y};

/// `(id, document_top)` for every section that carries an id.
fn section_tops(window: &Window, sections: &[Element]) -> Vec<(String, f64)> {
    let scrolled = scroll_y(window);
    sections
        .iter()
        .map(|section| (section.id(), section.get_bounding_client_rect().top() + scrolled))
        .filter(|(id, _)| !id.is_empty())
        .collect()
}

/// Measure the sections, highlight the current link once, then keep both up
/// to date on `resize` and `scroll`. Returns the number of tracked sections.
pub fn mount_scroll_spy(window: &Window, document: &Document, settings: &ScrollSpySettings) -> usize {
    let sections = elements(document.query_selector_all(&settings.sections), &settings.sections);
    let links = elements(document.query_selector_all(&settings.links), &settings.links)
        .into_iter()
        .map(|link| NavLink { href: link.get_attribute("href"), surface: DomElement(link) })
        .collect();
    let controller = Rc::new(ScrollSpyController::new(settings.header_offset, links));

    controller.refresh_offsets(section_tops(window, &sections));
    let tracked = controller.section_count();

    let on_resize = Rc::clone(&controller);
    let resize_window = window.clone();
    listen(window, "resize", move |_| {
        on_resize.refresh_offsets(section_tops(&resize_window, &sections));
    });

    let evaluate: Rc<dyn Fn()> = {
        let controller = Rc::clone(&controller);
        let window = window.clone();
        Rc::new(move || controller.on_scroll(scroll_y(&window)))
    };
    evaluate();

    if settings.throttle_scroll {
        let throttle = FrameThrottle::default();
        let scroll_window = window.clone();
        listen(window, "scroll", move |_| throttle.request(&scroll_window, Rc::clone(&evaluate)));
    } else {
        listen(window, "scroll", move |_| evaluate());
    }

    log::info!("scroll spy mounted: {tracked} sections, {} links", controller.link_count());
    tracked
}
