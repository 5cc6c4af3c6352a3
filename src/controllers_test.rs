use std::collections::BTreeSet;
use std::rc::Rc;

use super::*;

/// In-memory element: a class set plus a count of class writes.
#[derive(Default)]
struct FakeElement {
    classes: RefCell<BTreeSet<String>>,
    writes: Cell<usize>,
}

impl FakeElement {
    fn with_class(class: &str) -> Self {
        let element = Self::default();
        element.classes.borrow_mut().insert(class.to_owned());
        element
    }
}

impl ClassSurface for FakeElement {
    fn set_class(&self, class: &str, on: bool) {
        self.writes.set(self.writes.get() + 1);
        if on {
            self.classes.borrow_mut().insert(class.to_owned());
        } else {
            self.classes.borrow_mut().remove(class);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

fn nav() -> (NavController<Rc<FakeElement>, Rc<FakeElement>>, Rc<FakeElement>, Rc<FakeElement>) {
    let menu = Rc::new(FakeElement::default());
    let toggle = Rc::new(FakeElement::default());
    let controller = NavController::new(Rc::clone(&menu), Rc::clone(&toggle));
    (controller, menu, toggle)
}

fn links(hrefs: &[Option<&str>]) -> (Vec<NavLink<Rc<FakeElement>>>, Vec<Rc<FakeElement>>) {
    let surfaces: Vec<_> = hrefs.iter().map(|_| Rc::new(FakeElement::default())).collect();
    let links = hrefs
        .iter()
        .zip(&surfaces)
        .map(|(href, surface)| NavLink { href: href.map(str::to_owned), surface: Rc::clone(surface) })
        .collect();
    (links, surfaces)
}

// =============================================================
// NavController
// =============================================================

#[test]
fn nav_toggle_once_opens_menu_and_activates_toggle() {
    let (controller, menu, toggle) = nav();
    controller.on_toggle_click();
    assert!(controller.is_open());
    assert!(menu.has_class("open"));
    assert!(toggle.has_class("active"));
}

#[test]
fn nav_toggle_twice_closes_again() {
    let (controller, menu, toggle) = nav();
    controller.on_toggle_click();
    controller.on_toggle_click();
    assert!(!controller.is_open());
    assert!(!menu.has_class("open"));
    assert!(!toggle.has_class("active"));
}

#[test]
fn nav_link_click_closes_open_menu() {
    let (controller, menu, toggle) = nav();
    controller.on_toggle_click();
    controller.on_link_click();
    assert!(!controller.is_open());
    assert!(!menu.has_class("open"));
    assert!(!toggle.has_class("active"));
}

#[test]
fn nav_link_click_on_closed_menu_stays_closed() {
    let (controller, menu, _toggle) = nav();
    controller.on_link_click();
    controller.on_link_click();
    assert!(!controller.is_open());
    assert!(!menu.has_class("open"));
}

#[test]
fn nav_reads_initial_state_from_menu_markup() {
    let menu = Rc::new(FakeElement::with_class("open"));
    let toggle = Rc::new(FakeElement::default());
    let controller = NavController::new(Rc::clone(&menu), Rc::clone(&toggle));
    assert!(controller.is_open());
    assert!(toggle.has_class("active"));

    controller.on_toggle_click();
    assert!(!menu.has_class("open"));
    assert!(!toggle.has_class("active"));
}

#[test]
fn nav_repairs_stray_toggle_class_on_construction() {
    let menu = Rc::new(FakeElement::default());
    let toggle = Rc::new(FakeElement::with_class("active"));
    let controller = NavController::new(menu, Rc::clone(&toggle));
    assert!(!controller.is_open());
    assert!(!toggle.has_class("active"));
}

// =============================================================
// ScrollSpyController
// =============================================================

#[test]
fn scroll_spy_highlights_link_for_current_section() {
    let (links, surfaces) = links(&[Some("#hero"), Some("#about"), Some("#work")]);
    let controller = ScrollSpyController::new(80.0, links);
    controller.refresh_offsets([("hero", 80.0), ("about", 580.0), ("work", 1280.0)]);

    controller.on_scroll(600.0);

    assert_eq!(controller.active().as_deref(), Some("about"));
    assert!(!surfaces[0].has_class("active"));
    assert!(surfaces[1].has_class("active"));
    assert!(!surfaces[2].has_class("active"));
}

#[test]
fn scroll_spy_first_evaluation_clears_markup_highlight() {
    let (links, surfaces) = links(&[Some("#about"), Some("#work")]);
    surfaces[1].set_class("active", true);
    let controller = ScrollSpyController::new(80.0, links);
    controller.refresh_offsets([("about", 600.0), ("work", 1200.0)]);

    controller.on_scroll(0.0);

    assert_eq!(controller.active(), None);
    assert!(!surfaces[0].has_class("active"));
    assert!(!surfaces[1].has_class("active"));
}

#[test]
fn scroll_spy_skips_writes_while_section_is_unchanged() {
    let (links, surfaces) = links(&[Some("#hero"), Some("#about")]);
    let controller = ScrollSpyController::new(0.0, links);
    controller.refresh_offsets([("hero", 0.0), ("about", 500.0)]);

    controller.on_scroll(10.0);
    let writes = surfaces[0].writes.get();
    controller.on_scroll(20.0);
    controller.on_scroll(499.0);
    assert_eq!(surfaces[0].writes.get(), writes);

    controller.on_scroll(500.0);
    assert!(surfaces[0].writes.get() > writes);
    assert!(surfaces[1].has_class("active"));
}

#[test]
fn scroll_spy_ignores_links_without_fragment() {
    let (links, surfaces) = links(&[Some("/resume.pdf"), None, Some("#hero")]);
    let controller = ScrollSpyController::new(0.0, links);
    controller.refresh_offsets([("hero", 0.0)]);
    controller.on_scroll(5.0);

    assert!(!surfaces[0].has_class("active"));
    assert!(!surfaces[1].has_class("active"));
    assert!(surfaces[2].has_class("active"));
}

#[test]
fn scroll_spy_uses_new_offsets_after_refresh() {
    let (links, surfaces) = links(&[Some("#hero"), Some("#about")]);
    let controller = ScrollSpyController::new(0.0, links);
    controller.refresh_offsets([("hero", 0.0), ("about", 800.0)]);
    controller.on_scroll(600.0);
    assert!(surfaces[0].has_class("active"));

    // Narrower viewport: content reflows and "about" moves up.
    controller.refresh_offsets([("hero", 0.0), ("about", 400.0)]);
    controller.on_scroll(600.0);
    assert!(surfaces[1].has_class("active"));
    assert!(!surfaces[0].has_class("active"));
}

#[test]
fn scroll_spy_with_no_sections_marks_nothing() {
    let (links, surfaces) = links(&[Some("#hero")]);
    let controller = ScrollSpyController::new(80.0, links);
    controller.refresh_offsets(Vec::<(String, f64)>::new());
    controller.on_scroll(300.0);
    assert_eq!(controller.section_count(), 0);
    assert_eq!(controller.link_count(), 1);
    assert!(!surfaces[0].has_class("active"));
}

#[test]
fn scroll_spy_shifts_triggers_up_by_configured_header_offset() {
    let (links, surfaces) = links(&[Some("#hero"), Some("#about")]);
    let controller = ScrollSpyController::new(64.0, links);
    assert_eq!(controller.spy.borrow().header_offset(), 64.0);

    controller.refresh_offsets([("hero", 0.0), ("about", 500.0)]);
    controller.on_scroll(435.0);
    assert_eq!(controller.active().as_deref(), Some("hero"));
    controller.on_scroll(436.0);
    assert_eq!(controller.active().as_deref(), Some("about"));
    assert!(surfaces[1].has_class("active"));
}
