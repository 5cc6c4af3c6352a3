//! Scroll spy: which page section is "current" for a given scroll offset.
//!
//! Each section gets a trigger offset, its document top minus the fixed
//! header height. Section *i* is current while
//! `trigger[i] <= scroll < trigger[i + 1]`; the last section has no upper
//! bound. Sections are expected in document order and the first match wins.
//! Above the first trigger nothing is current.
//!
//! The table is rebuilt with [`ScrollSpy::set_sections`] whenever layout can
//! move (load, resize); lookups in between are a linear scan.

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

use crate::consts::{ACTIVE_CLASS, HEADER_OFFSET};
use crate::surface::ClassSurface;

/// A section id and the scroll offset at which it becomes current.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub trigger: f64,
}

/// Reported by [`ScrollSpy::observe`] when the current section changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveChange {
    pub previous: Option<String>,
    pub current: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    header_offset: f64,
    offsets: Vec<SectionOffset>,
    active: Option<String>,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(HEADER_OFFSET)
    }
}

impl ScrollSpy {
    #[must_use]
    pub fn new(header_offset: f64) -> Self {
        Self { header_offset, offsets: Vec::new(), active: None }
    }

    #[must_use]
    pub fn header_offset(&self) -> f64 {
        self.header_offset
    }

    #[must_use]
    pub fn offsets(&self) -> &[SectionOffset] {
        &self.offsets
    }

    /// Rebuild the offset table from `(id, document_top)` pairs, in document
    /// order.
    pub fn set_sections<I, S>(&mut self, sections: I)
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let header = self.header_offset;
        self.offsets.clear();
        self.offsets.extend(
            sections
                .into_iter()
                .map(|(id, top)| SectionOffset { id: id.into(), trigger: top - header }),
        );
    }

    /// Id of the section current at `scroll_y`, if any.
    #[must_use]
    pub fn section_at(&self, scroll_y: f64) -> Option<&str> {
        self.offsets
            .iter()
            .enumerate()
            .find(|(i, section)| {
                let upper = self.offsets.get(i + 1).map_or(f64::INFINITY, |next| next.trigger);
                scroll_y >= section.trigger && scroll_y < upper
            })
            .map(|(_, section)| section.id.as_str())
    }

    /// Section marked current by the last [`Self::observe`].
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Record the section current at `scroll_y`. Returns the change when it
    /// differs from the previously observed one.
    pub fn observe(&mut self, scroll_y: f64) -> Option<ActiveChange> {
        let current = self.section_at(scroll_y).map(str::to_owned);
        if current == self.active {
            return None;
        }
        let previous = std::mem::replace(&mut self.active, current.clone());
        Some(ActiveChange { previous, current })
    }
}

/// Fragment identifier of a link target: `"#about"` and `"/#about"` both give
/// `"about"`. Links without a fragment give `None`.
#[must_use]
pub fn fragment_of(href: &str) -> Option<&str> {
    let (_, fragment) = href.split_once('#')?;
    (!fragment.is_empty()).then_some(fragment)
}

/// Whether a link with `href` points at the `active` section.
#[must_use]
pub fn link_targets(href: Option<&str>, active: Option<&str>) -> bool {
    match (href.and_then(fragment_of), active) {
        (Some(fragment), Some(active)) => fragment == active,
        _ => false,
    }
}

/// Mark the link for `active` and clear the class on every other link.
pub fn highlight_links<'a, L, I>(links: I, active: Option<&str>)
where
    L: ClassSurface + 'a,
    I: IntoIterator<Item = (Option<&'a str>, &'a L)>,
{
    for (href, link) in links {
        link.set_class(ACTIVE_CLASS, link_targets(href, active));
    }
}
