//! Page filtering by tag.

use std::collections::BTreeSet;

use crate::model::{Page, TagId};

/// How active tags combine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// Page must carry every active tag.
    And,
    /// Page must carry at least one active tag.
    #[default]
    Or,
}

/// Tag filter over the page list.
///
/// With no active tags every page matches.
///
/// # Example
///
/// ```
/// use folio_content::{FilterMode, TagFilter};
///
/// let mut filter = TagFilter::new();
/// filter.toggle(1);
/// filter.toggle(2);
/// filter.set_mode(FilterMode::And);
/// assert_eq!(filter.active().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagFilter {
    active: BTreeSet<TagId>,
    mode: FilterMode,
}

impl TagFilter {
    /// Create a filter with no active tags in `Or` mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate the tag if inactive, deactivate it otherwise.
    ///
    /// Returns whether the tag is active afterwards.
    pub fn toggle(&mut self, tag_id: TagId) -> bool {
        if self.active.remove(&tag_id) {
            false
        } else {
            self.active.insert(tag_id);
            true
        }
    }

    /// Deactivate all tags.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Set how active tags combine.
    pub fn set_mode(&mut self, mode: FilterMode) {
        self.mode = mode;
    }

    #[must_use]
    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    #[must_use]
    pub fn active(&self) -> &BTreeSet<TagId> {
        &self.active
    }

    /// Whether the page passes the filter.
    #[must_use]
    pub fn matches(&self, page: &Page) -> bool {
        if self.active.is_empty() {
            return true;
        }
        match self.mode {
            FilterMode::And => self.active.iter().all(|&id| page.has_tag(id)),
            FilterMode::Or => self.active.iter().any(|&id| page.has_tag(id)),
        }
    }

    /// Pages passing the filter, in input order.
    #[must_use]
    pub fn filter<'p>(&self, pages: &'p [Page]) -> Vec<&'p Page> {
        pages.iter().filter(|page| self.matches(page)).collect()
    }
}
