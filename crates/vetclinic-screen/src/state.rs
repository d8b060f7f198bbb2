//! Screen state axes.

use vetclinic_core::{FilterSet, PageRequest};

/// Progress of the most recent load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// The last load failed; the message is what the user was shown.
    Error(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// The create/edit dialog. At most one is open per screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Modal<R> {
    #[default]
    Closed,
    Creating,
    /// Editing this record, as it was when the modal opened.
    Editing(R),
}

impl<R> Modal<R> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    pub fn editing(&self) -> Option<&R> {
        match self {
            Modal::Editing(record) => Some(record),
            _ => None,
        }
    }
}

/// Paging position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based.
    pub current_page: u32,
    /// Never less than 1.
    pub total_pages: u32,
    pub page_size: u32,
    /// True when `total_pages` was estimated from a bare array.
    pub estimated: bool,
}

impl Pagination {
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            page_size,
            estimated: false,
        }
    }

    /// Whether `page` is within `[1, total_pages]`.
    pub fn contains(&self, page: u32) -> bool {
        (1..=self.total_pages).contains(&page)
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

/// One issued load: its sequence number and the query it was issued for.
///
/// Obtained from [`ListScreen::begin_load`](crate::ListScreen::begin_load)
/// and handed back to
/// [`ListScreen::finish_load`](crate::ListScreen::finish_load) with the
/// response.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a load ticket does nothing until it is finished"]
pub struct LoadTicket {
    pub(crate) seq: u64,
    pub(crate) page: PageRequest,
    pub(crate) filters: FilterSet,
}

impl LoadTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn page(&self) -> &PageRequest {
        &self.page
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_bounds() {
        let mut p = Pagination::new(10);
        assert!(p.contains(1));
        assert!(!p.contains(0));
        assert!(!p.contains(2));
        assert!(!p.has_next());

        p.total_pages = 3;
        p.current_page = 2;
        assert!(p.contains(3));
        assert!(!p.contains(4));
        assert!(p.has_next());
        assert!(p.has_previous());
    }

    #[test]
    fn modal_accessors() {
        let modal: Modal<u8> = Modal::Editing(7);
        assert!(modal.is_open());
        assert_eq!(modal.editing(), Some(&7));
        assert!(!Modal::<u8>::Closed.is_open());
        assert_eq!(Modal::<u8>::Creating.editing(), None);
    }
}
