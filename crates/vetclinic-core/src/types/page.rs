//! Pagination request and result types.

use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidInputError};

/// One page of a list query: 1-based page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Create a page request.
    ///
    /// # Errors
    ///
    /// Returns an error if `page` or `limit` is zero.
    pub fn new(page: u32, limit: u32) -> Result<Self, Error> {
        if page == 0 {
            return Err(InvalidInputError::Page {
                reason: "page numbers start at 1".to_string(),
            }
            .into());
        }
        if limit == 0 {
            return Err(InvalidInputError::Page {
                reason: "limit must be at least 1".to_string(),
            }
            .into());
        }
        Ok(Self { page, limit })
    }

    /// The first page with the given size.
    pub fn first(limit: u32) -> Result<Self, Error> {
        Self::new(1, limit)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Offset sent to the API: `(page - 1) * limit`.
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

/// How a result's page count was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "pages", rename_all = "lowercase")]
pub enum PageCount {
    /// The server reported `totalPages` or `total`.
    Reported(u32),
    /// Derived from the number of items in this response alone.
    ///
    /// Only meaningful when the server ignored `skip`/`limit` and sent
    /// everything; for a server that honours them this undercounts.
    Estimated(u32),
}

impl PageCount {
    /// The page count, whatever its provenance.
    pub fn get(self) -> u32 {
        match self {
            PageCount::Reported(n) | PageCount::Estimated(n) => n,
        }
    }

    pub fn is_estimated(self) -> bool {
        matches!(self, PageCount::Estimated(_))
    }

    /// Prefer a reported page count, then a reported total, then estimate.
    pub fn resolve(total_pages: Option<u32>, total: Option<u64>, received: usize, limit: u32) -> Self {
        if let Some(pages) = total_pages {
            return PageCount::Reported(pages.max(1));
        }
        if let Some(total) = total {
            let pages = total.div_ceil(u64::from(limit.max(1)));
            return PageCount::Reported(u32::try_from(pages).unwrap_or(u32::MAX).max(1));
        }
        PageCount::Estimated(estimate_pages(received, limit))
    }
}

/// `ceil(received / limit)`, never less than one page.
pub fn estimate_pages(received: usize, limit: u32) -> u32 {
    let limit = limit.max(1) as usize;
    let pages = received.div_ceil(limit);
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

/// The canonical list result, whatever shape the server answered with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<R> {
    /// Records on this page.
    pub data: Vec<R>,
    /// Total matching records, when the server reports it.
    pub total: Option<u64>,
    /// Page number this result answers.
    pub page: u32,
    /// Page size this result answers.
    pub limit: u32,
    /// Number of pages available.
    pub total_pages: PageCount,
    /// Human-readable status message.
    pub message: String,
    /// Whether the server considered the request successful.
    pub success: bool,
}

impl<R> PageResult<R> {
    /// Wrap a bare array answer, estimating the page count from its length.
    pub fn from_bare(data: Vec<R>, request: &PageRequest, message: impl Into<String>) -> Self {
        let total_pages = PageCount::Estimated(estimate_pages(data.len(), request.limit()));
        Self {
            data,
            total: None,
            page: request.page(),
            limit: request.limit(),
            total_pages,
            message: message.into(),
            success: true,
        }
    }

    /// Number of pages as a plain integer.
    pub fn pages(&self) -> u32 {
        self.total_pages.get()
    }
}
