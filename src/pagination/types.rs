//! Pagination types
//!
//! [`PaginationState`] is the accumulator-side half of the paging loop: it
//! never touches HTTP, so the limit and `per_page` arithmetic can be tested
//! in isolation.

/// Largest page the search API will serve
pub const MAX_PER_PAGE: usize = 100;

/// Page coordinates for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    /// Items requested on this page
    pub per_page: usize,
}

impl PageRequest {
    pub fn new(page: u32, per_page: usize) -> Self {
        Self { page, per_page }
    }
}

/// Pointer to the next page, derived once per response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// `page` of the advertised next link
    pub page: Option<u32>,
    /// `per_page` of the advertised next link
    pub per_page: Option<usize>,
    /// Whether a `rel="next"` link was present
    pub has_next: bool,
}

impl Cursor {
    /// Cursor for the last page
    pub fn end() -> Self {
        Self::default()
    }
}

/// Result of recording a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch another page with these coordinates
    Continue(PageRequest),
    /// Pagination is complete
    Done,
}


/// Tracks progress of one paginated search
#[derive(Debug, Clone)]
pub struct PaginationState {
    /// Requested limit; 0 means no limit
    limit: usize,
    /// Items accumulated so far
    fetched: usize,
    /// Page number of the last request
    page: u32,
}

impl PaginationState {
    /// Create a new state for the given limit
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            fetched: 0,
            page: 1,
        }
    }

    /// Coordinates of the first request
    pub fn first_page(&self) -> PageRequest {
        PageRequest::new(1, self.per_page())
    }

    /// Items still wanted, or `usize::MAX` when unlimited
    pub fn remaining(&self) -> usize {
        if self.limit == 0 {
            usize::MAX
        } else {
            self.limit.saturating_sub(self.fetched)
        }
    }

    /// Items accumulated so far
    pub fn fetched(&self) -> usize {
        self.fetched
    }

    /// Record a received page and decide what to fetch next.
    ///
    /// Stops when the limit is reached, when the service advertises no
    /// further page, when a page comes back empty, or when everything the
    /// service reported as `total` has been collected. A `total` of 0 means
    /// the service did not report one.
    pub fn record_page(&mut self, items: usize, total: u64, cursor: &Cursor) -> NextPage {
        self.fetched += items;

        let exhausted = total > 0 && self.fetched as u64 >= total;
        if self.remaining() == 0 || !cursor.has_next || items == 0 || exhausted {
            return NextPage::Done;
        }

        self.page = cursor.page.unwrap_or(self.page + 1);
        NextPage::Continue(PageRequest::new(self.page, self.per_page()))
    }

    /// Items to request on the next page, never above [`MAX_PER_PAGE`]
    fn per_page(&self) -> usize {
        self.remaining().min(MAX_PER_PAGE)
    }
}
