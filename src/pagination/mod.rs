//! Pagination module
//!
//! Walks the service's Link-header pagination while honoring a result limit.
//!
//! # Overview
//!
//! Each response is reduced once to a [`Cursor`]; [`PaginationState`]
//! consumes cursors and item counts and decides whether another page is
//! needed and how large it should be.

mod link;
mod types;

pub use link::parse_link_header;
pub use types::{Cursor, NextPage, PageRequest, PaginationState, MAX_PER_PAGE};

#[cfg(test)]
mod tests;
