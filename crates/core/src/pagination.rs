//! Pagination window shared by every favorites backend.
//!
//! Both backends order a user's favorites the same way (asset-type rank,
//! then insertion order) and apply the window once over that whole ordered
//! sequence.

/// Default page size when the caller gives none.
pub const DEFAULT_LIMIT: i64 = 10;

/// Maximum page size a caller may request.
pub const MAX_LIMIT: i64 = 100;

/// A `limit`/`offset` window over an ordered listing.
///
/// Only built through [`Page::all`] or [`Page::from_params`], so the limit
/// is always positive and the offset never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    limit: Option<i64>,
    offset: i64,
}

impl Page {
    /// The whole listing.
    pub fn all() -> Self {
        Self {
            limit: None,
            offset: 0,
        }
    }

    /// Build a window from raw query parameters.
    ///
    /// The limit defaults to [`DEFAULT_LIMIT`] and is kept within
    /// `1..=MAX_LIMIT`; the offset defaults to zero and is floored at zero.
    pub fn from_params(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            limit: Some(limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)),
            offset: offset.unwrap_or(0).max(0),
        }
    }

    /// Maximum number of items; `None` means no limit.
    pub fn limit(&self) -> Option<i64> {
        self.limit
    }

    /// Number of leading items to skip.
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Apply the window to an already-ordered sequence.
    pub fn apply<I: Iterator>(&self, items: I) -> impl Iterator<Item = I::Item> {
        let skip = usize::try_from(self.offset).unwrap_or(usize::MAX);
        let take = self
            .limit
            .map_or(usize::MAX, |limit| usize::try_from(limit).unwrap_or(usize::MAX));
        items.skip(skip).take(take)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::from_params(None, None)
    }
}
