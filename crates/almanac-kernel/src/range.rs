//! Half-open ranges tagged with a category.
//!
//! A [`Range`] is the interval `[start, start + length)` inside one
//! category. Splitting a range against another one of the same category
//! yields the overlap (if any) followed by the uncovered remainder pieces,
//! which is what a stage needs to carve an input range along its rule
//! boundaries.

use crate::category::Category;
use crate::error::{AlmanacError, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A half-open interval `[start, end)` of values in one category.
///
/// # Invariants
/// `start >= 0`, `length >= 1`, and `start + length` fits in `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct Range {
    category: Category,
    start: i64,
    length: i64,
}

#[derive(Deserialize)]
struct RawRange {
    category: Category,
    start: i64,
    length: i64,
}

impl TryFrom<RawRange> for Range {
    type Error = AlmanacError;

    fn try_from(raw: RawRange) -> Result<Self> {
        Range::new(raw.category, raw.start, raw.length)
    }
}

/// Result of [`Range::split`]: the overlap, then what is left of `self`.
///
/// Remainder pieces are ordered left to right and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub overlap: Option<Range>,
    pub remainder: SmallVec<[Range; 2]>,
}

impl Split {
    fn untouched(range: Range) -> Self {
        let mut remainder = SmallVec::new();
        remainder.push(range);
        Self {
            overlap: None,
            remainder,
        }
    }

    /// Total number of values across the overlap and the remainder.
    pub fn covered_length(&self) -> i64 {
        self.overlap.iter().chain(&self.remainder).map(Range::length).sum()
    }
}

impl Range {
    /// Creates a range, rejecting negative starts, empty or negative lengths,
    /// and ends that overflow.
    pub fn new(category: Category, start: i64, length: i64) -> Result<Self> {
        if start < 0 || length < 1 || start.checked_add(length).is_none() {
            return Err(AlmanacError::MalformedRange { start, length });
        }
        Ok(Self {
            category,
            start,
            length,
        })
    }

    /// Builds `[start, end)` from bounds already known to satisfy the
    /// invariants.
    fn span(category: Category, start: i64, end: i64) -> Self {
        debug_assert!(0 <= start && start < end, "empty span [{start}, {end})");
        Self {
            category,
            start,
            length: end - start,
        }
    }

    #[inline]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[inline]
    pub const fn start(&self) -> i64 {
        self.start
    }

    #[inline]
    pub const fn length(&self) -> i64 {
        self.length
    }

    /// Exclusive end.
    #[inline]
    pub const fn end(&self) -> i64 {
        self.start + self.length
    }

    /// Inclusive last value.
    #[inline]
    pub const fn last(&self) -> i64 {
        self.end() - 1
    }

    #[inline]
    pub const fn contains(&self, value: i64) -> bool {
        self.start <= value && value < self.end()
    }

    /// Whether the two ranges share a category and at least one value.
    pub fn intersects(&self, other: &Range) -> bool {
        self.category == other.category && self.start < other.end() && other.start < self.end()
    }

    /// The same span re-tagged with another category.
    pub fn with_category(self, category: Category) -> Self {
        Self { category, ..self }
    }

    /// Shifts the span by `offset` and re-tags it with `category`.
    pub fn translate(self, offset: i64, category: Category) -> Result<Self> {
        let start = self
            .start
            .checked_add(offset)
            .ok_or(AlmanacError::MalformedRange {
                start: self.start,
                length: self.length,
            })?;
        Range::new(category, start, self.length)
    }

    /// Partitions `self` with respect to `other`.
    ///
    /// Ranges of different categories never overlap, so `self` comes back
    /// whole as the only remainder. Otherwise the cases are tried in order,
    /// and `other` lying inside `self` wins over `self` lying inside `other`
    /// (equal ranges land in the first case).
    pub fn split(&self, other: &Range) -> Split {
        if self.category != other.category {
            return Split::untouched(*self);
        }

        let category = self.category;
        let other_start_inside = self.contains(other.start);
        let other_last_inside = self.contains(other.last());
        let self_start_inside = other.contains(self.start);
        let self_last_inside = other.contains(self.last());

        if other_start_inside && other_last_inside {
            let mut remainder = SmallVec::new();
            if self.start < other.start {
                remainder.push(Self::span(category, self.start, other.start));
            }
            if self.last() > other.last() {
                remainder.push(Self::span(category, other.end(), self.end()));
            }
            return Split {
                overlap: Some(*other),
                remainder,
            };
        }

        if self_start_inside && self_last_inside {
            return Split {
                overlap: Some(*self),
                remainder: SmallVec::new(),
            };
        }

        // `self` hangs off the right edge of `other`.
        if self_start_inside {
            let mut remainder = SmallVec::new();
            remainder.push(Self::span(category, other.end(), self.end()));
            return Split {
                overlap: Some(Self::span(category, self.start, other.end())),
                remainder,
            };
        }

        // `other` hangs off the right edge of `self`.
        if other_start_inside {
            let mut remainder = SmallVec::new();
            remainder.push(Self::span(category, self.start, other.start));
            return Split {
                overlap: Some(Self::span(category, other.start, self.end())),
                remainder,
            };
        }

        Split::untouched(*self)
    }
}

impl From<Range> for std::ops::Range<i64> {
    fn from(range: Range) -> Self {
        range.start..range.end()
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}, {})", self.category, self.start, self.end())
    }
}
