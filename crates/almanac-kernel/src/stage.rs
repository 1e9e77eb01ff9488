//! Stages: ordered offset rules from one category to the next.
//!
//! A stage moves values of its source category into its destination
//! category. Each [`Rule`] covers a source span and shifts it by a constant
//! offset; values no rule covers keep their number and only change
//! category. Rules are consulted in stored order and the first match wins.

use crate::category::Category;
use crate::error::{AlmanacError, Result};
use crate::range::Range;
use crate::unit::Unit;
use serde::{Deserialize, Serialize};

/// One line of a stage: `[source_start, source_start + length)` maps onto
/// `[destination_start, destination_start + length)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRule")]
pub struct Rule {
    destination_start: i64,
    source_start: i64,
    length: i64,
}

#[derive(Deserialize)]
struct RawRule {
    destination_start: i64,
    source_start: i64,
    length: i64,
}

impl TryFrom<RawRule> for Rule {
    type Error = AlmanacError;

    fn try_from(raw: RawRule) -> Result<Self> {
        Rule::new(raw.destination_start, raw.source_start, raw.length)
    }
}

impl Rule {
    /// Both spans must be valid ranges.
    pub fn new(destination_start: i64, source_start: i64, length: i64) -> Result<Self> {
        // Category is irrelevant here; only the span invariants are checked.
        Range::new(Category::Seed, source_start, length)?;
        Range::new(Category::Seed, destination_start, length)?;
        Ok(Self {
            destination_start,
            source_start,
            length,
        })
    }

    #[inline]
    pub const fn destination_start(&self) -> i64 {
        self.destination_start
    }

    #[inline]
    pub const fn source_start(&self) -> i64 {
        self.source_start
    }

    #[inline]
    pub const fn length(&self) -> i64 {
        self.length
    }

    /// Amount added to a covered source value.
    #[inline]
    pub const fn offset(&self) -> i64 {
        self.destination_start - self.source_start
    }

    /// Whether `value` falls inside the source span.
    #[inline]
    pub const fn covers(&self, value: i64) -> bool {
        self.source_start <= value && value < self.source_start + self.length
    }

    /// The source span as a range of `category`.
    pub fn source_range(&self, category: Category) -> Result<Range> {
        Range::new(category, self.source_start, self.length)
    }
}

/// A range map from `source` to `destination`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub source: Category,
    pub destination: Category,
    pub rules: Vec<Rule>,
}

impl Stage {
    pub fn new(source: Category, destination: Category, rules: Vec<Rule>) -> Self {
        Self {
            source,
            destination,
            rules,
        }
    }

    fn accept(&self, category: Category) -> Result<()> {
        if category == self.source {
            Ok(())
        } else {
            Err(AlmanacError::CategoryMismatch {
                expected: self.source,
                actual: category,
            })
        }
    }

    /// Maps a single value. Uncovered values pass through unchanged.
    pub fn apply_unit(&self, unit: Unit) -> Result<Unit> {
        self.accept(unit.category)?;

        let id = self
            .rules
            .iter()
            .find(|rule| rule.covers(unit.id))
            .map_or(unit.id, |rule| unit.id + rule.offset());

        Ok(Unit::new(self.destination, id))
    }

    /// Maps a range, splitting it along rule boundaries.
    ///
    /// The output pieces cover exactly as many values as `range` does.
    /// Pieces are returned in the order they were produced: translated
    /// overlaps rule by rule, then the uncovered leftovers.
    pub fn apply_range(&self, range: Range) -> Result<Vec<Range>> {
        self.accept(range.category())?;

        let mut mapped = Vec::new();
        let mut remainders = vec![range];

        for rule in &self.rules {
            if remainders.is_empty() {
                break;
            }

            let span = rule.source_range(self.source)?;
            let mut next = Vec::with_capacity(remainders.len());
            for piece in remainders {
                let split = piece.split(&span);
                if let Some(overlap) = split.overlap {
                    tracing::trace!(
                        stage = %self.source,
                        piece = %piece,
                        overlap = %overlap,
                        offset = rule.offset(),
                        "rule matched"
                    );
                    mapped.push(overlap.translate(rule.offset(), self.destination)?);
                }
                next.extend(split.remainder);
            }
            remainders = next;
        }

        mapped.extend(
            remainders
                .into_iter()
                .map(|piece| piece.with_category(self.destination)),
        );
        Ok(mapped)
    }
}
