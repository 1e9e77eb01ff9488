//! The stage chain and its resolver.
//!
//! An [`Almanac`] holds at most one outgoing [`Stage`] per category. Starting
//! from any value, the resolver follows stages until it reaches a category
//! with no outgoing stage, which is the terminal category for that start.
//!
//! ```text
//! seed ─► soil ─► fertilizer ─► water ─► light ─► temperature ─► humidity ─► location
//! ```
//!
//! The chain is expected to be acyclic. The walk keeps the set of categories
//! it has passed through and fails with [`AlmanacError::CycleDetected`]
//! instead of looping if that expectation is broken.

use crate::category::Category;
use crate::error::{AlmanacError, Result};
use crate::range::Range;
use crate::stage::Stage;
use crate::unit::Unit;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Category-keyed stage chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Almanac {
    stages: HashMap<Category, Stage>,
}

impl Almanac {
    /// Builds the chain, rejecting two stages with the same source.
    pub fn new(stages: impl IntoIterator<Item = Stage>) -> Result<Self> {
        let mut by_source = HashMap::new();
        for stage in stages {
            let source = stage.source;
            if by_source.insert(source, stage).is_some() {
                return Err(AlmanacError::DuplicateStage { category: source });
            }
        }
        Ok(Self { stages: by_source })
    }

    /// The outgoing stage of `category`, if any.
    pub fn stage(&self, category: Category) -> Option<&Stage> {
        self.stages.get(&category)
    }

    /// Number of stages in the chain.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stages ordered by source category.
    pub fn stages(&self) -> Vec<&Stage> {
        let mut stages: Vec<&Stage> = self.stages.values().collect();
        stages.sort_by_key(|stage| stage.source);
        stages
    }

    /// Walks from `start`, yielding each stage to apply in turn.
    fn walk(&self, start: Category) -> Walk<'_> {
        Walk {
            almanac: self,
            current: start,
            visited: HashSet::new(),
        }
    }

    /// Categories visited from `start` up to and including the terminal one.
    pub fn path(&self, start: Category) -> Result<Vec<Category>> {
        let mut path = vec![start];
        let mut walk = self.walk(start);
        while let Some(stage) = walk.next_stage()? {
            path.push(stage.destination);
        }
        Ok(path)
    }

    /// The category a value of `start` ends up in.
    pub fn terminal(&self, start: Category) -> Result<Category> {
        let mut walk = self.walk(start);
        while walk.next_stage()?.is_some() {}
        Ok(walk.current)
    }

    /// Follows `unit` through every stage until the terminal category.
    pub fn resolve_unit(&self, unit: Unit) -> Result<Unit> {
        let mut current = unit;
        let mut walk = self.walk(unit.category);
        while let Some(stage) = walk.next_stage()? {
            current = stage.apply_unit(current)?;
        }
        Ok(current)
    }

    /// Follows `range` through every stage, splitting as it goes.
    ///
    /// The result is the set of terminal-category ranges. Adjacent or
    /// overlapping pieces coming from different branches are kept apart.
    pub fn resolve_range(&self, range: Range) -> Result<BTreeSet<Range>> {
        let mut frontier = BTreeSet::from([range]);
        let mut walk = self.walk(range.category());
        while let Some(stage) = walk.next_stage()? {
            let mut next = BTreeSet::new();
            for piece in frontier {
                next.extend(stage.apply_range(piece)?);
            }
            tracing::debug!(
                from = %stage.source,
                to = %stage.destination,
                ranges = next.len(),
                "stage applied"
            );
            frontier = next;
        }
        Ok(frontier)
    }

    /// Resolves every unit, preserving input order.
    pub fn resolve_units(&self, units: impl IntoIterator<Item = Unit>) -> Result<Vec<Unit>> {
        units
            .into_iter()
            .map(|unit| self.resolve_unit(unit))
            .collect()
    }

    /// Union of [`Almanac::resolve_range`] over every input range.
    pub fn resolve_ranges(
        &self,
        ranges: impl IntoIterator<Item = Range>,
    ) -> Result<BTreeSet<Range>> {
        let mut resolved = BTreeSet::new();
        for range in ranges {
            resolved.extend(self.resolve_range(range)?);
        }
        Ok(resolved)
    }

    /// The resolved unit with the smallest id, or `None` for no input.
    pub fn lowest_unit(&self, units: impl IntoIterator<Item = Unit>) -> Result<Option<Unit>> {
        Ok(self
            .resolve_units(units)?
            .into_iter()
            .min_by_key(|unit| unit.id))
    }

    /// The resolved range with the smallest start, or `None` for no input.
    pub fn lowest_range(&self, ranges: impl IntoIterator<Item = Range>) -> Result<Option<Range>> {
        Ok(self
            .resolve_ranges(ranges)?
            .into_iter()
            .min_by_key(Range::start))
    }
}

/// Iterative chain walk with a visited-category guard.
struct Walk<'a> {
    almanac: &'a Almanac,
    current: Category,
    visited: HashSet<Category>,
}

impl<'a> Walk<'a> {
    fn next_stage(&mut self) -> Result<Option<&'a Stage>> {
        let Some(stage) = self.almanac.stage(self.current) else {
            return Ok(None);
        };
        if !self.visited.insert(self.current) {
            return Err(AlmanacError::CycleDetected {
                category: self.current,
            });
        }
        self.current = stage.destination;
        Ok(Some(stage))
    }
}
