//! Point values.

use crate::category::Category;
use serde::{Deserialize, Serialize};

/// A single integer value tagged with its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Unit {
    pub category: Category,
    pub id: i64,
}

impl Unit {
    pub fn new(category: Category, id: i64) -> Self {
        Self { category, id }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.category, self.id)
    }
}
