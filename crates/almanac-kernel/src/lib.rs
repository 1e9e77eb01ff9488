//! # Almanac Kernel
//!
//! Chained range remapping over categorized integer values.
//!
//! Values live in categories (seed, soil, …, location). A stage maps one
//! category onto the next through ordered offset rules, and the almanac
//! chains stages together so a seed can be followed all the way to its
//! location, either one value at a time or as whole half-open ranges that
//! get split along rule boundaries.
//!
//! ## Architecture
//!
//! ```text
//! Almanac            ← category → stage chain, resolver
//!     │
//! Stage / Rule       ← ordered offset rules, point and range mapping
//!     │
//! Range / Split      ← half-open span, containment, overlap + remainder
//!     │
//! Unit / Category    ← tagged point value, closed label set
//! ```
//!
//! Everything here is pure and synchronous; parsing the puzzle text lives
//! in `almanac-input`.

pub mod almanac;
pub mod category;
pub mod error;
pub mod range;
pub mod stage;
pub mod unit;

pub use almanac::Almanac;
pub use category::Category;
pub use error::{AlmanacError, Result};
pub use range::{Range, Split};
pub use stage::{Rule, Stage};
pub use unit::Unit;
