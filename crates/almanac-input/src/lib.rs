//! # almanac-input
//!
//! Loader for almanac puzzle text. Turns the seed line and the
//! `<source>-to-<destination> map:` blocks into seed values and an
//! [`almanac_kernel::Almanac`]. Resolution itself lives in the kernel.

pub mod error;
pub mod puzzle;

pub use error::InputError;
pub use puzzle::{Puzzle, load, parse};
