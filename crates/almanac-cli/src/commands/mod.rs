pub mod chain;
pub mod lowest;
pub mod resolve;
