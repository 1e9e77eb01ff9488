use almanac_kernel::AlmanacError;

/// Errors from reading or parsing puzzle text.
///
/// Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("{path}: {message}")]
    Io { path: String, message: String },

    #[error("input does not start with a `seeds:` line")]
    MissingSeeds,

    #[error("line {line}: `{token}` is not a non-negative integer")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: expected `<source>-to-<destination> map:`, got `{header}`")]
    InvalidHeader { line: usize, header: String },

    #[error("line {line}: unknown category `{name}`")]
    UnknownCategory { line: usize, name: String },

    #[error("line {line}: invalid rule: {reason}")]
    InvalidRule { line: usize, reason: String },

    #[error("{count} seed numbers cannot be read as (start, length) pairs")]
    UnpairedSeed { count: usize },

    #[error(transparent)]
    Almanac(#[from] AlmanacError),
}
