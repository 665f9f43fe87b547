use thiserror::Error;

/// The cost matrix could not be turned into a network. Nothing is
/// constructed on failure; the caller must re-supply valid input.
#[derive(Error, Debug)]
pub enum MalformedGraph {
    #[error("network file cannot be read: {0}")]
    Unreadable(#[from] std::io::Error),
    #[error("row {row}, column {column}: `{token}` is not a number")]
    NonNumeric { row: usize, column: usize, token: String },
    #[error("row {row} has {width} entries, expected {height}")]
    NotSquare { row: usize, width: usize, height: usize },
    #[error("row {row}, column {column}: edge costs must be non-negative")]
    NegativeCost { row: usize, column: usize },
}

/// The route specifier could not be parsed into a (source, destination) pair.
#[derive(Error, Debug)]
pub enum MalformedRoute {
    #[error("route file cannot be read: {0}")]
    Unreadable(#[from] std::io::Error),
    #[error("route must contain exactly one `>` separator, found {found}")]
    SeparatorCount { found: usize },
    #[error("`{token}` is not a single-letter node identifier")]
    BadNode { token: String },
}
