use thiserror::Error;

#[derive(Error, Debug)]
pub enum EdgekitError {
    #[error("Padding directive error: {0}")]
    Directives(#[from] edges::EdgesError),

    #[error("Region error: {0}")]
    InvalidRegion(String),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, EdgekitError>;
