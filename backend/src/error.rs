//! Error types for sky queries and their collaborators.

/// Result type for engine and provider operations
pub type AstroResult<T> = Result<T, AstroError>;

/// Error type for engine and provider operations.
///
/// Input errors (`InvalidLocation`, `InvalidInstant`, `InvalidCoordinate`) are
/// fatal to the request. Provider errors are surfaced unchanged; nothing in the
/// engine retries or falls back.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AstroError {
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Invalid instant: {0}")]
    InvalidInstant(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Body not found: {0}")]
    BodyNotFound(String),

    #[error("Ephemeris unavailable: {0}")]
    EphemerisUnavailable(String),

    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Star details unavailable: {0}")]
    DetailsUnavailable(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Timed out after {0} s")]
    Timeout(u64),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}
