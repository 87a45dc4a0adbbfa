use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config file already exists: {0}")]
    AlreadyExists(PathBuf),
}

/// Rejected ring parameters. Raised at creation time so degenerate
/// geometry never reaches the per-frame animator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RingError {
    #[error("ring radius must be finite and > 0, got {0}")]
    InvalidRadius(f32),

    #[error("ring amplitude must be finite and >= 0, got {0}")]
    InvalidAmplitude(f32),

    #[error("ring frequency must be finite and > 0, got {0}")]
    InvalidFrequency(f32),

    #[error("ring phase must be finite, got {0}")]
    NonFinitePhase(f32),

    #[error("ring modulation seed must be finite, got {0}")]
    NonFiniteSeed(f32),

    #[error("ring opacity must be within [0, 1], got {0}")]
    InvalidOpacity(f32),

    #[error("ring segment count must be > 0, got {0}")]
    InvalidSegmentCount(usize),

    /// A sampling range that does not fit in finite `f32`.
    #[error("ring {0} range [{1}, {2}] is not finite")]
    InvalidRange(&'static str, f32, f32),
}

#[derive(Debug, thiserror::Error)]
pub enum CoronaError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ring(#[from] RingError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("{0}")]
    Other(String),
}
