//! Error types for panchang display options.

/// Errors from parsing panchang display options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PanchangError {
    /// Name script other than `devanagari` or `latin`.
    #[error("unknown script {0:?} (expected \"devanagari\" or \"latin\")")]
    UnknownScript(String),
    /// Clock style other than `24h` or `12h`.
    #[error("unknown clock style {0:?} (expected \"24h\" or \"12h\")")]
    UnknownClockStyle(String),
}
