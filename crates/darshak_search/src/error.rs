//! Error types for record building and festival lookup.

use darshak_time::TimeError;

/// Errors from month record building.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Invalid calendar input (month out of range, bad date).
    #[error(transparent)]
    Time(#[from] TimeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_error_converts() {
        let e: SearchError = TimeError::InvalidMonth(12).into();
        assert_eq!(e, SearchError::Time(TimeError::InvalidMonth(12)));
        assert_eq!(e.to_string(), "month index 12 out of range (expected 0-11)");
    }
}
