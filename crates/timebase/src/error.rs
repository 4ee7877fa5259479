//! Error types for the pluvio-timebase crate.

/// Error type for all fallible operations in the pluvio-timebase crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimebaseError {
    /// Returned when the target hour is outside 0..=23.
    #[error("hour must be in 0..=23, got {hour}")]
    InvalidHour {
        /// The invalid hour value.
        hour: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_hour() {
        let e = TimebaseError::InvalidHour { hour: 24 };
        assert_eq!(e.to_string(), "hour must be in 0..=23, got 24");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<TimebaseError>();
    }
}
