//! Error types for time conversions.

/// Error type for all fallible operations in the kundli_time crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Returned when a Julian Day cannot be represented as a calendar instant.
    #[error("julian day {jd} is outside the representable calendar range")]
    JdOutOfRange {
        /// The unrepresentable Julian Day.
        jd: f64,
    },

    /// Returned when a date-time string cannot be parsed.
    #[error("unparseable date-time: {input}")]
    UnparseableDateTime {
        /// The rejected input string.
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jd_out_of_range_message() {
        let e = TimeError::JdOutOfRange { jd: 1e12 };
        assert_eq!(
            e.to_string(),
            "julian day 1000000000000 is outside the representable calendar range"
        );
    }

    #[test]
    fn unparseable_message() {
        let e = TimeError::UnparseableDateTime {
            input: "yesterday".into(),
        };
        assert_eq!(e.to_string(), "unparseable date-time: yesterday");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<TimeError>();
    }
}
