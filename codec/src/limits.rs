//! Limits for record decoding.

/// Codec-specific limits enforced during decoding.
///
/// Every read is already bounded by the input buffer; these limits cap what a
/// well-formed but hostile payload may ask the decoder to allocate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecLimits {
    /// Maximum length of a single length-prefixed field, in bytes.
    pub max_variable_bytes: usize,
    /// Maximum number of records in a single record list.
    pub max_list_records: usize,
    /// Fail when bytes remain after the last field of a top-level record.
    pub reject_trailing_bytes: bool,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_variable_bytes: 1024 * 1024,
            // A u16-prefixed list of 29-byte records holds at most 2259.
            max_list_records: 4096,
            reject_trailing_bytes: false,
        }
    }
}

impl CodecLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_variable_bytes: 4096,
            max_list_records: 64,
            reject_trailing_bytes: true,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_variable_bytes: usize::MAX,
            max_list_records: usize::MAX,
            reject_trailing_bytes: false,
        }
    }

    /// Returns a copy that rejects trailing bytes.
    #[must_use]
    pub const fn strict(mut self) -> Self {
        self.reject_trailing_bytes = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_allow_max_u16_payload() {
        let limits = CodecLimits::default();
        assert!(limits.max_variable_bytes >= usize::from(u16::MAX));
        assert!(!limits.reject_trailing_bytes);
    }

    #[test]
    fn testing_limits_smaller() {
        let test_limits = CodecLimits::for_testing();
        let default_limits = CodecLimits::default();

        assert!(test_limits.max_variable_bytes < default_limits.max_variable_bytes);
        assert!(test_limits.max_list_records < default_limits.max_list_records);
        assert!(test_limits.reject_trailing_bytes);
    }

    #[test]
    fn unlimited_limits() {
        let limits = CodecLimits::unlimited();
        assert_eq!(limits.max_variable_bytes, usize::MAX);
        assert_eq!(limits.max_list_records, usize::MAX);
    }

    #[test]
    fn strict_sets_trailing_rejection() {
        let limits = CodecLimits::default().strict();
        assert!(limits.reject_trailing_bytes);
        assert_eq!(
            limits.max_variable_bytes,
            CodecLimits::default().max_variable_bytes
        );
    }

    #[test]
    fn limits_const_constructible() {
        const LIMITS: CodecLimits = CodecLimits::for_testing();
        assert_eq!(LIMITS.max_list_records, 64);
    }
}
