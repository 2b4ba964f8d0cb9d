//! Single-byte enumerations carried in response records.
//!
//! Both enums are open: a byte outside the listed variants decodes to
//! `Unrecognized(raw)` instead of failing, and encodes back to the same byte.

/// Operating state reported by [`crate::DeviceInfoResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceStatus {
    Offline,
    Online,
    Busy,
    Error,
    /// A byte with no listed variant. Holding a listed value here (e.g.
    /// `Unrecognized(1)`) still encodes that byte, which then decodes as the
    /// listed variant.
    Unrecognized(u8),
}

impl DeviceStatus {
    /// Returns `true` for the listed variants.
    #[must_use]
    pub const fn is_recognized(self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<u8> for DeviceStatus {
    fn from(raw: u8) -> Self {
        match raw {
            0 => Self::Offline,
            1 => Self::Online,
            2 => Self::Busy,
            3 => Self::Error,
            other => Self::Unrecognized(other),
        }
    }
}

impl From<DeviceStatus> for u8 {
    fn from(status: DeviceStatus) -> Self {
        match status {
            DeviceStatus::Offline => 0,
            DeviceStatus::Online => 1,
            DeviceStatus::Busy => 2,
            DeviceStatus::Error => 3,
            DeviceStatus::Unrecognized(raw) => raw,
        }
    }
}

/// Result code carried by the set/send responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    None,
    InvalidCommand,
    InvalidParameter,
    Timeout,
    DeviceError,
    /// The reserved catch-all code, byte `0xFF`.
    Unknown,
    /// Any other byte, kept as received.
    Unrecognized(u8),
}

impl ErrorCode {
    /// Returns `true` for the listed variants, including [`ErrorCode::Unknown`].
    #[must_use]
    pub const fn is_recognized(self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<u8> for ErrorCode {
    fn from(raw: u8) -> Self {
        match raw {
            0 => Self::None,
            1 => Self::InvalidCommand,
            2 => Self::InvalidParameter,
            3 => Self::Timeout,
            4 => Self::DeviceError,
            255 => Self::Unknown,
            other => Self::Unrecognized(other),
        }
    }
}

impl From<ErrorCode> for u8 {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::None => 0,
            ErrorCode::InvalidCommand => 1,
            ErrorCode::InvalidParameter => 2,
            ErrorCode::Timeout => 3,
            ErrorCode::DeviceError => 4,
            ErrorCode::Unknown => 255,
            ErrorCode::Unrecognized(raw) => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_status_listed_values() {
        assert_eq!(DeviceStatus::from(0), DeviceStatus::Offline);
        assert_eq!(DeviceStatus::from(3), DeviceStatus::Error);
        assert_eq!(u8::from(DeviceStatus::Busy), 2);
    }

    #[test]
    fn device_status_unlisted_value_kept() {
        let status = DeviceStatus::from(4);
        assert_eq!(status, DeviceStatus::Unrecognized(4));
        assert!(!status.is_recognized());
        assert_eq!(u8::from(status), 4);
    }

    #[test]
    fn error_code_255_is_unknown() {
        assert_eq!(ErrorCode::from(255), ErrorCode::Unknown);
        assert!(ErrorCode::Unknown.is_recognized());
        assert_eq!(u8::from(ErrorCode::Unknown), 255);
    }

    #[test]
    fn error_code_headroom_is_distinct() {
        let code = ErrorCode::from(0xFE);
        assert_eq!(code, ErrorCode::Unrecognized(0xFE));
        assert_ne!(code, ErrorCode::None);
        assert_ne!(code, ErrorCode::Unknown);
    }

    #[test]
    fn every_byte_survives_both_enums() {
        for raw in 0..=u8::MAX {
            assert_eq!(u8::from(DeviceStatus::from(raw)), raw);
            assert_eq!(u8::from(ErrorCode::from(raw)), raw);
        }
    }
}
