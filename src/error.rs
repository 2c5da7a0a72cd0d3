// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors produced by the card's fallible operations.
///
/// Both variants are absorbed close to where they occur: callers log them
/// for diagnostics and carry on. Nothing here ever reaches the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// QR symbol generation failed (e.g. the payload would not fit).
    Qr(String),
    /// The platform refused or failed a URI hand-off.
    Launch(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Qr(e) => write!(f, "QR Error: {}", e),
            Error::Launch(e) => write!(f, "Launch Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Launch(err.to_string())
    }
}

impl From<qrcode::types::QrError> for Error {
    fn from(err: qrcode::types::QrError) -> Self {
        Error::Qr(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_launch_error() {
        let err = Error::Launch("no handler registered".to_string());
        assert_eq!(format!("{}", err), "Launch Error: no handler registered");
    }

    #[test]
    fn from_io_error_produces_launch_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Launch(message) => assert!(message.contains("boom")),
            _ => panic!("expected Launch variant"),
        }
    }

    #[test]
    fn from_qr_error_produces_qr_variant() {
        let err: Error = qrcode::types::QrError::DataTooLong.into();
        assert!(matches!(err, Error::Qr(_)));
    }

    #[test]
    fn qr_error_formats_properly() {
        let err = Error::Qr("data too long".into());
        assert_eq!(format!("{}", err), "QR Error: data too long");
    }
}
