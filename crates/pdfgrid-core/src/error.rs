//! Error and warning types for pdfgrid-rs.
//!
//! Provides [`ExtractError`] for fatal errors that stop an extraction run
//! and [`ExtractWarning`] for non-fatal issues recorded alongside the
//! result.

use std::fmt;

/// Fatal error types for table extraction.
///
/// Every failure surfaces synchronously as a terminal error for the
/// extraction call; there is no retry or partial-result recovery.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// The source document is missing, corrupt, or unreadable.
    DocumentRead(String),
    /// One page's content could not be decoded.
    PageDecode {
        /// 0-based page index.
        page: usize,
        /// Decoder-supplied description of the failure.
        reason: String,
    },
    /// A fragment fell outside every band while the out-of-band policy
    /// was [`Fail`](crate::assemble::OutOfBandPolicy::Fail).
    OutOfBandFragment {
        /// 0-based page index.
        page: usize,
    },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::DocumentRead(msg) => write!(f, "document read error: {msg}"),
            ExtractError::PageDecode { page, reason } => {
                write!(f, "page {page} could not be decoded: {reason}")
            }
            ExtractError::OutOfBandFragment { page } => {
                write!(f, "page {page} has a fragment outside every band")
            }
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::DocumentRead(err.to_string())
    }
}

/// Machine-readable warning code for categorizing extraction issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum WarningCode {
    /// A fragment was not enclosed by any band and was attached to the
    /// nearest one (or dropped, depending on policy).
    OutOfBandFragment,
    /// A page failed to decode and was skipped under the skip policy.
    SkippedPage,
}

impl WarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &str {
        match self {
            WarningCode::OutOfBandFragment => "OUT_OF_BAND_FRAGMENT",
            WarningCode::SkippedPage => "SKIPPED_PAGE",
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal issue encountered during extraction.
///
/// Warnings let the run continue while keeping the issue observable: a
/// structured [`code`](ExtractWarning::code), a human-readable description,
/// and the page it occurred on, if applicable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractWarning {
    /// Machine-readable warning code.
    pub code: WarningCode,
    /// Human-readable description of the warning.
    pub description: String,
    /// Page the warning occurred on (0-indexed), if applicable.
    pub page: Option<usize>,
}

impl ExtractWarning {
    pub fn new(code: WarningCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            page: None,
        }
    }

    /// Attach page context.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)?;
        if let Some(page) = self.page {
            write!(f, " (page {page})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExtractError::PageDecode {
            page: 3,
            reason: "bad content stream".to_string(),
        };
        assert_eq!(err.to_string(), "page 3 could not be decoded: bad content stream");
    }

    #[test]
    fn test_io_error_converts_to_document_read() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: ExtractError = io.into();
        assert!(matches!(err, ExtractError::DocumentRead(_)));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_warning_display_includes_code_and_page() {
        let warning = ExtractWarning::new(WarningCode::SkippedPage, "decode failed").with_page(2);
        assert_eq!(warning.to_string(), "[SKIPPED_PAGE] decode failed (page 2)");
    }
}
