//! Per-call extraction configuration.
//!
//! Everything that shapes one extraction run travels in an
//! [`ExtractConfig`] value passed to the extractor, so independent runs
//! cannot interfere through shared state.

use std::collections::BTreeSet;

use pdfgrid_core::{LineExclusions, OutOfBandPolicy};

/// What to do when one page's content cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageErrorPolicy {
    /// Abort the whole run with [`ExtractError::PageDecode`](pdfgrid_core::ExtractError::PageDecode).
    #[default]
    Fail,
    /// Skip the page, record a [`SkippedPage`](pdfgrid_core::WarningCode::SkippedPage)
    /// warning, and continue with the remaining pages.
    Skip,
}

/// Configuration for one extraction run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractConfig {
    /// Restrict processing to these page indices. Empty means all pages.
    pub pages: BTreeSet<usize>,
    /// Page indices to skip entirely.
    pub skip_pages: BTreeSet<usize>,
    /// Line indices to drop from candidate row bands, per page or globally.
    pub line_exclusions: LineExclusions,
    /// Policy for fragments enclosed by no band during assembly.
    pub out_of_band: OutOfBandPolicy,
    /// Policy for pages whose content cannot be decoded.
    pub page_errors: PageErrorPolicy,
}

impl ExtractConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `page` participates in the run.
    pub(crate) fn should_process(&self, page: usize) -> bool {
        (self.pages.is_empty() || self.pages.contains(&page)) && !self.skip_pages.contains(&page)
    }
}
