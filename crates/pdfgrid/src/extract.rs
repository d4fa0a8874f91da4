//! The two-pass extraction pipeline.
//!
//! Column bands must see the surviving fragments of every page before any
//! table is assembled, so a run has two passes even though the public API
//! reads page-by-page: collect each page's fragments and row bands, then
//! compute the shared column bands, then assemble each page's table.

use tracing::{debug, warn};

use pdfgrid_core::{
    BandSet, ExtractError, ExtractWarning, Table, TextFragment, WarningCode, assemble_table,
    column_bands, fragment::cmp_y_then_x, row_bands,
};

use crate::config::{ExtractConfig, PageErrorPolicy};
use crate::decoder::PageDecoder;

/// The durable output of one extraction run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractRun {
    /// One table per processed page, in page order.
    pub tables: Vec<Table>,
    /// Non-fatal issues recorded during the run.
    pub warnings: Vec<ExtractWarning>,
}

/// One extraction run over an open document.
///
/// Owns the decoder handle and the per-call [`ExtractConfig`]; there is no
/// process-wide state, so independent extractors over distinct decoders
/// cannot interfere. [`extract_tables`](Self::extract_tables) consumes the
/// extractor, which guarantees the handle is dropped on every exit path,
/// including failures.
pub struct TableExtractor<D: PageDecoder> {
    decoder: D,
    config: ExtractConfig,
}

/// One page's collected state between the two passes.
struct CollectedPage {
    page: usize,
    fragments: Vec<TextFragment>,
    row_bands: BandSet,
}

impl<D: PageDecoder> TableExtractor<D> {
    pub fn new(decoder: D, config: ExtractConfig) -> Self {
        Self { decoder, config }
    }

    /// Extractor with the default configuration: all pages, no exclusions,
    /// nearest-band attachment, fail on page decode errors.
    pub fn with_defaults(decoder: D) -> Self {
        Self::new(decoder, ExtractConfig::default())
    }

    /// The ordered fragment sequence rendered on one page.
    ///
    /// Every decoded glyph run becomes one fragment; runs on the same
    /// visual row or column are *not* merged here, that is the banding
    /// stages' job. The sequence is sorted ascending by Y (ties by X,
    /// stable) so downstream banding is independent of the decoder's
    /// emission order.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::PageDecode`] when the page's content cannot
    /// be parsed; an undecodable page is never silently empty.
    pub fn page_fragments(&mut self, page: usize) -> Result<Vec<TextFragment>, ExtractError> {
        let runs = self.decoder.decode_page(page).map_err(|err| {
            let reason = err.to_string();
            ExtractError::PageDecode { page, reason }
        })?;

        let mut fragments: Vec<TextFragment> = runs.into_iter().map(Into::into).collect();
        fragments.sort_by(cmp_y_then_x);
        Ok(fragments)
    }

    /// Run the whole pipeline and return one table per processed page.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::PageDecode`] when a page cannot be decoded and
    ///   the configured policy is [`PageErrorPolicy::Fail`].
    /// - [`ExtractError::OutOfBandFragment`] under
    ///   [`OutOfBandPolicy::Fail`](pdfgrid_core::OutOfBandPolicy::Fail).
    pub fn extract_tables(mut self) -> Result<ExtractRun, ExtractError> {
        let page_count = self.decoder.page_count();
        let mut warnings = Vec::new();

        // Pass 1: per page, fragments and row bands, line filtering applied.
        let mut collected = Vec::new();
        for page in 0..page_count {
            if !self.config.should_process(page) {
                debug!(page, "page filtered out by configuration");
                continue;
            }

            let fragments = match self.page_fragments(page) {
                Ok(fragments) => fragments,
                Err(err) => match self.config.page_errors {
                    PageErrorPolicy::Fail => return Err(err),
                    PageErrorPolicy::Skip => {
                        warn!(page, %err, "skipping undecodable page");
                        warnings.push(
                            ExtractWarning::new(WarningCode::SkippedPage, err.to_string())
                                .with_page(page),
                        );
                        continue;
                    }
                },
            };

            let bands = row_bands(&fragments, page, &self.config.line_exclusions);
            // Line filtering: a fragment survives only if a surviving row
            // band encloses it. Excluded lines feed neither the shared
            // column bands nor assembly.
            let fragments: Vec<TextFragment> = fragments
                .into_iter()
                .filter(|fragment| bands.enclosing(&fragment.y_interval()).is_some())
                .collect();

            debug!(
                page,
                fragments = fragments.len(),
                row_bands = bands.len(),
                "collected page"
            );
            collected.push(CollectedPage {
                page,
                fragments,
                row_bands: bands,
            });
        }

        // Pass 2: shared columns across every surviving fragment, then
        // per-page assembly against them.
        let columns = column_bands(collected.iter().flat_map(|p| p.fragments.iter()));
        debug!(column_bands = columns.len(), "computed shared column bands");

        let mut tables = Vec::with_capacity(collected.len());
        for page in &collected {
            let table = assemble_table(
                page.page,
                &page.fragments,
                &page.row_bands,
                &columns,
                self.config.out_of_band,
                &mut warnings,
            )?;
            debug!(page = page.page, rows = table.row_count(), "assembled table");
            tables.push(table);
        }

        Ok(ExtractRun { tables, warnings })
    }
}
