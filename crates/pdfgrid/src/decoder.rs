//! Page decoder boundary trait.
//!
//! Defines the [`PageDecoder`] trait that abstracts the underlying PDF
//! content decoder. The core pipeline requires only that a decoder report
//! how many pages it has, yield each page's rendered glyph runs with
//! geometry, and surface decode failures as errors; releasing the
//! document handle is the decoder's `Drop`.

use pdfgrid_core::{ExtractError, TextFragment};

/// One rendered glyph run as emitted by a decoder, in decoder space.
///
/// Top-left origin: `y` grows downward. Runs arrive in whatever order the
/// decoder emits them; the pipeline imposes its own ordering before
/// banding.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRun {
    /// Decoded text of this run.
    pub text: String,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl GlyphRun {
    pub fn new(text: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            height,
        }
    }
}

impl From<GlyphRun> for TextFragment {
    fn from(run: GlyphRun) -> Self {
        TextFragment::new(run.text, run.x, run.y, run.width, run.height)
    }
}

/// Trait abstracting the external PDF content decoder.
///
/// Implementations wrap whatever actually parses the document. The
/// pipeline holds the decoder for the duration of one extraction run and
/// drops it on every exit path, so implementations should release their
/// document handle in `Drop`.
pub trait PageDecoder {
    /// Decoder-specific error type, convertible to [`ExtractError`].
    type Error: std::error::Error + Into<ExtractError>;

    /// Number of pages in the open document.
    fn page_count(&self) -> usize;

    /// Decode one page's content into its rendered glyph runs.
    ///
    /// Emission order is unconstrained; the pipeline sorts.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or the page's content
    /// cannot be parsed. An undecodable page is an error, never an empty
    /// result.
    fn decode_page(&mut self, page: usize) -> Result<Vec<GlyphRun>, Self::Error>;
}

/// Error type for [`StaticDecoder`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StaticDecodeError {
    #[error("page index {page} out of range ({count} pages)")]
    PageOutOfRange { page: usize, count: usize },
    #[error("page {page} is undecodable: {reason}")]
    Undecodable { page: usize, reason: String },
}

impl From<StaticDecodeError> for ExtractError {
    fn from(err: StaticDecodeError) -> Self {
        match err {
            StaticDecodeError::PageOutOfRange { page, count } => ExtractError::PageDecode {
                page,
                reason: format!("index out of range ({count} pages)"),
            },
            StaticDecodeError::Undecodable { page, reason } => {
                ExtractError::PageDecode { page, reason }
            }
        }
    }
}

/// In-memory [`PageDecoder`] over pre-decoded glyph runs.
///
/// Useful for tests and for callers that already hold decoded content.
/// Pages marked failing simulate undecodable content: decoding them
/// returns [`StaticDecodeError::Undecodable`].
#[derive(Debug, Clone, Default)]
pub struct StaticDecoder {
    pages: Vec<Result<Vec<GlyphRun>, String>>,
}

impl StaticDecoder {
    /// Build a decoder whose pages yield the given glyph runs.
    pub fn from_pages(pages: Vec<Vec<GlyphRun>>) -> Self {
        Self {
            pages: pages.into_iter().map(Ok).collect(),
        }
    }

    /// Mark `page` as undecodable with the given reason.
    pub fn with_failing_page(mut self, page: usize, reason: impl Into<String>) -> Self {
        if let Some(slot) = self.pages.get_mut(page) {
            *slot = Err(reason.into());
        }
        self
    }
}

impl PageDecoder for StaticDecoder {
    type Error = StaticDecodeError;

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn decode_page(&mut self, page: usize) -> Result<Vec<GlyphRun>, Self::Error> {
        match self.pages.get(page) {
            None => Err(StaticDecodeError::PageOutOfRange {
                page,
                count: self.pages.len(),
            }),
            Some(Err(reason)) => Err(StaticDecodeError::Undecodable {
                page,
                reason: reason.clone(),
            }),
            Some(Ok(runs)) => Ok(runs.clone()),
        }
    }
}
