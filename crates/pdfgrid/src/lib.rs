//! pdfgrid: Reconstruct table structure from positioned text fragments.
//!
//! Given a page's decoded glyph runs — a bag of `(x, y, width, height,
//! text)` fragments with no grid lines — pdfgrid clusters the fragments
//! into row bands (per page) and column bands (shared across the run),
//! then buckets them into a rectangular grid of plain-text cells.
//!
//! # Architecture
//!
//! - **pdfgrid-core**: Decoder-independent value types and algorithms
//! - **pdfgrid** (this crate): The [`PageDecoder`] boundary trait, the
//!   per-call [`ExtractConfig`], and the two-pass [`TableExtractor`]
//!   pipeline
//!
//! # Example
//!
//! ```
//! use pdfgrid::{ExtractConfig, GlyphRun, StaticDecoder, TableExtractor};
//!
//! let page = vec![
//!     GlyphRun::new("name", 0.0, 0.0, 30.0, 10.0),
//!     GlyphRun::new("qty", 50.0, 0.0, 20.0, 10.0),
//!     GlyphRun::new("bolt", 0.0, 20.0, 30.0, 10.0),
//!     GlyphRun::new("12", 50.0, 20.0, 20.0, 10.0),
//! ];
//! let decoder = StaticDecoder::from_pages(vec![page]);
//! let run = TableExtractor::new(decoder, ExtractConfig::default())
//!     .extract_tables()
//!     .unwrap();
//!
//! assert_eq!(run.tables[0].text_rows(), vec![vec!["name", "qty"], vec!["bolt", "12"]]);
//! ```

pub mod config;
pub mod decoder;
pub mod extract;

pub use pdfgrid_core::{
    BandSet, ExtractError, ExtractWarning, Interval, LineExclusions, OutOfBandPolicy, RangeBuilder,
    Table, TableCell, TableRow, TextFragment, WarningCode, assemble_table, column_bands, row_bands,
};

pub use config::{ExtractConfig, PageErrorPolicy};
pub use decoder::{GlyphRun, PageDecoder, StaticDecodeError, StaticDecoder};
pub use extract::{ExtractRun, TableExtractor};
