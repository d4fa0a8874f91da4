//! pdfgrid-core: Decoder-independent data types and algorithms.
//!
//! This crate provides the value types (Interval, TextFragment, BandSet,
//! Table) and the algorithms (band building, line/column band calculation,
//! table assembly) used by pdfgrid-rs. It knows nothing about PDF parsing;
//! the fragment stream is supplied by the caller.

pub mod assemble;
pub mod bands;
pub mod columns;
pub mod error;
pub mod fragment;
pub mod geometry;
pub mod rows;
pub mod table;

pub use assemble::{OutOfBandPolicy, assemble_table, bucket_into_bands};
pub use bands::{BandSet, RangeBuilder};
pub use columns::column_bands;
pub use error::{ExtractError, ExtractWarning, WarningCode};
pub use fragment::TextFragment;
pub use geometry::Interval;
pub use rows::{LineExclusions, row_bands};
pub use table::{Table, TableCell, TableRow};
