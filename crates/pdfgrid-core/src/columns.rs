//! Column band calculation: one shared X-axis band set per run.

use crate::bands::{BandSet, RangeBuilder};
use crate::fragment::TextFragment;

/// Compute the run's shared column bands.
///
/// Takes the X-intervals of every fragment that survived line filtering
/// across *all* processed pages, so that cell `[i][j]` means the same
/// logical column on every page of a multi-page table. This is the one
/// place the pipeline intentionally breaks from per-page independence.
pub fn column_bands<'a, I>(fragments: I) -> BandSet
where
    I: IntoIterator<Item = &'a TextFragment>,
{
    let mut builder = RangeBuilder::new();
    builder.extend(fragments.into_iter().map(TextFragment::x_interval));
    builder.build()
}
