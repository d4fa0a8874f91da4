//! Row band calculation: per-page Y-axis banding with line exclusions.

use std::collections::{BTreeMap, BTreeSet};

use crate::bands::{BandSet, RangeBuilder};
use crate::fragment::TextFragment;

/// Line indices to drop from candidate row bands before assembly.
///
/// Indices are signed: a non-negative index counts from the first band
/// (`0` is the topmost line), a negative index counts from the last
/// (`-1` is the bottom line). Negative indices let a caller exclude, say,
/// a page footer without knowing the page's row count up front.
///
/// Exclusions registered with [`exclude_all_pages`](Self::exclude_all_pages)
/// apply on every page, in addition to any per-page entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineExclusions {
    all_pages: BTreeSet<isize>,
    per_page: BTreeMap<usize, BTreeSet<isize>>,
}

impl LineExclusions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude line `index` on page `page`.
    pub fn exclude(&mut self, page: usize, index: isize) -> &mut Self {
        self.per_page.entry(page).or_default().insert(index);
        self
    }

    /// Exclude line `index` on every page.
    pub fn exclude_all_pages(&mut self, index: isize) -> &mut Self {
        self.all_pages.insert(index);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.all_pages.is_empty() && self.per_page.values().all(BTreeSet::is_empty)
    }

    /// Whether the band at forward index `index` (of `count` bands on
    /// `page`) matches any exclusion, by forward or backward index.
    fn is_excluded(&self, page: usize, index: usize, count: usize) -> bool {
        let forward = index as isize;
        let backward = forward - count as isize;
        let matches = |set: &BTreeSet<isize>| set.contains(&forward) || set.contains(&backward);
        matches(&self.all_pages)
            || self.per_page.get(&page).is_some_and(matches)
    }
}

/// Compute a page's row bands from its fragments, with exclusions applied.
///
/// Feeds every fragment's Y-interval into a fresh [`RangeBuilder`], then
/// drops candidate bands matching the page's exclusions. Zero fragments
/// produce zero bands.
pub fn row_bands(
    fragments: &[TextFragment],
    page: usize,
    exclusions: &LineExclusions,
) -> BandSet {
    let mut builder = RangeBuilder::new();
    builder.extend(fragments.iter().map(TextFragment::y_interval));
    let mut bands = builder.build();

    if !exclusions.is_empty() {
        let count = bands.len();
        bands.retain_indexed(|index| !exclusions.is_excluded(page, index, count));
    }

    bands
}
