//! Band building: merging raw 1-D intervals into a canonical band set.
//!
//! [`RangeBuilder`] accumulates a multiset of intervals and merges them into
//! the minimal sorted set of non-overlapping bands. On the Y axis a band is
//! one table row; on the X axis, one table column.

use crate::geometry::Interval;

/// Accumulates raw intervals and merges them into a [`BandSet`].
///
/// The merge tolerates touching intervals, not just overlapping ones, so
/// glyphs with slight font-metric jitter still land in one band.
///
/// Building is a pure reduction over the accumulated intervals: the builder
/// is consumed by [`build()`](RangeBuilder::build) and no state survives the
/// call.
#[derive(Debug, Default)]
pub struct RangeBuilder {
    intervals: Vec<Interval>,
}

impl RangeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one raw interval.
    pub fn add(&mut self, interval: Interval) {
        self.intervals.push(interval);
    }

    /// Merge the accumulated intervals into a canonical band set.
    ///
    /// Sorts by lower bound ascending (stable), then sweeps once: the
    /// running band is extended while the next interval's lower bound is
    /// ≤ the running band's upper bound; a gap closes the band and opens a
    /// new one. Empty input yields an empty set.
    pub fn build(self) -> BandSet {
        let mut intervals = self.intervals;
        intervals.sort_by(|a, b| a.low.partial_cmp(&b.low).unwrap());

        let mut bands: Vec<Interval> = Vec::new();
        for interval in intervals {
            match bands.last_mut() {
                Some(open) if interval.low <= open.high => {
                    open.high = open.high.max(interval.high);
                }
                _ => bands.push(interval),
            }
        }

        BandSet { bands }
    }
}

impl Extend<Interval> for RangeBuilder {
    fn extend<T: IntoIterator<Item = Interval>>(&mut self, iter: T) {
        self.intervals.extend(iter);
    }
}

/// Ordered, non-overlapping sequence of bands on one axis.
///
/// Invariants (upheld by construction in [`RangeBuilder::build`]): sorted
/// ascending by lower bound; no two bands overlap or touch; the union of
/// the bands equals the union of the inputs that produced them.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BandSet {
    bands: Vec<Interval>,
}

impl BandSet {
    /// Build directly from an interval iterator.
    pub fn from_intervals<I: IntoIterator<Item = Interval>>(intervals: I) -> Self {
        let mut builder = RangeBuilder::new();
        builder.extend(intervals);
        builder.build()
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Interval> {
        self.bands.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.bands.iter()
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.bands
    }

    /// Index of the band that entirely encloses `interval`, if any.
    ///
    /// Because bands never overlap, at most one band can qualify: the last
    /// band starting at or before `interval.low`.
    pub fn enclosing(&self, interval: &Interval) -> Option<usize> {
        let candidate = self
            .bands
            .partition_point(|band| band.low <= interval.low)
            .checked_sub(1)?;
        self.bands[candidate]
            .encloses(interval)
            .then_some(candidate)
    }

    /// Index of the band closest to `interval` (ties resolve to the earlier
    /// band). `None` only when the set is empty.
    pub fn nearest(&self, interval: &Interval) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, band) in self.bands.iter().enumerate() {
            let distance = band.distance_to(interval);
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Drop bands by index, keeping the survivors in order.
    pub(crate) fn retain_indexed(&mut self, mut keep: impl FnMut(usize) -> bool) {
        let mut index = 0;
        self.bands.retain(|_| {
            let kept = keep(index);
            index += 1;
            kept
        });
    }
}

impl<'a> IntoIterator for &'a BandSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.bands.iter()
    }
}
