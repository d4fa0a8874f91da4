//! Table assembly: bucketing fragments into row and column bands.
//!
//! The row scan and the column scan are the same algorithm on two axes:
//! [`bucket_into_bands`] groups ordered fragments into ordered bands given
//! a coordinate-interval accessor, and [`assemble_table`] applies it once
//! with row bands over Y-sorted fragments and once per row with column
//! bands over X-resorted fragments.

use crate::bands::BandSet;
use crate::error::{ExtractError, ExtractWarning, WarningCode};
use crate::fragment::{TextFragment, cmp_x_then_y, cmp_y_then_x};
use crate::geometry::Interval;
use crate::table::{Table, TableCell, TableRow};

/// What to do with a fragment that no band encloses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutOfBandPolicy {
    /// Attach the fragment to the nearest band and record a warning.
    #[default]
    NearestBand,
    /// Drop the fragment and record a warning.
    Drop,
    /// Fail the run with [`ExtractError::OutOfBandFragment`].
    Fail,
}

/// Bucket ordered fragments into ordered bands along one axis.
///
/// Returns one bucket per band, in band order; bands that receive no
/// fragments yield empty buckets. `interval_of` selects the axis: the
/// fragment's Y-interval for the row scan, its X-interval for the column
/// scan. Fragments enclosed by no band follow `policy`.
///
/// Zero bands yield zero buckets regardless of policy; the caller maps
/// that case to an empty table.
///
/// # Errors
///
/// Returns [`ExtractError::OutOfBandFragment`] under
/// [`OutOfBandPolicy::Fail`] when a fragment is enclosed by no band.
pub fn bucket_into_bands<'a, F>(
    fragments: &[&'a TextFragment],
    bands: &BandSet,
    interval_of: F,
    policy: OutOfBandPolicy,
    page: usize,
    warnings: &mut Vec<ExtractWarning>,
) -> Result<Vec<Vec<&'a TextFragment>>, ExtractError>
where
    F: Fn(&TextFragment) -> Interval,
{
    if bands.is_empty() {
        return Ok(Vec::new());
    }

    let mut buckets: Vec<Vec<&TextFragment>> = vec![Vec::new(); bands.len()];
    for &fragment in fragments {
        let interval = interval_of(fragment);
        if let Some(index) = bands.enclosing(&interval) {
            buckets[index].push(fragment);
            continue;
        }

        match policy {
            OutOfBandPolicy::NearestBand => {
                // bands is non-empty here, so nearest always resolves.
                if let Some(index) = bands.nearest(&interval) {
                    buckets[index].push(fragment);
                    warnings.push(
                        ExtractWarning::new(
                            WarningCode::OutOfBandFragment,
                            format!("fragment {:?} attached to nearest band", fragment.text),
                        )
                        .with_page(page),
                    );
                }
            }
            OutOfBandPolicy::Drop => {
                warnings.push(
                    ExtractWarning::new(
                        WarningCode::OutOfBandFragment,
                        format!("fragment {:?} outside every band was dropped", fragment.text),
                    )
                    .with_page(page),
                );
            }
            OutOfBandPolicy::Fail => {
                return Err(ExtractError::OutOfBandFragment { page });
            }
        }
    }

    Ok(buckets)
}

/// Assemble one page's table from its fragments and band sets.
///
/// Fragments are sorted by Y (ties by X), bucketed into row bands, then
/// each row's fragments are re-sorted by X (several columns share one
/// visual row) and bucketed into column bands. Cell text concatenates the
/// bucketed fragments' glyphs in left-to-right order, with no injected
/// separator.
///
/// Row and column bands with no fragments still produce empty rows and
/// cells, so every row has exactly `column_bands.len()` cells. A page with
/// zero row bands or zero column bands yields an empty table that still
/// reports the run's shared column count.
///
/// # Errors
///
/// Returns [`ExtractError::OutOfBandFragment`] under
/// [`OutOfBandPolicy::Fail`] when a fragment is enclosed by no band.
pub fn assemble_table(
    page: usize,
    fragments: &[TextFragment],
    row_bands: &BandSet,
    column_bands: &BandSet,
    policy: OutOfBandPolicy,
    warnings: &mut Vec<ExtractWarning>,
) -> Result<Table, ExtractError> {
    let column_count = column_bands.len();
    if row_bands.is_empty() || column_bands.is_empty() {
        return Ok(Table::empty(page, column_count));
    }

    let mut ordered: Vec<&TextFragment> = fragments.iter().collect();
    ordered.sort_by(|a, b| cmp_y_then_x(a, b));

    let row_buckets = bucket_into_bands(
        &ordered,
        row_bands,
        TextFragment::y_interval,
        policy,
        page,
        warnings,
    )?;

    let mut rows = Vec::with_capacity(row_buckets.len());
    for (row_index, mut row_fragments) in row_buckets.into_iter().enumerate() {
        row_fragments.sort_by(|a, b| cmp_x_then_y(a, b));
        let column_buckets = bucket_into_bands(
            &row_fragments,
            column_bands,
            TextFragment::x_interval,
            policy,
            page,
            warnings,
        )?;

        let cells = column_buckets
            .into_iter()
            .enumerate()
            .map(|(column, bucket)| {
                let text: String = bucket.iter().map(|f| f.text.as_str()).collect();
                TableCell::new(column, text)
            })
            .collect();
        rows.push(TableRow::new(row_index, cells));
    }

    Ok(Table::new(page, column_count, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::column_bands;
    use crate::rows::{LineExclusions, row_bands};

    fn frag(text: &str, x: f64, y: f64) -> TextFragment {
        TextFragment::new(text, x, y, 10.0, 5.0)
    }

    /// Bands computed the way the pipeline computes them.
    fn bands_for(fragments: &[TextFragment]) -> (BandSet, BandSet) {
        let rows = row_bands(fragments, 0, &LineExclusions::new());
        let columns = column_bands(fragments.iter());
        (rows, columns)
    }

    fn assemble(fragments: &[TextFragment], policy: OutOfBandPolicy) -> (Table, Vec<ExtractWarning>) {
        let (rows, columns) = bands_for(fragments);
        let mut warnings = Vec::new();
        let table = assemble_table(0, fragments, &rows, &columns, policy, &mut warnings).unwrap();
        (table, warnings)
    }

    #[test]
    fn test_two_by_two_grid() {
        let fragments = vec![
            frag("A", 0.0, 0.0),
            frag("B", 50.0, 0.0),
            frag("C", 0.0, 20.0),
            frag("D", 50.0, 20.0),
        ];
        let (table, warnings) = assemble(&fragments, OutOfBandPolicy::default());
        assert_eq!(table.text_rows(), vec![vec!["A", "B"], vec!["C", "D"]]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_fragments_merge_within_a_cell() {
        // Two runs on the same line and column concatenate left-to-right.
        let fragments = vec![
            frag("wor", 0.0, 0.0),
            frag("ld", 8.0, 0.0),
            frag("x", 50.0, 0.0),
        ];
        let (table, _) = assemble(&fragments, OutOfBandPolicy::default());
        assert_eq!(table.text_rows(), vec![vec!["world", "x"]]);
    }

    #[test]
    fn test_row_merging_of_jittered_y_intervals() {
        // Two [0,5] fragments and one [10,15] fragment: exactly 2 rows,
        // the first merging both [0,5] fragments.
        let fragments = vec![
            frag("a", 0.0, 0.0),
            frag("b", 50.0, 0.0),
            frag("c", 0.0, 10.0),
        ];
        let (table, _) = assemble(&fragments, OutOfBandPolicy::default());
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.text_rows(), vec![vec!["a", "b"], vec!["c", ""]]);
    }

    #[test]
    fn test_empty_bands_produce_empty_cells() {
        // Column 1 is only populated in row 0; row 1 leaves it empty.
        let fragments = vec![frag("A", 0.0, 0.0), frag("B", 50.0, 0.0), frag("C", 0.0, 20.0)];
        let (table, _) = assemble(&fragments, OutOfBandPolicy::default());
        assert_eq!(table.text_rows(), vec![vec!["A", "B"], vec!["C", ""]]);
        for row in &table.rows {
            assert_eq!(row.cells.len(), table.column_count);
        }
    }

    #[test]
    fn test_zero_bands_yield_empty_table() {
        let fragments = vec![frag("stray", 0.0, 0.0)];
        let mut warnings = Vec::new();
        let table = assemble_table(
            3,
            &fragments,
            &BandSet::default(),
            &BandSet::default(),
            OutOfBandPolicy::Fail,
            &mut warnings,
        )
        .unwrap();
        assert!(table.is_empty());
        assert_eq!(table.page, 3);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_insertion_order_independence() {
        let mut fragments = vec![
            frag("A", 0.0, 0.0),
            frag("B", 50.0, 0.0),
            frag("C", 0.0, 20.0),
            frag("D", 50.0, 20.0),
        ];
        let (expected, _) = assemble(&fragments, OutOfBandPolicy::default());
        fragments.reverse();
        let (reversed, _) = assemble(&fragments, OutOfBandPolicy::default());
        assert_eq!(expected, reversed);
    }

    #[test]
    fn test_nearest_band_attachment_warns() {
        // Row bands cover only y [0,5]; the stray fragment at y 30 attaches
        // to that band under the default policy.
        let inside = frag("in", 0.0, 0.0);
        let stray = frag("out", 0.0, 30.0);
        let rows = row_bands(std::slice::from_ref(&inside), 0, &LineExclusions::new());
        let columns = column_bands([&inside, &stray]);
        let fragments = vec![inside, stray];

        let mut warnings = Vec::new();
        let table = assemble_table(
            0,
            &fragments,
            &rows,
            &columns,
            OutOfBandPolicy::NearestBand,
            &mut warnings,
        )
        .unwrap();

        assert_eq!(table.text_rows(), vec![vec!["inout"]]);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, WarningCode::OutOfBandFragment);
        assert_eq!(warnings[0].page, Some(0));
    }

    #[test]
    fn test_drop_policy_omits_stray_fragments() {
        let inside = frag("in", 0.0, 0.0);
        let stray = frag("out", 0.0, 30.0);
        let rows = row_bands(std::slice::from_ref(&inside), 0, &LineExclusions::new());
        let columns = column_bands([&inside, &stray]);
        let fragments = vec![inside, stray];

        let mut warnings = Vec::new();
        let table = assemble_table(
            0,
            &fragments,
            &rows,
            &columns,
            OutOfBandPolicy::Drop,
            &mut warnings,
        )
        .unwrap();

        assert_eq!(table.text_rows(), vec![vec!["in"]]);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_fail_policy_surfaces_error() {
        let inside = frag("in", 0.0, 0.0);
        let stray = frag("out", 0.0, 30.0);
        let rows = row_bands(std::slice::from_ref(&inside), 0, &LineExclusions::new());
        let columns = column_bands([&inside, &stray]);
        let fragments = vec![inside, stray];

        let mut warnings = Vec::new();
        let result = assemble_table(
            5,
            &fragments,
            &rows,
            &columns,
            OutOfBandPolicy::Fail,
            &mut warnings,
        );
        assert_eq!(result, Err(ExtractError::OutOfBandFragment { page: 5 }));
    }
}
