//! Column-count search and per-column width allocation.
//!
//! Given the display widths of a list of items, a padding amount, and a
//! horizontal budget, [`fit`] finds the layout with the fewest rows whose
//! every row stays within the budget, using the fewest columns that attain
//! that row count. Items are never reordered; column grouping follows the
//! row-major mapping of [`Grid`].

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Per-column width allocation for a multi-column layout.
///
/// Every span except the last includes the inter-column padding, so summing
/// the spans gives the total row width.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpans {
    spans: Vec<usize>,
}

impl ColumnSpans {
    /// Measure the widest item in each column of `grid`, then add `padding`
    /// to every column but the last.
    ///
    /// `widths` must hold one entry per item in the grid.
    pub fn from_grid(grid: Grid, widths: &[usize], padding: usize) -> Self {
        let mut spans = vec![0usize; grid.cols()];
        for cell in grid.cells() {
            if cell.occupied && widths[cell.index] > spans[cell.col] {
                spans[cell.col] = widths[cell.index];
            }
        }
        let last = spans.len() - 1;
        for span in &mut spans[..last] {
            *span += padding;
        }
        ColumnSpans { spans }
    }

    /// Span of a specific column.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.spans.get(index).copied()
    }

    /// Total row width, padding included.
    pub fn total(&self) -> usize {
        self.spans.iter().sum()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Spans as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.spans
    }
}

/// Outcome of the column-count search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// One item per line; no packing applies.
    SingleColumn,
    /// Multi-column allocation whose rows fit the budget.
    Columns(ColumnSpans),
}

impl Layout {
    /// Column spans of a multi-column layout, if this is one.
    pub fn columns(&self) -> Option<&ColumnSpans> {
        match self {
            Layout::SingleColumn => None,
            Layout::Columns(spans) => Some(spans),
        }
    }
}

/// Find the column layout that minimizes rows within `budget`.
///
/// `widths` are per-item display widths in item order; `padding` is the
/// blank space between adjacent columns. Candidate column counts from 2 up
/// to the item count are all examined: row-major regrouping can make a
/// layout with more columns narrower than one with fewer, so the scan does
/// not stop at the first candidate that overflows. A candidate is only
/// considered when it strictly reduces the row count, which makes the
/// chosen layout the one with the fewest columns among those attaining the
/// minimum row count.
///
/// Returns [`Layout::SingleColumn`] when `budget` is zero, when there are
/// fewer than two items, or when no multi-column layout fits.
pub fn fit(widths: &[usize], padding: usize, budget: usize) -> Layout {
    if budget == 0 {
        return Layout::SingleColumn;
    }

    let n = widths.len();
    let mut best_rows = n;
    let mut best = None;

    for cols in 2..=n {
        let grid = Grid::from_cols(n, cols);
        if grid.rows() >= best_rows {
            continue;
        }

        let spans = ColumnSpans::from_grid(grid, widths, padding);
        if spans.total() > budget {
            continue;
        }

        best_rows = grid.rows();
        best = Some(spans);
    }

    match best {
        Some(spans) => Layout::Columns(spans),
        None => Layout::SingleColumn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_single_column() {
        assert_eq!(fit(&[], 2, 80), Layout::SingleColumn);
    }

    #[test]
    fn one_item_is_single_column() {
        assert_eq!(fit(&[7], 2, 80), Layout::SingleColumn);
    }

    #[test]
    fn zero_budget_is_single_column() {
        assert_eq!(fit(&[1, 1, 1, 1], 2, 0), Layout::SingleColumn);
    }

    #[test]
    fn nothing_fits_falls_back_to_single_column() {
        // "alpha" alone is wider than the budget; no packing is attempted.
        assert_eq!(fit(&[5, 1], 2, 3), Layout::SingleColumn);
    }

    #[test]
    fn wide_budget_packs_into_one_row() {
        // ["a", "bb", "ccc"] at width 80: one row of three columns, padding
        // added to every span but the last.
        let layout = fit(&[1, 2, 3], 2, 80);
        let spans = layout.columns().expect("multi-column layout");
        assert_eq!(spans.as_slice(), &[3, 4, 3]);
        assert_eq!(spans.total(), 10);
    }

    #[test]
    fn tight_budget_packs_as_many_columns_as_fit() {
        // Ten 1-char items, padding 1, budget 5: c columns need
        // c + (c - 1) <= 5, so three columns and four rows.
        let widths = [1; 10];
        let layout = fit(&widths, 1, 5);
        let spans = layout.columns().expect("multi-column layout");
        assert_eq!(spans.as_slice(), &[2, 2, 1]);
        assert_eq!(spans.total(), 5);
    }

    #[test]
    fn fewest_columns_win_among_equal_row_counts() {
        // Three items in one row: both c=2 (two rows) and c=3 (one row) are
        // feasible; the minimum row count is one, reached first at c=3.
        let layout = fit(&[1, 1, 1], 2, 80);
        assert_eq!(layout.columns().map(ColumnSpans::len), Some(3));
    }

    #[test]
    fn scan_continues_past_an_overflowing_candidate() {
        // With padding 0 and budget 13: c=2 groups as [5, 1] (total 6,
        // three rows), c=3 regroups to [5, 5, 5] (total 15, over budget),
        // but c=4 regroups to [5, 1, 5, 1] (total 12, two rows). Stopping
        // at the first overflow would miss it.
        let widths = [5, 1, 5, 1, 5, 1];
        let layout = fit(&widths, 0, 13);
        let spans = layout.columns().expect("multi-column layout");
        assert_eq!(spans.as_slice(), &[5, 1, 5, 1]);
    }

    #[test]
    fn spans_cover_the_widest_item_per_column() {
        let widths = [3, 1, 4, 1, 5];
        let layout = fit(&widths, 2, 40);
        let spans = layout.columns().expect("multi-column layout");
        let grid = Grid::from_cols(widths.len(), spans.len());
        for cell in grid.cells() {
            if cell.occupied {
                assert!(spans.get(cell.col).unwrap() >= widths[cell.index]);
            }
        }
    }

    #[test]
    fn column_spans_accessors() {
        let grid = Grid::from_cols(4, 2);
        let spans = ColumnSpans::from_grid(grid, &[1, 2, 3, 4], 2);
        assert_eq!(spans.get(0), Some(5));
        assert_eq!(spans.get(1), Some(4));
        assert_eq!(spans.get(2), None);
        assert_eq!(spans.len(), 2);
        assert!(!spans.is_empty());
        assert_eq!(spans.total(), 9);
    }
}
