//! Row-major grid index mapping.
//!
//! A [`Grid`] maps linear item indices to (row, column) positions for a
//! fixed column count, and back. It is the shared geometry used both by the
//! column fitter (to group items per column) and by the renderer (to know
//! where padding and line breaks go). Pure and stateless; the only data is
//! the item count and the column count.

/// A row-major grid over `items` linear indices, `cols` columns wide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    items: usize,
    cols: usize,
}

impl Grid {
    /// Create a grid holding `items` entries in `cols` columns.
    ///
    /// # Panics
    ///
    /// Panics if `items` or `cols` is zero. Both are contract violations:
    /// an empty list never reaches the grid, and a zero column count is
    /// rejected before layout starts.
    pub fn from_cols(items: usize, cols: usize) -> Self {
        assert!(items > 0, "grid needs at least one item");
        assert!(cols > 0, "grid needs at least one column");
        Grid { items, cols }
    }

    /// Number of items mapped into the grid.
    pub fn items(&self) -> usize {
        self.items
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows: `ceil(items / cols)`.
    ///
    /// The last row is short whenever `items % cols != 0`.
    pub fn rows(&self) -> usize {
        self.items.div_ceil(self.cols)
    }

    /// (row, column) position of the item at linear index `index`.
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    /// Row-major iterator over the full `rows * cols` rectangle.
    ///
    /// Cells past the last item carry `occupied == false`, so callers can
    /// iterate the rectangle uniformly and skip output for the vacant tail
    /// of a short final row. The iterator is restartable: each call starts
    /// a fresh pass with no state beyond the grid and a cursor.
    pub fn cells(&self) -> Cells {
        Cells {
            grid: *self,
            cursor: 0,
        }
    }
}

/// One cell of a [`Grid`], yielded by [`Grid::cells`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
    /// Linear index: `row * cols + col`.
    pub index: usize,
    /// Whether an item maps to this cell (`index < items`).
    pub occupied: bool,
}

/// Row-major iterator over grid cells.
#[derive(Clone, Debug)]
pub struct Cells {
    grid: Grid,
    cursor: usize,
}

impl Iterator for Cells {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.cursor >= self.grid.rows() * self.grid.cols {
            return None;
        }
        let index = self.cursor;
        self.cursor += 1;
        let (row, col) = self.grid.position(index);
        Some(Cell {
            row,
            col,
            index,
            occupied: index < self.grid.items,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.grid.rows() * self.grid.cols).saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells {}
