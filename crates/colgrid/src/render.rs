//! Grid rendering and the write/print entry points.
//!
//! [`GridSpec`] carries the layout configuration (currently just the
//! inter-column padding) explicitly, instead of reading hidden process
//! state at render time. The free functions are shorthands that start from
//! the default padding; the `print_*` variants additionally source the
//! width from the attached terminal and write to stdout.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::fit::{fit, ColumnSpans, Layout};
use crate::grid::Grid;
use crate::measure::display_widths;
use crate::padding::column_padding;

/// Layout configuration threaded through formatting calls.
///
/// # Example
///
/// ```rust
/// use colgrid::GridSpec;
///
/// let spec = GridSpec::new().padding(1);
/// let mut out = Vec::new();
/// spec.write_auto(&mut out, 5, &["x"; 10]).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "x x x\nx x x\nx x x\nx \n",
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    padding: usize,
}

impl GridSpec {
    /// New spec using the current default column padding
    /// ([`column_padding`]).
    pub fn new() -> Self {
        GridSpec {
            padding: column_padding(),
        }
    }

    /// Set the number of blank characters between adjacent columns.
    #[must_use]
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Write `items` in as many columns as fit within `width`.
    ///
    /// Uses the minimum number of columns that attains the minimum row
    /// count. A `width` of zero falls back to one item per line, as does a
    /// list where no multi-column layout fits; items wider than the budget
    /// are written anyway, never truncated.
    pub fn write_auto<W, S>(&self, w: &mut W, width: usize, items: &[S]) -> Result<(), GridError>
    where
        W: Write,
        S: AsRef<str>,
    {
        let widths = display_widths(items);
        let layout = fit(&widths, self.padding, width);
        write_layout(w, items, &widths, &layout)
    }

    /// Write `items` in exactly `cols` columns.
    ///
    /// The column count is honored as given: spans come from the content
    /// and `width` is not used to repack, so rows may overflow a narrow
    /// surface. A `width` of zero still falls back to one item per line.
    ///
    /// Fails with [`GridError::InvalidColumnCount`] when `cols` is zero.
    pub fn write_fixed<W, S>(
        &self,
        w: &mut W,
        width: usize,
        cols: usize,
        items: &[S],
    ) -> Result<(), GridError>
    where
        W: Write,
        S: AsRef<str>,
    {
        if cols == 0 {
            return Err(GridError::InvalidColumnCount);
        }

        let widths = display_widths(items);
        let layout = if width == 0 || cols == 1 || items.len() <= 1 {
            Layout::SingleColumn
        } else {
            let grid = Grid::from_cols(items.len(), cols);
            Layout::Columns(ColumnSpans::from_grid(grid, &widths, self.padding))
        };
        write_layout(w, items, &widths, &layout)
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::new()
    }
}

/// Emit `items` according to `layout`.
///
/// Single-column layouts are one item per line with no padding. Otherwise
/// the grid is walked row-major: occupied cells emit the item padded to the
/// column span, vacant cells in the short final row emit nothing. Each full
/// row ends with a line terminator at the last column; a short final row
/// never reaches that column, so it gets its terminator afterwards.
fn write_layout<W, S>(
    w: &mut W,
    items: &[S],
    widths: &[usize],
    layout: &Layout,
) -> Result<(), GridError>
where
    W: Write,
    S: AsRef<str>,
{
    let spans = match layout.columns() {
        Some(spans) if spans.len() > 1 => spans,
        _ => {
            for item in items {
                writeln!(w, "{}", item.as_ref())?;
            }
            return Ok(());
        }
    };

    let cols = spans.len();
    let grid = Grid::from_cols(items.len(), cols);
    for cell in grid.cells() {
        if cell.occupied {
            let item = items[cell.index].as_ref();
            // Spans always cover the widest item in their column.
            let pad = spans.as_slice()[cell.col] - widths[cell.index];
            write!(w, "{}{}", item, " ".repeat(pad))?;
            if cell.col == cols - 1 {
                writeln!(w)?;
            }
        }
    }
    if items.len() % cols != 0 {
        writeln!(w)?;
    }
    Ok(())
}

/// Write `items` as an auto-fit grid, using the default padding.
pub fn write_auto_grid<W, S>(w: &mut W, width: usize, items: &[S]) -> Result<(), GridError>
where
    W: Write,
    S: AsRef<str>,
{
    GridSpec::new().write_auto(w, width, items)
}

/// Write `items` in exactly `cols` columns, using the default padding.
pub fn write_grid<W, S>(w: &mut W, width: usize, cols: usize, items: &[S]) -> Result<(), GridError>
where
    W: Write,
    S: AsRef<str>,
{
    GridSpec::new().write_fixed(w, width, cols, items)
}

/// Width of the attached terminal, or 80 when there is none.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Print `items` to stdout as an auto-fit grid sized to the terminal.
pub fn print_auto_grid<S: AsRef<str>>(items: &[S]) -> Result<(), GridError> {
    write_auto_grid(&mut io::stdout(), terminal_width(), items)
}

/// Print `items` to stdout in exactly `cols` columns sized to the terminal.
pub fn print_grid<S: AsRef<str>>(cols: usize, items: &[S]) -> Result<(), GridError> {
    write_grid(&mut io::stdout(), terminal_width(), cols, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding::set_column_padding;
    use serial_test::serial;

    fn render_auto(spec: GridSpec, width: usize, items: &[&str]) -> String {
        let mut out = Vec::new();
        spec.write_auto(&mut out, width, items).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn one_row_grid() {
        let spec = GridSpec::new().padding(2);
        assert_eq!(render_auto(spec, 80, &["a", "bb", "ccc"]), "a  bb  ccc\n");
    }

    #[test]
    fn short_final_row_gets_one_terminator() {
        // Two columns, spans [4, 2]: "cc" sits alone on the last row.
        let spec = GridSpec::new().padding(2);
        assert_eq!(
            render_auto(spec, 7, &["aa", "bb", "cc"]),
            "aa  bb\ncc  \n"
        );
    }

    #[test]
    fn empty_input_writes_nothing() {
        let spec = GridSpec::new().padding(2);
        assert_eq!(render_auto(spec, 80, &[]), "");
    }

    #[test]
    fn zero_width_is_one_item_per_line() {
        let spec = GridSpec::new().padding(2);
        assert_eq!(render_auto(spec, 0, &["a", "bb"]), "a\nbb\n");
    }

    #[test]
    fn oversized_items_are_never_truncated() {
        let spec = GridSpec::new().padding(2);
        assert_eq!(render_auto(spec, 3, &["alpha", "b"]), "alpha\nb\n");
    }

    #[test]
    fn fixed_grid_honors_the_column_count() {
        let spec = GridSpec::new().padding(1);
        let mut out = Vec::new();
        spec.write_fixed(&mut out, 80, 2, &["a", "bb", "ccc", "d"])
            .unwrap();
        // Spans [4, 2]: widest of each column plus one padding on the first.
        assert_eq!(String::from_utf8(out).unwrap(), "a   bb\nccc d \n");
    }

    #[test]
    fn fixed_grid_rejects_zero_columns() {
        let spec = GridSpec::new();
        let mut out = Vec::new();
        let err = spec.write_fixed(&mut out, 80, 0, &["a"]).unwrap_err();
        assert!(matches!(err, GridError::InvalidColumnCount));
        assert!(out.is_empty());
    }

    #[test]
    fn fixed_grid_with_one_column_skips_padding() {
        let spec = GridSpec::new().padding(2);
        let mut out = Vec::new();
        spec.write_fixed(&mut out, 80, 1, &["a", "bb"]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\nbb\n");
    }

    #[test]
    fn order_is_preserved_row_major() {
        let spec = GridSpec::new().padding(1);
        let rendered = render_auto(spec, 11, &["1", "2", "3", "4", "5", "6"]);
        let flattened: Vec<&str> = rendered.split_whitespace().collect();
        assert_eq!(flattened, ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn write_failures_propagate() {
        struct FailingSink;
        impl Write for FailingSink {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let spec = GridSpec::new().padding(2);
        let err = spec
            .write_auto(&mut FailingSink, 80, &["a", "b"])
            .unwrap_err();
        assert!(matches!(err, GridError::Io(_)));
    }

    #[test]
    #[serial]
    fn new_spec_picks_up_the_default_padding() {
        let prev = column_padding();
        set_column_padding(1);
        let rendered = render_auto(GridSpec::new(), 80, &["a", "b"]);
        set_column_padding(prev);
        assert_eq!(rendered, "a b\n");
    }
}
