//! # colgrid — ls-style column grids for terminal text
//!
//! `colgrid` arranges a list of short strings into a column-aligned grid
//! that fits a fixed-width output surface, the way directory listers lay
//! out file names. Given the available width it picks the minimum number
//! of rows (a near-maximal number of columns) such that every row fits,
//! then writes the list padded into aligned columns.
//!
//! ## Core Concepts
//!
//! - [`Grid`]: row-major mapping between linear item indices and
//!   (row, column) cells
//! - [`fit`] / [`Layout`]: the column-count search and its result
//! - [`GridSpec`]: layout configuration (inter-column padding) threaded
//!   through formatting calls
//! - [`display_width`]: item width as a codepoint count
//!
//! ## Quick Start
//!
//! ```rust
//! use colgrid::write_auto_grid;
//!
//! let items = ["alpha", "beta", "gamma", "delta"];
//! let mut out = Vec::new();
//! write_auto_grid(&mut out, 30, &items).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "alpha  beta  gamma  delta\n",
//! );
//! ```
//!
//! With a tighter width the same list folds into more rows:
//!
//! ```rust
//! use colgrid::write_auto_grid;
//!
//! let items = ["alpha", "beta", "gamma", "delta"];
//! let mut out = Vec::new();
//! write_auto_grid(&mut out, 14, &items).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "alpha  beta \ngamma  delta\n",
//! );
//! ```
//!
//! ## Degenerate inputs
//!
//! None of the edge cases are errors: an empty list writes nothing, a zero
//! width falls back to one item per line, and items wider than the budget
//! are written in full rather than truncated. The only failure modes are a
//! zero column count in the fixed-column variant and write errors from the
//! sink, both reported through [`GridError`].
//!
//! ## Convenience printers
//!
//! [`print_auto_grid`] and [`print_grid`] size the grid to the attached
//! terminal (width 80 when there is none) and write to stdout.

mod error;
mod fit;
mod grid;
mod measure;
mod padding;
mod render;

pub use error::GridError;
pub use fit::{fit, ColumnSpans, Layout};
pub use grid::{Cell, Cells, Grid};
pub use measure::{display_width, display_widths};
pub use padding::{column_padding, set_column_padding};
pub use render::{
    print_auto_grid, print_grid, terminal_width, write_auto_grid, write_grid, GridSpec,
};
