//! Glyph encodings for scalar and ranked values.
//!
//! Everything in here is pure: no terminal, no styling, no system access.
//! Inputs are taken as-is. Out-of-range percentages are tolerated and may
//! produce over-long or empty output, but never panic.

pub mod bar;
pub mod column;
pub mod grid;

pub use bar::horizontal_bar;
pub use column::{Intensity, vertical_column};
pub use grid::{GridTier, grid_heatmap};

/// Overflowing runs stop at this many times the requested cell count.
pub const OVERFLOW_LIMIT: usize = 10;

/// Number of cells lit for `percent` of `cells`, truncated toward zero.
///
/// Negative and non-finite inputs light nothing.
pub(crate) fn lit_cells(percent: f64, cells: usize) -> usize {
    let raw = percent * cells as f64 / 100.0;
    if !raw.is_finite() || raw <= 0.0 {
        0
    } else {
        (raw as usize).min(cells.saturating_mul(OVERFLOW_LIMIT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lit_cells_truncates() {
        assert_eq!(lit_cells(55.0, 10), 5);
        assert_eq!(lit_cells(59.9, 10), 5);
        assert_eq!(lit_cells(100.0, 20), 20);
    }

    #[test]
    fn lit_cells_tolerates_garbage() {
        assert_eq!(lit_cells(-40.0, 10), 0);
        assert_eq!(lit_cells(f64::NAN, 10), 0);
        assert_eq!(lit_cells(250.0, 10), 25);
        assert_eq!(lit_cells(f64::INFINITY, 10), 0);
        assert_eq!(lit_cells(1e30, 10), 10 * OVERFLOW_LIMIT);
    }
}
