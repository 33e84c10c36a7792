use super::lit_cells;

pub const SOLID: char = '■';
pub const EMPTY: char = '□';

/// `floor(percent * width / 100)` solid glyphs followed by empty glyphs up to `width`.
///
/// The caller clamps `percent` to `[0, 100]`. Above 100 the solid run grows past
/// `width`, up to [`OVERFLOW_LIMIT`](super::OVERFLOW_LIMIT) times it, and no empty
/// glyphs follow.
pub fn horizontal_bar(percent: f64, width: usize) -> String {
    let filled = lit_cells(percent, width);
    let mut bar = String::with_capacity(width * SOLID.len_utf8());
    bar.extend(std::iter::repeat_n(SOLID, filled));
    bar.extend(std::iter::repeat_n(EMPTY, width.saturating_sub(filled)));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_bar() {
        assert_eq!(horizontal_bar(50.0, 10), "■■■■■□□□□□");
    }

    #[test]
    fn empty_and_full() {
        assert_eq!(horizontal_bar(0.0, 4), "□□□□");
        assert_eq!(horizontal_bar(100.0, 4), "■■■■");
    }

    #[test]
    fn overflow_is_lenient() {
        assert_eq!(horizontal_bar(150.0, 4).chars().count(), 6);
        assert_eq!(horizontal_bar(-5.0, 4), "□□□□");
    }

    #[test]
    fn huge_percent_stays_bounded() {
        assert_eq!(horizontal_bar(f64::INFINITY, 10), "□".repeat(10));
        assert_eq!(horizontal_bar(f64::NEG_INFINITY, 10), "□".repeat(10));
        assert_eq!(horizontal_bar(1e30, 10), "■".repeat(100));
    }
}
