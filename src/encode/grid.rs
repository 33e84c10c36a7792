/// Heat tier of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridTier {
    Hot,
    Warm,
    Lit,
    Cold,
}

impl GridTier {
    pub fn glyph(self) -> char {
        match self {
            GridTier::Hot => '▓',
            GridTier::Warm => '▒',
            GridTier::Lit | GridTier::Cold => '░',
        }
    }
}

/// Decorative `rows x cols` heatmap derived from `seed`.
///
/// Pseudo-usage is `seed % 100`; `filled = floor(usage * rows * cols / 100)`.
/// Cell `idx` (row-major) is `Hot` below `filled * 0.6`, `Warm` below
/// `filled * 0.8`, `Lit` below `filled`, otherwise `Cold`. The output is a pure
/// function of its arguments.
pub fn grid_heatmap(seed: u64, rows: usize, cols: usize) -> Vec<Vec<GridTier>> {
    let usage = seed % 100;
    let cells = (rows * cols) as u64;
    let filled = (usage * cells / 100) as f64;
    (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| {
                    let idx = (row * cols + col) as f64;
                    if idx < filled * 0.6 {
                        GridTier::Hot
                    } else if idx < filled * 0.8 {
                        GridTier::Warm
                    } else if idx < filled {
                        GridTier::Lit
                    } else {
                        GridTier::Cold
                    }
                })
                .collect()
        })
        .collect()
}
