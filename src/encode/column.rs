use super::lit_cells;

/// Intensity of one lit equalizer cell, picked by how high the cell sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    High,
    Mid,
    Low,
    Off,
}

impl Intensity {
    pub fn glyph(self) -> char {
        match self {
            Intensity::High => '▓',
            Intensity::Mid => '▒',
            Intensity::Low => '░',
            Intensity::Off => ' ',
        }
    }
}

/// A column of `height` cells, listed top to bottom.
///
/// Level `height - 1 - i` (counted from the bottom) is lit when it is below
/// `floor(percent * height / 100)`. Lit cells in the bottom 30% are `High`,
/// up to 60% `Mid`, the rest `Low`.
pub fn vertical_column(percent: f64, height: usize) -> Vec<Intensity> {
    let filled = lit_cells(percent, height);
    let h = height as f64;
    (0..height)
        .map(|i| {
            let level = height - i - 1;
            if level >= filled {
                Intensity::Off
            } else if (level as f64) < h * 0.3 {
                Intensity::High
            } else if (level as f64) < h * 0.6 {
                Intensity::Mid
            } else {
                Intensity::Low
            }
        })
        .collect()
}
