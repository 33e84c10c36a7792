use ratatui::text::{Line, Span, Text};

use crate::encode::grid_heatmap;
use crate::system::sample::Sample;
use crate::ui::theme::Theme;

pub const GRID_SIZE: usize = 5;

pub fn cache_block(sample: &Sample, theme: &Theme) -> Text<'static> {
    let mut lines = vec![
        Line::styled("CPU CACHE", theme.label),
        Line::styled(format!("{} KB", sample.cache_size_kb), theme.value),
        Line::from(vec![
            Span::styled("TEMP: ", theme.label),
            Span::styled(format!("{:.1}°C", sample.cpu_temp), theme.accent),
        ]),
        Line::default(),
    ];

    for row in grid_heatmap(sample.cache_size_kb, GRID_SIZE, GRID_SIZE) {
        let spans: Vec<Span<'static>> = row
            .into_iter()
            .flat_map(|tier| {
                [
                    Span::styled(tier.glyph().to_string(), theme.grid_style(tier)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    Text::from(lines)
}
