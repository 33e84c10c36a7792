use ratatui::text::{Line, Span, Text};

use super::{WIDE_BAR_WIDTH, clamp_percent};
use crate::encode::{Intensity, horizontal_bar, vertical_column};
use crate::system::sample::Sample;
use crate::ui::theme::{Flow, Theme};

pub const EQUALIZER_SEGMENTS: usize = 10;
pub const EQUALIZER_HEIGHT: usize = 5;

pub fn disk_network_block(sample: &Sample, theme: &Theme) -> Text<'static> {
    let lines = vec![
        Line::styled("DISK USAGE", theme.label),
        Line::from(vec![
            Span::styled("Total: ", theme.value),
            Span::styled(format!("{}G ", sample.disk_total_gb), theme.accent),
            Span::styled("Used: ", theme.value),
            Span::styled(format!("{}G", sample.disk_used_gb), theme.accent),
        ]),
        Line::from(vec![
            Span::styled(
                horizontal_bar(clamp_percent(sample.disk_percent as f64), WIDE_BAR_WIDTH),
                theme.accent,
            ),
            Span::styled(format!(" {:.0}%", sample.disk_percent), theme.value),
        ]),
        Line::default(),
        Line::styled("NETWORK", theme.label),
        Line::from(vec![
            Span::styled("IF: ", theme.value),
            Span::styled(format!("{:<8} ", sample.network_interface), theme.accent),
            Span::styled("SSID: ", theme.value),
            Span::styled(sample.ssid.clone(), theme.accent),
        ]),
        Line::default(),
        flow_row("IN  ", sample.throughput.in_kbs, Flow::In, theme),
        flow_row("OUT ", sample.throughput.out_kbs, Flow::Out, theme),
    ];
    Text::from(lines)
}

/// Segment `i` is driven by `speed / (10 * (i + 1))`, so higher segments need
/// proportionally more traffic to light up.
pub fn equalizer(speed_kbs: f64) -> Vec<Vec<Intensity>> {
    (0..EQUALIZER_SEGMENTS)
        .map(|i| {
            let percent = speed_kbs / (10.0 * (i + 1) as f64);
            vertical_column(clamp_percent(percent), EQUALIZER_HEIGHT)
        })
        .collect()
}

fn flow_row(label: &'static str, speed_kbs: f64, flow: Flow, theme: &Theme) -> Line<'static> {
    let mut spans = vec![
        Span::styled(label, theme.value),
        Span::styled(format!("{:>5}KB/s ", speed_kbs as i64), theme.accent),
    ];
    // Each column is laid out sideways: its cells run left to right, top cell first.
    for column in equalizer(speed_kbs) {
        for cell in column {
            spans.push(Span::styled(
                cell.glyph().to_string(),
                theme.flow_style(cell, flow),
            ));
        }
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
