use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};

use super::{GAUGE_WIDTH, WIDE_BAR_WIDTH, clamp_percent};
use crate::encode::horizontal_bar;
use crate::system::sample::Sample;
use crate::ui::theme::Theme;

pub const GPU_PERCENT: f32 = 0.0;
/// Memory clock is not readable without root; shown as a fixed placeholder.
pub const RAM_FREQ_MHZ: u32 = 2400;
const AC_BATTERY_PERCENT: f32 = 100.0;

pub fn gauge_block(sample: &Sample, theme: &Theme) -> Text<'static> {
    let battery = sample.battery_percent.unwrap_or(AC_BATTERY_PERCENT);
    let rows = [
        ("CPU", sample.cpu_percent, theme.gauge_bar),
        ("GPU", GPU_PERCENT, theme.gauge_bar),
        ("RAM", sample.mem_percent, theme.gauge_bar),
        ("BAT", battery, theme.battery_bar),
    ];

    let mut lines = Vec::new();
    for (label, percent, bar_style) in rows {
        lines.push(gauge_row(label, percent, bar_style, theme));
        lines.push(Line::default());
    }

    lines.push(Line::from(vec![
        Span::styled("RAM FREQ: ", theme.label),
        Span::styled(format!("{RAM_FREQ_MHZ}MHz"), theme.accent),
    ]));
    if let Some(mhz) = sample.cpu_freq_mhz {
        lines.push(Line::from(vec![
            Span::styled("CPU FREQ: ", theme.label),
            Span::styled(format!("{mhz:.0}MHz"), theme.accent),
        ]));
        lines.push(Line::default());
    }

    lines.push(Line::from(vec![
        Span::styled("RAM SIZE: ", theme.label),
        Span::styled(
            format!("{}GB / {}GB", sample.mem_used_gb, sample.mem_total_gb),
            theme.accent,
        ),
    ]));
    // Whole-GB ratio, so it can disagree with the RAM row above.
    let ram_percent = (sample.mem_used_gb * 100)
        .checked_div(sample.mem_total_gb)
        .unwrap_or(0);
    lines.push(Line::from(vec![
        Span::raw("    "),
        Span::styled(
            horizontal_bar(clamp_percent(ram_percent as f64), WIDE_BAR_WIDTH),
            theme.ram_bar,
        ),
    ]));

    Text::from(lines)
}

fn gauge_row(label: &str, percent: f32, bar_style: Style, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label} "), theme.label),
        Span::styled(format!("{percent:5.1}% "), theme.value),
        Span::styled(
            horizontal_bar(clamp_percent(percent as f64), GAUGE_WIDTH),
            bar_style,
        ),
    ])
}
