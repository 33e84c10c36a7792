//! Fixed-width text blocks, one per dashboard panel.
//!
//! Each block is built from a [`Sample`](crate::system::sample::Sample) alone, so any
//! panel can be rebuilt without the others.

pub mod cache;
pub mod connections;
pub mod disknet;
pub mod gauges;
pub mod processes;
pub mod system_info;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Span, Text};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::ui::theme::Theme;

pub use processes::ProcessTable;

pub const GAUGE_WIDTH: usize = 10;
pub const WIDE_BAR_WIDTH: usize = 20;

#[derive(Debug, Clone)]
pub enum PanelBody {
    Text(Text<'static>),
    Table(ProcessTable),
}

#[derive(Debug, Clone)]
pub struct Panel {
    pub title: Option<&'static str>,
    pub padding: u16,
    pub body: PanelBody,
}

impl Panel {
    pub fn text(body: Text<'static>) -> Self {
        Panel {
            title: None,
            padding: 1,
            body: PanelBody::Text(body),
        }
    }

    pub fn table(title: &'static str, table: ProcessTable) -> Self {
        Panel {
            title: Some(title),
            padding: 0,
            body: PanelBody::Table(table),
        }
    }
}

/// Bars only accept percentages in `[0, 100]`; NaN reads as empty.
pub fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

pub fn render(frame: &mut Frame, area: Rect, panel: &Panel, theme: &Theme) {
    let mut block = Block::bordered()
        .border_style(theme.border)
        .padding(Padding::horizontal(panel.padding));
    if let Some(title) = panel.title {
        block = block
            .title(Span::styled(title, theme.label))
            .title_alignment(Alignment::Center);
    }

    match &panel.body {
        PanelBody::Text(text) => {
            frame.render_widget(Paragraph::new(text.clone()).block(block), area);
        }
        PanelBody::Table(table) => {
            frame.render_widget(table.widget(theme).block(block), area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_bars_in_range() {
        assert_eq!(clamp_percent(-3.0), 0.0);
        assert_eq!(clamp_percent(42.5), 42.5);
        assert_eq!(clamp_percent(180.0), 100.0);
        assert_eq!(clamp_percent(f64::NAN), 0.0);
    }
}
