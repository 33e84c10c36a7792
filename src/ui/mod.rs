pub mod layout;
pub mod panels;
pub mod theme;


use ratatui::Frame;
use ratatui::layout::{Layout, Rect};

use crate::ui::layout::LayoutNode;
use crate::ui::theme::Theme;

pub fn draw(frame: &mut Frame, layout: &LayoutNode, theme: &Theme) {
    let area = frame.area();
    draw_node(frame, area, layout, theme);
}

fn draw_node(frame: &mut Frame, area: Rect, node: &LayoutNode, theme: &Theme) {
    match node {
        LayoutNode::Panel { panel, .. } => panels::render(frame, area, panel, theme),
        LayoutNode::Split {
            direction,
            children,
        } => {
            let chunks = Layout::default()
                .direction(*direction)
                .constraints(children.iter().map(|(size, _)| size.constraint()))
                .split(area);
            for ((_, child), chunk) in children.iter().zip(chunks.iter()) {
                draw_node(frame, *chunk, child, theme);
            }
        }
    }
}
