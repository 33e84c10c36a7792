use ratatui::layout::{Constraint, Direction};

use super::panels::cache::cache_block;
use super::panels::connections::connections_block;
use super::panels::disknet::disk_network_block;
use super::panels::gauges::gauge_block;
use super::panels::processes::process_table;
use super::panels::system_info::system_info_block;
use super::panels::Panel;
use crate::system::sample::Sample;
use crate::ui::theme::Theme;

pub const SYSTEM_TOP_HEIGHT: u16 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    System,
    Network,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Length(u16),
    Ratio(u16),
}

impl Size {
    pub fn constraint(self) -> Constraint {
        match self {
            Size::Length(n) => Constraint::Length(n),
            Size::Ratio(n) => Constraint::Fill(n),
        }
    }
}

#[derive(Debug, Clone)]
pub enum LayoutNode {
    Split {
        direction: Direction,
        children: Vec<(Size, LayoutNode)>,
    },
    Panel {
        name: &'static str,
        panel: Panel,
    },
}

impl LayoutNode {
    fn column(children: Vec<(Size, LayoutNode)>) -> Self {
        LayoutNode::Split {
            direction: Direction::Vertical,
            children,
        }
    }

    fn row(children: Vec<(Size, LayoutNode)>) -> Self {
        LayoutNode::Split {
            direction: Direction::Horizontal,
            children,
        }
    }

    fn leaf(name: &'static str, panel: Panel) -> Self {
        LayoutNode::Panel { name, panel }
    }

    pub fn find(&self, name: &str) -> Option<&Panel> {
        match self {
            LayoutNode::Panel { name: n, panel } => (*n == name).then_some(panel),
            LayoutNode::Split { children, .. } => {
                children.iter().find_map(|(_, child)| child.find(name))
            }
        }
    }

    pub fn panel_names(&self) -> Vec<&'static str> {
        match self {
            LayoutNode::Panel { name, .. } => vec![*name],
            LayoutNode::Split { children, .. } => children
                .iter()
                .flat_map(|(_, child)| child.panel_names())
                .collect(),
        }
    }
}

pub fn build_layout(variant: Variant, sample: &Sample, theme: &Theme) -> LayoutNode {
    match variant {
        Variant::System => {
            let top = LayoutNode::row(vec![
                (
                    Size::Ratio(1),
                    LayoutNode::leaf("cache", Panel::text(cache_block(sample, theme))),
                ),
                (
                    Size::Ratio(2),
                    LayoutNode::leaf("gauges", Panel::text(gauge_block(sample, theme))),
                ),
            ]);
            let bottom = LayoutNode::row(vec![
                (
                    Size::Ratio(1),
                    LayoutNode::leaf("disknet", Panel::text(disk_network_block(sample, theme))),
                ),
                (
                    Size::Ratio(2),
                    LayoutNode::leaf(
                        "processes",
                        Panel::table("PROCESSES", process_table(&sample.processes)),
                    ),
                ),
            ]);
            LayoutNode::column(vec![
                (Size::Length(SYSTEM_TOP_HEIGHT), top),
                (Size::Ratio(1), bottom),
            ])
        }
        Variant::Network => LayoutNode::row(vec![
            (
                Size::Ratio(1),
                LayoutNode::leaf(
                    "connections",
                    Panel::text(connections_block(&sample.connections, theme)),
                ),
            ),
            (
                Size::Ratio(1),
                LayoutNode::leaf(
                    "sysinfo",
                    Panel::text(system_info_block(&sample.system_info, theme)),
                ),
            ),
        ]),
    }
}
