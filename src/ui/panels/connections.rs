use ratatui::text::{Line, Text};

use crate::format::pad_right;
use crate::system::sample::ConnectionInfo;
use crate::ui::theme::Theme;

pub const MAX_CONNECTIONS: usize = 8;
pub const CONNECTION_WIDTH: usize = 35;
/// Per-socket traffic is not tracked; the size column is a constant.
pub const CONNECTION_SIZE_KB: u32 = 0;
const EMPTY_MESSAGE: &str = "No active connections";

pub fn connection_rows(conn: &ConnectionInfo) -> [String; 3] {
    [
        format!(
            "IN:  {:<15}:{:<5}",
            conn.remote_addr.to_string(),
            conn.remote_port
        ),
        format!(
            "OUT: {:<15}:{:<5}",
            conn.local_addr.to_string(),
            conn.local_port
        ),
        format!(
            "PROTO: {:<4}  SIZE: {:>4}KB",
            conn.protocol.label(),
            CONNECTION_SIZE_KB
        ),
    ]
}

/// Box-drawn card around `rows`. Every line is `CONNECTION_WIDTH + 3` cells wide.
pub fn card(rows: &[String]) -> Vec<String> {
    let rule = "═".repeat(CONNECTION_WIDTH + 1);
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!("╔{rule}╗"));
    for row in rows {
        lines.push(format!("║ {}║", pad_right(row, CONNECTION_WIDTH)));
    }
    lines.push(format!("╚{rule}╝"));
    lines
}

pub fn empty_card() -> [String; 3] {
    let rule = "═".repeat(CONNECTION_WIDTH);
    [
        format!("╔{rule}╗"),
        format!("║ {}║", pad_right(EMPTY_MESSAGE, CONNECTION_WIDTH - 1)),
        format!("╚{rule}╝"),
    ]
}

pub fn connections_block(connections: &[ConnectionInfo], theme: &Theme) -> Text<'static> {
    let mut lines = vec![
        Line::styled("NETWORK CONNECTIONS", theme.label),
        Line::default(),
    ];

    if connections.is_empty() {
        lines.extend(empty_card().into_iter().map(|l| Line::styled(l, theme.dim)));
        return Text::from(lines);
    }

    for conn in connections.iter().take(MAX_CONNECTIONS) {
        lines.extend(
            card(&connection_rows(conn))
                .into_iter()
                .map(|l| Line::styled(l, theme.accent)),
        );
        lines.push(Line::default());
    }
    Text::from(lines)
}
