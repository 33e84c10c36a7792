use ratatui::layout::Constraint;
use ratatui::text::Line;
use ratatui::widgets::{Cell, Row, Table};

use crate::system::sample::ProcessInfo;
use crate::ui::theme::Theme;

pub const MAX_PROCESSES: usize = 15;

const HEADER: [&str; 4] = ["NAME", "PID", "MEM%", "CPU%"];
const WIDTHS: [Constraint; 4] = [
    Constraint::Length(12),
    Constraint::Length(8),
    Constraint::Length(6),
    Constraint::Length(6),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRow {
    pub name: String,
    pub pid: String,
    pub mem: String,
    pub cpu: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessTable {
    pub rows: Vec<ProcessRow>,
}

/// Highest CPU first. Missing or NaN readings count as zero, and ties keep
/// their enumeration order.
pub fn rank_processes(processes: &[ProcessInfo]) -> Vec<&ProcessInfo> {
    let mut ranked: Vec<&ProcessInfo> = processes.iter().collect();
    ranked.sort_by(|a, b| b.cpu_or_zero().total_cmp(&a.cpu_or_zero()));
    ranked.truncate(MAX_PROCESSES);
    ranked
}

pub fn process_table(processes: &[ProcessInfo]) -> ProcessTable {
    let rows = rank_processes(processes)
        .into_iter()
        .map(|p| ProcessRow {
            name: p.name.clone(),
            pid: p.pid.to_string(),
            mem: format!("{:.1}", p.mem_or_zero()),
            cpu: format!("{:.1}", p.cpu_or_zero()),
        })
        .collect();
    ProcessTable { rows }
}

impl ProcessTable {
    pub fn widget(&self, theme: &Theme) -> Table<'static> {
        let header = Row::new(
            HEADER
                .iter()
                .enumerate()
                .map(|(i, h)| numeric_cell(h.to_string(), i > 0)),
        )
        .style(theme.label);

        let rows = self.rows.iter().map(|row| {
            Row::new([
                Cell::from(row.name.clone()).style(theme.table_name),
                numeric_cell(row.pid.clone(), true).style(theme.table_pid),
                numeric_cell(row.mem.clone(), true).style(theme.value),
                numeric_cell(row.cpu.clone(), true).style(theme.value),
            ])
        });

        Table::new(rows, WIDTHS).header(header).column_spacing(1)
    }
}

fn numeric_cell(text: String, right: bool) -> Cell<'static> {
    let line = Line::from(text);
    if right {
        Cell::from(line.right_aligned())
    } else {
        Cell::from(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proc(name: &str, pid: u32, cpu: Option<f32>) -> ProcessInfo {
        ProcessInfo {
            name: name.to_string(),
            pid,
            mem_percent: Some(1.0),
            cpu_percent: cpu,
        }
    }

    #[test]
    fn ranks_by_cpu_descending() {
        let procs = vec![
            proc("a", 1, Some(5.0)),
            proc("b", 2, Some(90.0)),
            proc("c", 3, Some(20.0)),
        ];
        let names: Vec<_> = rank_processes(&procs).iter().map(|p| p.pid).collect();
        assert_eq!(names, vec![2, 3, 1]);
    }

    #[test]
    fn missing_and_nan_cpu_sort_as_zero_and_keep_order() {
        let procs = vec![
            proc("x", 10, None),
            proc("y", 11, Some(f32::NAN)),
            proc("z", 12, Some(0.5)),
            proc("w", 13, Some(0.0)),
        ];
        let pids: Vec<_> = rank_processes(&procs).iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![12, 10, 11, 13]);
    }

    #[test]
    fn table_caps_at_fifteen_rows() {
        let procs: Vec<_> = (0..40).map(|i| proc("p", i, Some(i as f32))).collect();
        let table = process_table(&procs);
        assert_eq!(table.rows.len(), MAX_PROCESSES);
        assert_eq!(table.rows[0].pid, "39");
        assert_eq!(table.rows[0].cpu, "39.0");
    }

    #[test]
    fn empty_input_gives_empty_table() {
        assert!(process_table(&[]).rows.is_empty());
    }

    #[test]
    fn missing_readings_format_as_zero() {
        let p = ProcessInfo {
            name: "idle".to_string(),
            pid: 7,
            mem_percent: None,
            cpu_percent: None,
        };
        let table = process_table(&[p]);
        assert_eq!(table.rows[0].mem, "0.0");
        assert_eq!(table.rows[0].cpu, "0.0");
    }
}
