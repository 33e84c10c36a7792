use ratatui::text::{Line, Text};

use crate::format::{fit_line, format_uptime};
use crate::system::sample::SystemInfo;
use crate::ui::theme::Theme;

pub const INFO_WIDTH: usize = 40;
pub const INFO_KEEP: usize = 37;
const LABEL_WIDTH: usize = 13;
const CPU_MODEL_LEN: usize = 25;

pub fn info_entries(info: &SystemInfo) -> Vec<Option<(&'static str, String)>> {
    let cpu: String = info.cpu_model.chars().take(CPU_MODEL_LEN).collect();
    vec![
        Some((
            "Packages",
            format!("{} ({})", info.package_count, info.package_manager),
        )),
        Some(("Arch", info.arch.clone())),
        Some(("OS", info.os_name.clone())),
        Some(("Kernel", info.kernel.clone())),
        Some(("DE", info.desktop.clone())),
        Some((
            "Display",
            format!("{} @ {}Hz", info.screen_resolution, info.refresh_rate),
        )),
        Some(("Shell", info.shell.clone())),
        Some(("Terminal", info.terminal.clone())),
        None,
        Some(("Uptime", format_uptime(info.uptime_secs))),
        Some(("CPU", cpu)),
        Some((
            "Cores",
            format!(
                "{} cores / {} threads",
                info.physical_cores, info.logical_cores
            ),
        )),
        Some(("RAM", format!("{}GB", info.mem_total_gb))),
        Some(("Hostname", info.hostname.clone())),
        Some(("Local IP", info.local_ip.clone())),
    ]
}

pub fn info_line(label: &str, value: &str) -> String {
    fit_line(
        &format!("{label:<width$}{value}", width = LABEL_WIDTH),
        INFO_WIDTH,
        INFO_KEEP,
    )
}

pub fn system_info_block(info: &SystemInfo, theme: &Theme) -> Text<'static> {
    let mut lines = vec![Line::styled("SYSTEM INFORMATION", theme.label), Line::default()];
    for entry in info_entries(info) {
        match entry {
            Some((label, value)) => {
                lines.push(Line::styled(info_line(label, &value), theme.value))
            }
            None => lines.push(Line::default()),
        }
    }
    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use unicode_width::UnicodeWidthStr;

    use super::*;

    #[test]
    fn lines_are_exactly_forty_cells() {
        let info = SystemInfo {
            os_name: "Some Distribution With A Remarkably Long Pretty Name 24.04".to_string(),
            ..SystemInfo::default()
        };
        for (label, value) in info_entries(&info).into_iter().flatten() {
            assert_eq!(info_line(label, &value).width(), INFO_WIDTH);
        }
    }

    #[test]
    fn overflowing_value_is_cut_with_ellipsis() {
        let line = info_line("OS", &"z".repeat(40));
        assert_eq!(line.width(), INFO_WIDTH);
        assert!(line.ends_with("..."));
        assert!(line.starts_with(&format!("{:<13}zzz", "OS")));
    }

    #[test]
    fn cpu_model_is_capped() {
        let info = SystemInfo {
            cpu_model: "AMD Ryzen 9 7950X 16-Core Processor".to_string(),
            ..SystemInfo::default()
        };
        let cpu = info_entries(&info)
            .into_iter()
            .flatten()
            .find(|(label, _)| *label == "CPU")
            .map(|(_, v)| v);
        assert_eq!(cpu.as_deref(), Some("AMD Ryzen 9 7950X 16-Core"));
    }

    #[test]
    fn uptime_follows_separator() {
        let entries = info_entries(&SystemInfo::default());
        let gap = entries.iter().position(Option::is_none);
        assert_eq!(gap, Some(8));
        assert!(matches!(entries[9], Some(("Uptime", _))));
    }
}
