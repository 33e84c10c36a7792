use ratatui::style::{Color, Modifier, Style};

use crate::encode::{GridTier, Intensity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    Color,
    Mono,
}

/// Honours `NO_COLOR` and dumb terminals; everything else gets the full palette.
pub fn detect_color_support() -> ColorSupport {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let term = std::env::var("TERM").unwrap_or_default().to_lowercase();
    if no_color || term == "dumb" {
        ColorSupport::Mono
    } else {
        ColorSupport::Color
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub border: Style,
    pub label: Style,
    pub value: Style,
    pub accent: Style,
    pub gauge_bar: Style,
    pub battery_bar: Style,
    pub ram_bar: Style,
    pub dim: Style,
    pub table_name: Style,
    pub table_pid: Style,
    pub heat: [Style; 4],
    pub flow_in_high: Style,
    pub flow_out_high: Style,
    pub flow_mid: Style,
    pub flow_low: Style,
}

impl Theme {
    pub fn for_support(support: ColorSupport) -> Self {
        match support {
            ColorSupport::Color => Self::classic(),
            ColorSupport::Mono => Self::mono(),
        }
    }

    pub fn classic() -> Self {
        let bold_red = Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD);
        let white = Style::new().fg(Color::White);
        let yellow = Style::new().fg(Color::LightYellow);
        Theme {
            name: "classic",
            border: bold_red,
            label: bold_red,
            value: white,
            accent: yellow,
            gauge_bar: yellow,
            battery_bar: Style::new().fg(Color::LightGreen),
            ram_bar: Style::new().fg(Color::LightCyan),
            dim: Style::new().fg(Color::Gray).add_modifier(Modifier::DIM),
            table_name: Style::new().fg(Color::LightCyan),
            table_pid: yellow,
            heat: [
                Style::new().fg(Color::LightRed),
                Style::new().fg(Color::Yellow),
                white,
                Style::new().fg(Color::Gray).add_modifier(Modifier::DIM),
            ],
            flow_in_high: Style::new().fg(Color::LightGreen),
            flow_out_high: Style::new().fg(Color::LightRed),
            flow_mid: Style::new().fg(Color::Yellow),
            flow_low: white,
        }
    }

    pub fn mono() -> Self {
        let plain = Style::new();
        let bold = Style::new().add_modifier(Modifier::BOLD);
        let dim = Style::new().add_modifier(Modifier::DIM);
        Theme {
            name: "mono",
            border: bold,
            label: bold,
            value: plain,
            accent: plain,
            gauge_bar: plain,
            battery_bar: plain,
            ram_bar: plain,
            dim,
            table_name: plain,
            table_pid: plain,
            heat: [bold, plain, plain, dim],
            flow_in_high: bold,
            flow_out_high: bold,
            flow_mid: plain,
            flow_low: dim,
        }
    }

    pub fn grid_style(&self, tier: GridTier) -> Style {
        match tier {
            GridTier::Hot => self.heat[0],
            GridTier::Warm => self.heat[1],
            GridTier::Lit => self.heat[2],
            GridTier::Cold => self.heat[3],
        }
    }

    pub fn flow_style(&self, intensity: Intensity, flow: Flow) -> Style {
        match (intensity, flow) {
            (Intensity::High, Flow::In) => self.flow_in_high,
            (Intensity::High, Flow::Out) => self.flow_out_high,
            (Intensity::Mid, _) => self.flow_mid,
            (Intensity::Low, _) => self.flow_low,
            (Intensity::Off, _) => Style::new(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_picks_palette() {
        assert_eq!(Theme::for_support(ColorSupport::Color).name, "classic");
        assert_eq!(Theme::for_support(ColorSupport::Mono).name, "mono");
    }

    #[test]
    fn mono_palette_has_no_colors() {
        let theme = Theme::mono();
        for style in [theme.border, theme.value, theme.gauge_bar, theme.heat[0]] {
            assert_eq!(style.fg, None);
        }
    }

    #[test]
    fn flow_direction_only_changes_high_tier() {
        let theme = Theme::classic();
        assert_ne!(
            theme.flow_style(Intensity::High, Flow::In),
            theme.flow_style(Intensity::High, Flow::Out)
        );
        assert_eq!(
            theme.flow_style(Intensity::Mid, Flow::In),
            theme.flow_style(Intensity::Mid, Flow::Out)
        );
    }
}
