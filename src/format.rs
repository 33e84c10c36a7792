use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const ELLIPSIS: &str = "...";

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}

/// Fits `line` into exactly `width` cells.
///
/// Lines wider than `width` keep their first `keep` cells followed by [`ELLIPSIS`].
pub fn fit_line(line: &str, width: usize, keep: usize) -> String {
    if line.width() > width {
        let cut = format!("{}{ELLIPSIS}", truncate_unicode(line, keep));
        pad_right(&cut, width)
    } else {
        pad_right(line, width)
    }
}

pub fn format_uptime(secs: u64) -> String {
    format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
}
