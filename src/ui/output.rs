use crate::ui::theme;
use owo_colors::OwoColorize;

const CHECK: &str = "✅";
const CROSS: &str = "❌";
const WARN: &str = "⚠️";

/// Format an error line, e.g. `❌ Error: File not found: x.py`
pub fn error_line(label: &str) -> String {
    format!("{} {}", CROSS, label.style(theme().error.clone()))
}

pub fn error(label: &str) {
    eprintln!("{}", error_line(label));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", WARN, label.style(theme().warn.clone()));
}

pub fn success(label: &str) {
    eprintln!("{} {}", CHECK, label.style(theme().success.clone()));
}

/// Dimmed follow-up line under an error or warning
pub fn hint(text: &str) {
    eprintln!("   {}", text.style(theme().dim.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;

    #[test]
    fn test_plain_theme_has_no_escapes() {
        let plain = Theme::plain();
        let styled = "boom".style(plain.error).to_string();
        assert_eq!(styled, "boom");
        assert!(error_line("boom").contains("boom"));
    }
}
