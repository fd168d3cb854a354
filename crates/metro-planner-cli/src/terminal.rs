//! Terminal capability detection and the styles used by text output.
//!
//! Capabilities are read from the environment once per render through
//! [`TerminalCaps::from_env`]. Tests build them from an explicit lookup instead
//! of mutating process-wide variables.

/// Raw ANSI sequences behind each style role.
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD_WHITE: &str = "\x1b[1;97m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    /// 256-colour orange.
    pub const ORANGE: &str = "\x1b[38;5;208m";
    pub const RED: &str = "\x1b[31m";
}

/// What the attached terminal can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCaps {
    pub color: bool,
    pub unicode: bool,
}

impl TerminalCaps {
    /// Capabilities of the current process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Capabilities derived from `lookup`, which maps a variable name to its value.
    ///
    /// Colour is off when `NO_COLOR` is set (to anything) or `TERM` is `dumb`.
    /// Unicode needs a UTF hint in `LC_ALL` or `LANG`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let dumb = lookup("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        let color = lookup("NO_COLOR").is_none() && !dumb;
        let unicode = ["LC_ALL", "LANG"]
            .iter()
            .filter_map(|key| lookup(key))
            .any(|value| value.to_ascii_uppercase().contains("UTF"));
        Self { color, unicode }
    }
}

/// Escape sequences for each part of the rendered output, or empty strings
/// when colour is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    pub reset: &'static str,
    /// Route headlines and line names in listings.
    pub headline: &'static str,
    /// Per-strategy section titles.
    pub section: &'static str,
    pub time: &'static str,
    pub transfer: &'static str,
    /// "No path found." and skipped-search notes.
    pub missing: &'static str,
    pub logo_frame: &'static str,
    pub logo_text: &'static str,
}

impl Styles {
    pub const ANSI: Styles = Styles {
        reset: ansi::RESET,
        headline: ansi::BOLD_WHITE,
        section: ansi::CYAN,
        time: ansi::GREEN,
        transfer: ansi::RED,
        missing: ansi::RED,
        logo_frame: ansi::CYAN,
        logo_text: ansi::ORANGE,
    };

    pub const NONE: Styles = Styles {
        reset: "",
        headline: "",
        section: "",
        time: "",
        transfer: "",
        missing: "",
        logo_frame: "",
        logo_text: "",
    };

    pub fn for_caps(caps: TerminalCaps) -> Self {
        if caps.color {
            Self::ANSI
        } else {
            Self::NONE
        }
    }

    /// Wrap `text` in `style`, leaving it untouched when the style is empty.
    pub fn paint(&self, style: &str, text: &str) -> String {
        if style.is_empty() {
            text.to_string()
        } else {
            format!("{style}{text}{}", self.reset)
        }
    }
}
