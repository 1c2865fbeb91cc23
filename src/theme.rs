//! ANSI color helpers for CLI output
//!
//! Centralizes the colors used by command handlers. Colors are disabled when
//! `NO_COLOR` is set or stdout is not a terminal, so piped output stays plain.

/// ANSI color codes for CLI output - exposed for clap styling
pub mod ansi {
    /// Gray color (ANSI 37) - used for descriptions
    pub const GRAY: &str = "\x1b[37m";
    /// Green color (ANSI 32) - used for accent/headers
    pub const GREEN: &str = "\x1b[32m";
    /// Light green (ANSI 92) - used for success lines
    pub const LIGHT_GREEN: &str = "\x1b[92m";
    /// Yellow (ANSI 33) - used for warnings
    pub const YELLOW: &str = "\x1b[33m";
    /// Red color (ANSI 31) - used for errors
    pub const RED: &str = "\x1b[31m";
    /// Dark gray (ANSI 90) - used for secondary text
    pub const DARK_GRAY: &str = "\x1b[90m";
    /// Reset color
    pub const RESET: &str = "\x1b[0m";
}

/// Theme configuration for CLI output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: &'static str,
    /// Secondary/dimmed text color
    pub text_secondary: &'static str,
    /// Accent color for highlights and important elements
    pub accent: &'static str,
    /// Warning color
    pub warning: &'static str,
    /// Error color
    pub error: &'static str,
    /// Success color
    pub success: &'static str,
    /// Whether escape codes are emitted at all
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: ansi::GRAY,
            text_secondary: ansi::DARK_GRAY,
            accent: ansi::GREEN,
            warning: ansi::YELLOW,
            error: ansi::RED,
            success: ansi::LIGHT_GREEN,
            enabled: true,
        }
    }
}

impl Theme {
    /// Theme that never emits escape codes.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color, text, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    /// Format text with the accent color.
    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    /// Format text with the primary color.
    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    /// Format text with the warning color.
    pub fn warning_text(&self, text: &str) -> String {
        self.paint(self.warning, text)
    }

    /// Format text with the error color.
    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    /// Format text with the success color.
    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }
}

/// Returns true when colored output should be used.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Global theme instance.
pub fn current_theme() -> Theme {
    if colors_enabled() {
        Theme::default()
    } else {
        Theme::plain()
    }
}
