//! ANSI color support for the binary's summary output.
//!
//! ANSI escape code based text styling via trait extension, without pulling in
//! a terminal-color dependency.

use std::fmt;

/// ANSI escape codes for terminal colors and styles
pub mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
}

/// A styled string that wraps content with ANSI codes
#[derive(Clone)]
pub struct StyledString {
    content: String,
    styles: Vec<&'static str>,
}

impl StyledString {
    fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            styles: Vec::new(),
        }
    }

    fn with_style(mut self, style: &'static str) -> Self {
        self.styles.push(style);
        self
    }

    pub fn red(self) -> Self {
        self.with_style(codes::RED)
    }
    pub fn green(self) -> Self {
        self.with_style(codes::GREEN)
    }
    pub fn yellow(self) -> Self {
        self.with_style(codes::YELLOW)
    }
    pub fn blue(self) -> Self {
        self.with_style(codes::BLUE)
    }
    pub fn bold(self) -> Self {
        self.with_style(codes::BOLD)
    }
}

impl fmt::Display for StyledString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.styles.is_empty() {
            return write!(f, "{}", self.content);
        }
        for style in &self.styles {
            write!(f, "{style}")?;
        }
        write!(f, "{}{}", self.content, codes::RESET)
    }
}

/// Extension trait adding color constructors to string types.
pub trait Colorize {
    fn red(&self) -> StyledString;
    fn green(&self) -> StyledString;
    fn yellow(&self) -> StyledString;
    fn blue(&self) -> StyledString;
    fn bold(&self) -> StyledString;
}

impl Colorize for str {
    fn red(&self) -> StyledString {
        StyledString::new(self).red()
    }
    fn green(&self) -> StyledString {
        StyledString::new(self).green()
    }
    fn yellow(&self) -> StyledString {
        StyledString::new(self).yellow()
    }
    fn blue(&self) -> StyledString {
        StyledString::new(self).blue()
    }
    fn bold(&self) -> StyledString {
        StyledString::new(self).bold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unstyled_passthrough() {
        let s = StyledString::new("plain");
        assert_eq!(s.to_string(), "plain");
    }

    #[test]
    fn styled_wraps_with_reset() {
        let s = "fail".red().bold();
        let rendered = s.to_string();
        assert!(rendered.starts_with(codes::RED));
        assert!(rendered.ends_with(codes::RESET));
        assert!(rendered.contains("fail"));
    }
}
