//! Named text styles for terminal output.

use std::collections::HashMap;

use colored::{Color, Colorize};

/// One display style: optional colours plus attribute toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextStyle {
    fg: Option<Color>,
    bg: Option<Color>,
    bold: bool,
    dim: bool,
    italic: bool,
    underline: bool,
    invert: bool,
}

impl TextStyle {
    /// Style with only a foreground colour.
    pub fn fg(color: Color) -> Self {
        TextStyle {
            fg: Some(color),
            ..TextStyle::default()
        }
    }

    pub fn on(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn invert(mut self) -> Self {
        self.invert = true;
        self
    }

    /// Renders `text` with this style applied.
    pub fn apply(&self, text: &str) -> String {
        let mut styled = text.normal();
        if let Some(fg) = self.fg {
            styled = styled.color(fg);
        }
        if let Some(bg) = self.bg {
            styled = styled.on_color(bg);
        }
        if self.bold {
            styled = styled.bold();
        }
        if self.dim {
            styled = styled.dimmed();
        }
        if self.italic {
            styled = styled.italic();
        }
        if self.underline {
            styled = styled.underline();
        }
        if self.invert {
            styled = styled.reversed();
        }
        styled.to_string()
    }
}

/// Maps style tags (`"error"`, `"info_header"`, ...) to [`TextStyle`]s.
///
/// Unknown tags render unstyled, so printers never fail on a missing
/// entry.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<String, TextStyle>,
}

impl Theme {
    /// Theme with no styles at all; output passes through untouched.
    pub fn plain() -> Self {
        Theme::default()
    }

    /// Standard terminal theme.
    pub fn cli() -> Self {
        let mut theme = Theme::default();
        theme.set("default", TextStyle::fg(Color::White));
        theme.set("alt", TextStyle::fg(Color::Black).on(Color::White));
        theme.set("error", TextStyle::fg(Color::Red));
        theme.set("error_alt", TextStyle::fg(Color::White).on(Color::Red));
        theme.set("success", TextStyle::fg(Color::Green));
        theme.set("success_alt", TextStyle::fg(Color::White).on(Color::Green));
        theme.set("info", TextStyle::fg(Color::Cyan));
        theme.set("info_alt", TextStyle::fg(Color::White).on(Color::Cyan));
        theme.set("info_header", TextStyle::fg(Color::Blue));
        theme.set("bold", TextStyle::default().bold());
        theme.set("dim", TextStyle::default().dim());
        theme.set("italic", TextStyle::default().italic());
        theme.set("underline", TextStyle::default().underline());
        theme.set("invert", TextStyle::default().invert());
        theme
    }

    /// Registers or replaces a style tag.
    pub fn set(&mut self, tag: impl Into<String>, style: TextStyle) {
        self.styles.insert(tag.into(), style);
    }

    pub fn style_for(&self, tag: &str) -> Option<&TextStyle> {
        self.styles.get(tag)
    }

    /// Applies the tagged style, or returns the text unchanged when the
    /// tag is unknown.
    pub fn apply(&self, tag: &str, text: &str) -> String {
        match self.styles.get(tag) {
            Some(style) => style.apply(text),
            None => text.to_string(),
        }
    }
}
