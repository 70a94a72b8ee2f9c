//! Marker rendering
//!
//! The core hands out semantic markers. A `MarkerStyle` decides what they
//! look like: bracketed ASCII for logs and plain-text exports, emoji for the
//! dashboard and PDF renderer.

use airsight_core::{
    classify::{DiagnosticLine, LineKind},
    Marker, SystemStatus,
};

/// Maps semantic markers to display glyphs
pub trait MarkerStyle {
    /// Glyph for a tier marker
    fn marker(&self, marker: Marker) -> &'static str;

    /// Glyph for a system status; defaults to the status marker's glyph
    fn status(&self, status: SystemStatus) -> &'static str {
        self.marker(status.marker())
    }

    /// Prefix for an action line under a finding
    fn action_prefix(&self) -> &'static str {
        "->"
    }

    /// Bullet for guidance lists
    fn bullet(&self) -> &'static str {
        "-"
    }
}

/// Bracketed ASCII markers
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl MarkerStyle for PlainStyle {
    fn marker(&self, marker: Marker) -> &'static str {
        match marker {
            Marker::Clear => "[OK]",
            Marker::Elevated => "[~]",
            Marker::Warning => "[!]",
            Marker::Critical => "[!!]",
            Marker::Unknown => "[?]",
        }
    }

    fn status(&self, status: SystemStatus) -> &'static str {
        match status {
            SystemStatus::Moderate => "[i]",
            other => self.marker(other.marker()),
        }
    }
}

/// Emoji markers
#[derive(Debug, Clone, Copy, Default)]
pub struct EmojiStyle;

impl MarkerStyle for EmojiStyle {
    fn marker(&self, marker: Marker) -> &'static str {
        match marker {
            Marker::Clear => "🟢",
            Marker::Elevated => "🟡",
            Marker::Warning => "🟠",
            Marker::Critical => "🔴",
            Marker::Unknown => "⚪",
        }
    }

    fn status(&self, status: SystemStatus) -> &'static str {
        match status {
            SystemStatus::Optimal => "✅",
            SystemStatus::Moderate => "ℹ️",
            SystemStatus::Warning => "⚡",
            SystemStatus::Critical => "⚠️",
            SystemStatus::Unknown => "❔",
        }
    }

    fn action_prefix(&self) -> &'static str {
        "→"
    }

    fn bullet(&self) -> &'static str {
        "•"
    }
}

/// One live-log line as text
pub fn render_line(line: &DiagnosticLine, style: &dyn MarkerStyle) -> String {
    match line.kind {
        LineKind::Action => format!("{} {}", style.action_prefix(), line.text),
        LineKind::Finding | LineKind::Status => {
            format!("{} {}", style.marker(line.marker), line.text)
        }
    }
}

/// The live log as text, one line per entry
pub fn render_diagnostics(lines: &[DiagnosticLine], style: &dyn MarkerStyle) -> String {
    lines
        .iter()
        .map(|line| render_line(line, style))
        .collect::<Vec<_>>()
        .join("\n")
}
