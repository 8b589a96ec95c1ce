//! Tree rendering using ratatui Line/Span styling.

use crate::tree::{flatten, DirTree, NodeKind, Row};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Branch-drawing glyphs. Each one occupies the same width, which is the
/// per-depth indent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connectors {
    /// Connector for a node with siblings below it.
    pub branch: String,
    /// Connector for the last node of its group.
    pub last: String,
    /// Indent under an ancestor that still has siblings below it.
    pub guide: String,
    /// Indent under an ancestor that was the last of its group.
    pub blank: String,
}

impl Connectors {
    /// Rounded box-drawing connectors.
    pub fn rounded() -> Self {
        Self {
            branch: "\u{251c}\u{2500}\u{2500} ".to_string(), // ├──
            last: "\u{2570}\u{2500}\u{2500} ".to_string(),   // ╰──
            guide: "\u{2502}   ".to_string(),                // │
            blank: "    ".to_string(),
        }
    }

    /// Square-cornered connectors, as printed by `tree(1)`.
    pub fn square() -> Self {
        Self {
            last: "\u{2514}\u{2500}\u{2500} ".to_string(), // └──
            ..Self::rounded()
        }
    }
}

impl Default for Connectors {
    fn default() -> Self {
        Self::rounded()
    }
}

/// Configuration for the rendering pipeline.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to emit color styling.
    pub use_color: bool,
    pub connectors: Connectors,
    pub connector_style: Style,
    pub dir_style: Style,
    pub file_style: Style,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            connectors: Connectors::default(),
            connector_style: Style::new().fg(Color::Rgb(0x35, 0x3e, 0xc5)),
            dir_style: Style::new()
                .fg(Color::Rgb(0x0c, 0xff, 0x04))
                .add_modifier(Modifier::BOLD),
            file_style: Style::new().fg(Color::Rgb(0xff, 0xbb, 0xe8)),
        }
    }
}

impl RenderConfig {
    /// Default glyphs with every style cleared.
    pub fn plain() -> Self {
        Self {
            use_color: false,
            connector_style: Style::new(),
            dir_style: Style::new(),
            file_style: Style::new(),
            ..Self::default()
        }
    }

    fn style_for(&self, kind: NodeKind) -> Style {
        if !self.use_color {
            return Style::new();
        }
        match kind {
            NodeKind::Directory => self.dir_style,
            NodeKind::File => self.file_style,
        }
    }
}

/// Sanitize control characters to avoid terminal control-sequence injection.
fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Box-drawing prefix for one row.
fn prefix_for(row: &Row<'_>, connectors: &Connectors) -> String {
    let mut prefix = String::new();
    for &continues in &row.guides {
        prefix.push_str(if continues {
            &connectors.guide
        } else {
            &connectors.blank
        });
    }
    prefix.push_str(if row.is_last {
        &connectors.last
    } else {
        &connectors.branch
    });
    prefix
}

/// Convert a tree into styled ratatui `Line` objects, one per node.
pub fn tree_to_lines(tree: &DirTree, config: &RenderConfig) -> Vec<Line<'static>> {
    flatten(tree)
        .iter()
        .map(|row| row_to_line(row, config))
        .collect()
}

fn row_to_line(row: &Row<'_>, config: &RenderConfig) -> Line<'static> {
    let prefix = prefix_for(row, &config.connectors);
    let name = sanitize_terminal_text(row.name);

    let prefix_span = if config.use_color {
        Span::styled(prefix, config.connector_style)
    } else {
        Span::raw(prefix)
    };
    Line::from(vec![
        prefix_span,
        Span::styled(name, config.style_for(row.kind)),
    ])
}

/// Render a tree as plain text, one `\n`-terminated line per node.
pub fn render_to_string(tree: &DirTree, config: &RenderConfig) -> String {
    let mut out = String::new();
    for line in tree_to_lines(tree, config) {
        out.push_str(&line_to_plain_text(&line));
        out.push('\n');
    }
    out
}

/// Extract plain text from a `Line`.
pub fn line_to_plain_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
