//! Scrollable full-screen viewer for rendered lines.

use crate::error::DisplayError;
use crate::terminal;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::debug;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// Scroll state over a fixed set of lines.
pub struct Pager {
    /// Shown at the left of the status bar.
    title: String,
    lines: Vec<Line<'static>>,
    offset: usize,
    height: usize,
}

impl Pager {
    pub fn new(title: impl Into<String>, lines: Vec<Line<'static>>) -> Self {
        Self {
            title: title.into(),
            lines,
            offset: 0,
            height: 1,
        }
    }

    /// Index of the first visible line.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Set the number of body rows available, keeping the offset in range.
    pub fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
        self.offset = self.offset.min(self.max_offset());
    }

    fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height)
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = self.offset.saturating_add(n).min(self.max_offset());
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.height);
    }

    pub fn top(&mut self) {
        self.offset = 0;
    }

    pub fn bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Action::Quit
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.page_down(),
            KeyCode::PageUp | KeyCode::Char('b') => self.page_up(),
            KeyCode::Home | KeyCode::Char('g') => self.top(),
            KeyCode::End | KeyCode::Char('G') => self.bottom(),
            _ => {}
        }
        Action::Continue
    }

    /// Lines currently in the viewport.
    pub fn visible(&self) -> &[Line<'static>] {
        let end = (self.offset + self.height).min(self.lines.len());
        &self.lines[self.offset..end]
    }

    /// Status bar with position and key help.
    pub fn status_line(&self) -> Line<'static> {
        let position = if self.lines.is_empty() {
            "(empty)".to_string()
        } else {
            let last = (self.offset + self.height).min(self.lines.len());
            format!("{}-{}/{}", self.offset + 1, last, self.lines.len())
        };
        let text = format!(
            " {}  {}  |  q: Quit  |  \u{2191}\u{2193}/jk: Scroll  |  PgUp/PgDn: Page  |  g/G: Top/Bottom",
            sanitize_title(&self.title),
            position
        );
        let style = Style::new()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD);
        Line::from(Span::styled(text, style))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn draw(&mut self, frame: &mut Frame<'_>) {
        let [body, status] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
        self.set_height(body.height as usize);
        frame.render_widget(Paragraph::new(self.visible().to_vec()), body);
        frame.render_widget(Paragraph::new(self.status_line()), status);
    }
}

/// Remove control characters that might interfere with terminal behavior.
fn sanitize_title(input: &str) -> String {
    input.chars().filter(|c| !c.is_control()).collect()
}

/// Show `lines` in the alternate screen until the user quits.
pub fn run(title: impl Into<String>, lines: Vec<Line<'static>>) -> Result<(), DisplayError> {
    let (_guard, mut term) = terminal::init()?;
    let mut pager = Pager::new(title, lines);
    debug!(title = pager.title(), lines = pager.len(), "pager started");

    loop {
        term.draw(|frame| pager.draw(frame))?;
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if pager.handle_key(key) == Action::Quit {
                    break;
                }
            }
            // Next draw picks up the new size.
            Event::Resize(_, _) => {}
            _ => {}
        }
    }

    debug!(offset = pager.offset(), "pager closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager_with(n: usize, height: usize) -> Pager {
        let lines = (0..n).map(|i| Line::from(format!("line {i}"))).collect();
        let mut p = Pager::new("/tmp/project", lines);
        p.set_height(height);
        p
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn scroll_is_clamped() {
        let mut p = pager_with(10, 4);
        p.scroll_down(100);
        assert_eq!(p.offset(), 6);
        p.scroll_up(100);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut p = pager_with(3, 10);
        p.page_down();
        p.bottom();
        assert_eq!(p.offset(), 0);
        assert_eq!(p.visible().len(), 3);
    }

    #[test]
    fn quit_keys() {
        let mut p = pager_with(1, 1);
        assert_eq!(p.handle_key(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(p.handle_key(key(KeyCode::Esc)), Action::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(p.handle_key(ctrl_c), Action::Quit);
        assert_eq!(p.handle_key(key(KeyCode::Char('c'))), Action::Continue);
    }

    #[test]
    fn resize_keeps_offset_in_range() {
        let mut p = pager_with(20, 5);
        p.bottom();
        assert_eq!(p.offset(), 15);
        p.set_height(18);
        assert_eq!(p.offset(), 2);
    }

    #[test]
    fn status_line_reports_position() {
        let mut p = pager_with(50, 10);
        p.page_down();
        let text: String = p
            .status_line()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains("11-20/50"), "got {text:?}");
        assert!(text.starts_with(" /tmp/project  11-20/50"), "got {text:?}");
    }

    #[test]
    fn status_line_strips_control_characters_from_title() {
        let p = Pager::new("/tmp/\u{1b}[2Jevil", Vec::new());
        let text: String = p
            .status_line()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(!text.contains('\u{1b}'));
        assert!(text.contains("/tmp/[2Jevil  (empty)"), "got {text:?}");
    }
}
