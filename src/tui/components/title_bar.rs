//! # TitleBar Component
//!
//! Top status bar showing where the user is in the page stack.
//!
//! ## Responsibilities
//!
//! - Display the current page title
//! - Display history depth against the configured limit
//! - Display a status message (e.g. "← back  → next")
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Page 3".to_string(), 3, 10, String::new());
//! title_bar.render(frame, area);
//! ```
//!
//! ### State Ownership
//!
//! - `page_title`: the page drawing it
//! - `depth` / `history_limit`: read from the `Navigator`
//! - `status_message`: whatever the page wants to surface
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"pagestack | Page 3 | history 3/10 | ← back"`
//! 2. **Default**: `"pagestack | Page 3 | history 3/10"`
//!
//! A limit of 0 has no history to show, so depth is rendered as
//! `"no history"`.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component.
///
/// # Props
///
/// - `page_title`: Title of the active page
/// - `depth`: Number of pages in history
/// - `history_limit`: Configured history limit
/// - `status_message`: Transient status, empty for none
pub struct TitleBar {
    pub page_title: String,
    pub depth: usize,
    pub history_limit: usize,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(
        page_title: String,
        depth: usize,
        history_limit: usize,
        status_message: String,
    ) -> Self {
        Self {
            page_title,
            depth,
            history_limit,
            status_message,
        }
    }

    fn history_text(&self) -> String {
        if self.history_limit == 0 {
            "no history".to_string()
        } else {
            format!("history {}/{}", self.depth, self.history_limit)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("pagestack", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" | {} | {}", self.page_title, self.history_text())),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new("Page 3".to_string(), 3, 10, "← back".to_string());

        let text = render_to_text(&mut title_bar);

        assert!(text.contains("pagestack"));
        assert!(text.contains("Page 3"));
        assert!(text.contains("history 3/10"));
        assert!(text.contains("← back"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("Page 1".to_string(), 1, 15, String::new());

        let text = render_to_text(&mut title_bar);

        assert!(text.contains("history 1/15"));
        assert_eq!(text.matches('|').count(), 2);
    }

    #[test]
    fn test_title_bar_zero_limit() {
        let mut title_bar = TitleBar::new("Page 1".to_string(), 1, 0, String::new());

        let text = render_to_text(&mut title_bar);

        assert!(text.contains("no history"));
        assert!(!text.contains("1/0"));
    }
}
