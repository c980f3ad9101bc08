//! # Counter Page
//!
//! Demo page: a numbered screen where → opens the next number and ← goes
//! back. It exercises the whole navigator surface: pushes and pops from
//! `update`, per-page state across mounts, and data shared through the
//! navigator context.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::host::InputEvent;
use crate::core::navigator::Navigator;
use crate::core::page::Page;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::TitleBar;

/// Shared-context key counting mounts across all counter pages.
pub const MOUNT_COUNT_KEY: &str = "pagestack.mount_count";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Next,
    Back,
}

/// Key bindings for [`CounterPage`].
pub struct CounterKeys;

impl EventHandler for CounterKeys {
    type Event = CounterAction;

    fn handle_event(&mut self, event: &InputEvent) -> Option<CounterAction> {
        match event {
            InputEvent::Right | InputEvent::Enter | InputEvent::Char('l') => {
                Some(CounterAction::Next)
            }
            InputEvent::Left | InputEvent::Backspace | InputEvent::Char('h') => {
                Some(CounterAction::Back)
            }
            _ => None,
        }
    }
}

pub struct CounterPage {
    number: u32,
    /// Times this page has become active.
    visits: Cell<u32>,
}

impl CounterPage {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            visits: Cell::new(0),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn visits(&self) -> u32 {
        self.visits.get()
    }
}

impl Page for CounterPage {
    fn mount(&self, nav: &mut Navigator) {
        self.visits.set(self.visits.get() + 1);
        let mounts = nav.value::<u64>(MOUNT_COUNT_KEY).copied().unwrap_or(0) + 1;
        nav.set_value(MOUNT_COUNT_KEY, mounts);
        debug!("Page {} mounted (visit {})", self.number, self.visits.get());
    }

    fn update(&self, nav: &mut Navigator) {
        // One transition per frame: a second key would act on a page that
        // is no longer active.
        let action = nav.input().iter().find_map(|event| CounterKeys.handle_event(event));

        match action {
            Some(CounterAction::Next) => nav.push(Rc::new(CounterPage::new(self.number + 1))),
            Some(CounterAction::Back) => {
                nav.pop();
            }
            None => {}
        }
    }

    fn draw(&self, nav: &Navigator, frame: &mut Frame) {
        let [title_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        TitleBar::new(
            format!("Page {}", self.number),
            nav.len(),
            nav.history_limit(),
            "← back  → next  Esc quit".to_string(),
        )
        .render(frame, title_area);

        let [text_area] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(body_area);
        let body = Paragraph::new(format!("This is page {}", self.number))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        frame.render_widget(body, text_area);

        let mounts = nav.value::<u64>(MOUNT_COUNT_KEY).copied().unwrap_or(0);
        let footer = Line::from(format!("visits: {}  mounts: {}", self.visits.get(), mounts))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, footer_area);
    }

    fn name(&self) -> &'static str {
        "CounterPage"
    }
}
