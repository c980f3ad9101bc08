//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::rc::Rc;

use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::widgets::Paragraph;

use crate::core::host::{Host, InputEvent};
use crate::core::navigator::Navigator;
use crate::core::page::{Page, PageRef};

/// Ordered record of lifecycle calls, shared between pages under test.
#[derive(Clone, Default)]
pub struct LifecycleLog(Rc<RefCell<Vec<String>>>);

impl LifecycleLog {
    pub fn record(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Labels that have been mounted more often than unmounted.
    pub fn mounted(&self) -> Vec<String> {
        let mut balance: HashMap<&str, i32> = HashMap::new();
        let entries = self.0.borrow();
        for entry in entries.iter() {
            if let Some(label) = entry.strip_prefix("mount:") {
                *balance.entry(label).or_default() += 1;
            } else if let Some(label) = entry.strip_prefix("unmount:") {
                *balance.entry(label).or_default() -= 1;
            }
        }
        let mut mounted: Vec<String> = balance
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(label, _)| label.to_string())
            .collect();
        mounted.sort();
        mounted
    }
}

type Hook = Box<dyn Fn(&mut Navigator)>;

/// Page that logs every lifecycle call as `"<hook>:<label>"`.
pub struct RecordingPage {
    label: &'static str,
    log: LifecycleLog,
    on_mount: Option<Hook>,
    on_update: Option<Hook>,
}

impl RecordingPage {
    pub fn new(label: &'static str, log: &LifecycleLog) -> Self {
        Self {
            label,
            log: log.clone(),
            on_mount: None,
            on_update: None,
        }
    }

    pub fn shared(label: &'static str, log: &LifecycleLog) -> PageRef {
        Rc::new(Self::new(label, log))
    }

    /// Runs `hook` after the mount is recorded.
    pub fn on_mount(mut self, hook: impl Fn(&mut Navigator) + 'static) -> Self {
        self.on_mount = Some(Box::new(hook));
        self
    }

    /// Runs `hook` after the update is recorded.
    pub fn on_update(mut self, hook: impl Fn(&mut Navigator) + 'static) -> Self {
        self.on_update = Some(Box::new(hook));
        self
    }
}

impl Page for RecordingPage {
    fn mount(&self, nav: &mut Navigator) {
        self.log.record(format!("mount:{}", self.label));
        if let Some(hook) = &self.on_mount {
            hook(nav);
        }
    }

    fn unmount(&self, _nav: &mut Navigator) {
        self.log.record(format!("unmount:{}", self.label));
    }

    fn update(&self, nav: &mut Navigator) {
        self.log.record(format!("update:{}", self.label));
        if let Some(hook) = &self.on_update {
            hook(nav);
        }
    }

    fn draw(&self, _nav: &Navigator, frame: &mut Frame) {
        self.log.record(format!("draw:{}", self.label));
        frame.render_widget(Paragraph::new(self.label), frame.area());
    }
}

/// Host backed by ratatui's `TestBackend` that closes after a fixed number
/// of input polls and replays scripted input one frame at a time.
pub struct ScriptedHost {
    terminal: Terminal<TestBackend>,
    max_frames: usize,
    script: VecDeque<Vec<InputEvent>>,
    pub polls: usize,
    pub frames_drawn: usize,
}

impl ScriptedHost {
    pub fn new(max_frames: usize) -> Self {
        Self {
            terminal: Terminal::new(TestBackend::new(40, 4)).unwrap(),
            max_frames,
            script: VecDeque::new(),
            polls: 0,
            frames_drawn: 0,
        }
    }

    pub fn with_input(mut self, frames: Vec<Vec<InputEvent>>) -> Self {
        self.script = frames.into();
        self
    }

    /// Contents of the last drawn frame.
    pub fn screen(&self) -> String {
        self.terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }
}

impl Host for ScriptedHost {
    fn should_close(&self) -> bool {
        self.polls >= self.max_frames
    }

    fn poll_input(&mut self) -> io::Result<Vec<InputEvent>> {
        self.polls += 1;
        Ok(self.script.pop_front().unwrap_or_default())
    }

    fn draw_frame(&mut self, render: &mut dyn FnMut(&mut Frame)) -> io::Result<()> {
        self.terminal
            .draw(|frame| render(frame))
            .map_err(|e| io::Error::other(e.to_string()))?;
        self.frames_drawn += 1;
        Ok(())
    }
}
