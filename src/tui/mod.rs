//! # TUI Host
//!
//! The ratatui-specific layer. Opens the terminal, paces frames, turns
//! crossterm input into `InputEvent`s and hands each frame to the navigator.
//!
//! This is the only module that knows about crossterm. Pages draw with
//! ratatui widgets but never touch the terminal directly.
//!
//! ## Frame Pacing
//!
//! Each `poll_input` waits for input for whatever is left of the frame
//! budget (`1 / target_fps`) after the previous update and draw, then drains
//! anything else already pending. Input arriving early ends the wait early,
//! so a burst of keys is handled on the next frame rather than queued up.

mod component;
pub mod components;
pub mod event;

use log::{info, warn};
use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::backend::Backend;
use ratatui::{Frame, Terminal};

use crate::core::config::ResolvedConfig;
use crate::core::host::{Host, InputEvent};
use crate::core::navigator::Navigator;
use crate::tui::event::{CrosstermInput, InputSource};

pub use component::{Component, EventHandler};

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Kitty keyboard protocol gives reliable Esc detection; terminals that
        // don't support it ignore the escape sequence
        execute!(
            stdout(),
            Hide,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (hidden cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, Show);
    }
}

/// `Host` implementation on top of a ratatui `Terminal`.
pub struct TerminalHost<B: Backend, I: InputSource> {
    terminal: Terminal<B>,
    input: I,
    frame_budget: Duration,
    frame_started: Instant,
    close_requested: bool,
}

impl<B: Backend, I: InputSource> TerminalHost<B, I> {
    pub fn new(terminal: Terminal<B>, input: I, target_fps: u32) -> Self {
        Self {
            terminal,
            input,
            frame_budget: frame_budget(target_fps),
            frame_started: Instant::now(),
            close_requested: false,
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Ask the run loop to stop after the current frame.
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }
}

fn frame_budget(target_fps: u32) -> Duration {
    Duration::from_secs(1) / target_fps.max(1)
}

impl<B, I> Host for TerminalHost<B, I>
where
    B: Backend,
    B::Error: std::fmt::Display,
    I: InputSource,
{
    fn should_close(&self) -> bool {
        self.close_requested
    }

    fn poll_input(&mut self) -> io::Result<Vec<InputEvent>> {
        let timeout = self.frame_budget.saturating_sub(self.frame_started.elapsed());
        let mut events = self.input.poll(timeout)?;
        self.frame_started = Instant::now();

        if events.contains(&InputEvent::Quit) {
            info!("Quit requested from terminal input");
            self.close_requested = true;
            events.retain(|event| *event != InputEvent::Quit);
        }
        Ok(events)
    }

    fn draw_frame(&mut self, render: &mut dyn FnMut(&mut Frame)) -> io::Result<()> {
        self.terminal
            .draw(|frame| render(frame))
            .map_err(|e| io::Error::other(e.to_string()))?;
        Ok(())
    }
}

/// Run `navigator` in the real terminal until the user quits or the
/// navigator's cancellation token fires.
pub fn run(mut navigator: Navigator, config: &ResolvedConfig) -> io::Result<()> {
    let terminal = ratatui::init();
    let terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Could not enable terminal modes: {}", e);
            None
        }
    };

    let mut host = TerminalHost::new(terminal, CrosstermInput, config.target_fps);
    let result = navigator.run(&mut host);

    drop(terminal_mode_guard);
    ratatui::restore();
    result
}
