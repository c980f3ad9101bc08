//! # Host Contract
//!
//! The rendering backend the navigator runs inside. The navigator only asks
//! it three things per frame: should we stop, what input arrived, and draw
//! this frame. Everything else (terminal setup, pacing, primitives) stays on
//! the host side.

use std::io;

use ratatui::Frame;

/// Backend-neutral input, collected by the host once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    Left,
    Right,
    Up,
    Down,
    Enter,
    Backspace,
    Tab,
    /// Request to close the host. Hosts consume it instead of passing it on.
    Quit,
}

pub trait Host {
    /// Loop condition: true once the host wants the run loop to end.
    fn should_close(&self) -> bool;

    /// Waits for the next frame boundary and returns the input received
    /// since the previous call.
    fn poll_input(&mut self) -> io::Result<Vec<InputEvent>>;

    /// Brackets one frame: begin frame, call `render`, end frame.
    fn draw_frame(&mut self, render: &mut dyn FnMut(&mut Frame)) -> io::Result<()>;
}
