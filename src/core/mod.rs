//! # Core Navigation
//!
//! The page stack and the contracts it calls across. Nothing in here opens
//! a terminal or reads a key; hosts and pages plug in from outside.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Navigator (history)  │
//!                    │  • Page (lifecycle)     │
//!                    │  • SharedContext        │
//!                    │  • Host (frame hooks)   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │  Terminal  │      │   Pages    │      │ Test hosts │
//!     │    Host    │      │  (demo /   │      │ (ratatui   │
//!     │ (crossterm)│      │   app)     │      │ TestBackend│
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`navigator`]: The `Navigator` — history, push/pop, run loop
//! - [`page`]: The `Page` trait and null-safe lifecycle dispatch
//! - [`context`]: `SharedContext`, the key/value store pages share
//! - [`host`]: The `Host` trait and `InputEvent`
//! - [`config`]: Layered settings (file → env → CLI)

pub mod config;
pub mod context;
pub mod host;
pub mod navigator;
pub mod page;
