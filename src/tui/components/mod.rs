//! # TUI Components
//!
//! Widgets and demo pages for the terminal host.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: Top status bar showing page title and history depth
//!
//! ### Pages
//!
//! Implementations of `core::page::Page`, driven by the navigator:
//! - `CounterPage`: numbered page, → pushes the next one, ← pops
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, not by reaching into the
//! navigator. Pages read the navigator and pass what a component needs:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! TitleBar::new(title, nav.len(), nav.history_limit(), status).render(frame, area);
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod counter_page;
pub use counter_page::{CounterPage, MOUNT_COUNT_KEY};
