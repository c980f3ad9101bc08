//! pagestack library exports

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::context::SharedContext;
pub use crate::core::host::{Host, InputEvent};
pub use crate::core::navigator::{DEFAULT_HISTORY_LIMIT, Navigator, NavigatorBuilder};
pub use crate::core::page::{Page, PageRef};
