//! # Navigator
//!
//! Owns the page history and drives the active page through its lifecycle.
//!
//! ```text
//! pages (oldest → newest)
//! ┌─────┬─────┬─────┬─────┐
//! │  A  │  B  │  C  │  D  │ ← active (mounted)
//! └─────┴─────┴─────┴─────┘
//!   ▲
//!   evicted first when len reaches history_limit
//! ```
//!
//! History only changes through [`Navigator::push`] and [`Navigator::pop`].
//! Only the newest entry is ever mounted; eviction drops the oldest entry
//! without calling into it.

use std::any::Any;
use std::collections::VecDeque;
use std::fmt;
use std::io;
use std::rc::Rc;

use log::{debug, info};
use ratatui::Frame;
use tokio_util::sync::CancellationToken;

use crate::core::config::ResolvedConfig;
use crate::core::context::SharedContext;
use crate::core::host::{Host, InputEvent};
use crate::core::page::{PageRef, draw_page, mount_page, unmount_page, update_page};

/// History limit used when none is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

pub struct Navigator {
    /// Number of pages to retain. 0 keeps only the active page.
    history_limit: usize,
    pages: VecDeque<PageRef>,
    /// Shown when history is empty. The navigator mounts and unmounts it
    /// like any other page but does not own it.
    default_page: Option<PageRef>,
    context: SharedContext,
    cancellation: CancellationToken,
    /// Input the host delivered for the frame being processed.
    input: Vec<InputEvent>,
}

/// Builder for [`Navigator`]. Every option has a default.
///
/// ```rust,ignore
/// let nav = Navigator::builder()
///     .history_limit(15)
///     .default_page(Rc::new(HomePage::new()))
///     .build();
/// ```
pub struct NavigatorBuilder {
    history_limit: usize,
    default_page: Option<PageRef>,
    cancellation: CancellationToken,
    context: SharedContext,
}

impl Default for NavigatorBuilder {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_page: None,
            cancellation: CancellationToken::new(),
            context: SharedContext::new(),
        }
    }
}

impl NavigatorBuilder {
    /// Number of pages to keep. When full, the oldest page is dropped.
    /// 0 keeps no history behind the active page.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Page to show whenever history is empty.
    pub fn default_page(mut self, page: PageRef) -> Self {
        self.default_page = Some(page);
        self
    }

    /// Token that ends [`Navigator::run`] when cancelled. Without one the
    /// loop only ends when the host closes.
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Seeds the shared context.
    pub fn value<T: Any>(mut self, key: impl Into<String>, value: T) -> Self {
        self.context.set(key, value);
        self
    }

    pub fn build(self) -> Navigator {
        Navigator {
            history_limit: self.history_limit,
            pages: VecDeque::new(),
            default_page: self.default_page,
            context: self.context,
            cancellation: self.cancellation,
            input: Vec::new(),
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn builder() -> NavigatorBuilder {
        NavigatorBuilder::default()
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Builder preloaded with the navigator settings from `config`.
    pub fn from_config(config: &ResolvedConfig) -> NavigatorBuilder {
        Self::builder().history_limit(config.history_limit)
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Most entries history can hold. A limit of 0 still keeps the active page.
    pub fn capacity(&self) -> usize {
        self.history_limit.max(1)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// The active page, if any.
    pub fn current(&self) -> Option<PageRef> {
        self.pages.back().cloned()
    }

    /// Read-only view of history, oldest first.
    pub fn pages(&self) -> impl DoubleEndedIterator<Item = &PageRef> + ExactSizeIterator {
        self.pages.iter()
    }

    pub fn default_page(&self) -> Option<&PageRef> {
        self.default_page.as_ref()
    }

    /// Makes `page` the active page.
    ///
    /// The previous active page is unmounted before `page` is mounted. If
    /// history is full the oldest entry is dropped without any callback.
    /// The same page may be pushed repeatedly; each push is its own active
    /// period.
    pub fn push(&mut self, page: PageRef) {
        let previous = self.current();
        unmount_page(self, previous.as_ref());

        if self.pages.len() >= self.capacity()
            && let Some(evicted) = self.pages.pop_front()
        {
            debug!(
                "History full (limit={}), evicted {}",
                self.history_limit,
                evicted.name()
            );
        }

        self.pages.push_back(Rc::clone(&page));
        debug!("Pushed {} (depth={})", page.name(), self.pages.len());
        mount_page(self, Some(&page));
    }

    /// Removes the active page and returns it, or `None` if history is empty.
    ///
    /// The popped page is unmounted and the page below it, if any, is
    /// mounted again. Popping the last page leaves history empty; the run
    /// loop falls back to the default page on its next frame.
    pub fn pop(&mut self) -> Option<PageRef> {
        let popped = self.current()?;
        unmount_page(self, Some(&popped));
        self.pages.pop_back();
        debug!("Popped {} (depth={})", popped.name(), self.pages.len());

        let next = self.current();
        mount_page(self, next.as_ref());
        Some(popped)
    }

    /// Input the host collected for the current frame.
    pub fn input(&self) -> &[InputEvent] {
        &self.input
    }

    pub fn context(&self) -> &SharedContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut SharedContext {
        &mut self.context
    }

    pub fn set_value<T: Any>(&mut self, key: impl Into<String>, value: T) {
        self.context.set(key, value);
    }

    pub fn value<T: Any>(&self, key: &str) -> Option<&T> {
        self.context.get(key)
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// Runs frames until the host closes or the cancellation token fires.
    ///
    /// Cancellation is checked once per iteration, so a frame that has
    /// started always finishes updating and drawing.
    pub fn run<H: Host + ?Sized>(&mut self, host: &mut H) -> io::Result<()> {
        info!(
            "Navigator run loop starting (history_limit={}, default_page={})",
            self.history_limit,
            self.default_page.as_ref().map_or("none", |page| page.name())
        );

        while !host.should_close() {
            if self.cancellation.is_cancelled() {
                info!("Navigator cancelled, leaving run loop");
                break;
            }
            self.input = host.poll_input()?;
            self.step(host)?;
        }

        self.input.clear();
        info!("Navigator run loop finished (depth={})", self.pages.len());
        Ok(())
    }

    /// One frame: resolve the active page, update it, draw it.
    ///
    /// With empty history the default page is pushed first. Without a
    /// default page the frame is idle and nothing is drawn.
    pub fn step<H: Host + ?Sized>(&mut self, host: &mut H) -> io::Result<()> {
        let current = match self.current() {
            Some(page) => page,
            None => match self.default_page.clone() {
                Some(page) => {
                    debug!("History empty, falling back to {}", page.name());
                    self.push(Rc::clone(&page));
                    page
                }
                None => return Ok(()),
            },
        };

        update_page(self, Some(&current));

        let nav: &Navigator = self;
        host.draw_frame(&mut |frame: &mut Frame| draw_page(nav, Some(&current), frame))
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pages: Vec<&str> = self.pages.iter().map(|page| page.name()).collect();
        f.debug_struct("Navigator")
            .field("history_limit", &self.history_limit)
            .field("pages", &pages)
            .field(
                "default_page",
                &self.default_page.as_ref().map(|page| page.name()),
            )
            .field("context", &self.context)
            .field("cancelled", &self.cancellation.is_cancelled())
            .finish()
    }
}
