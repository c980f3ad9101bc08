//! # Page Contract
//!
//! Every screen the navigator can show implements [`Page`]. The navigator
//! calls across this boundary and nothing else:
//!
//! ```text
//!   push(B) while A active          pop() while B active over A
//!   ──────────────────────          ───────────────────────────
//!   A.unmount(nav)                  B.unmount(nav)
//!   B.mount(nav)                    A.mount(nav)
//!
//!   every frame while active:  update(nav)  →  draw(nav, frame)
//! ```
//!
//! Pages are shared handles (`Rc<dyn Page>`), so hooks take `&self`. A page
//! that needs mutable state keeps it behind `Cell`/`RefCell`, and must not
//! hold a `RefCell` borrow across a call back into the navigator: pushing
//! from `update` re-enters the same page through `unmount`.

use std::rc::Rc;

use ratatui::Frame;

use crate::core::navigator::Navigator;

/// Shared handle to a page. Cloning it does not clone the page.
pub type PageRef = Rc<dyn Page>;

pub trait Page {
    /// Called once when the page becomes the active page.
    ///
    /// Acquire per-page resources here. Must not assume any particular
    /// page was active before.
    fn mount(&self, _nav: &mut Navigator) {}

    /// Called once when the page stops being the active page.
    ///
    /// Release whatever `mount` acquired. Must be safe to call even if
    /// `mount` acquired nothing.
    fn unmount(&self, _nav: &mut Navigator) {}

    /// Called every frame while active, before `draw`.
    ///
    /// May push or pop. The navigator resolves the new active page on the
    /// next frame; this frame still draws `self`.
    fn update(&self, nav: &mut Navigator);

    /// Called every frame while active, after `update`.
    ///
    /// Only gets a shared reference to the navigator: drawing reads the
    /// shared context but cannot change history.
    fn draw(&self, nav: &Navigator, frame: &mut Frame);

    /// Label used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

pub fn mount_page(nav: &mut Navigator, page: Option<&PageRef>) {
    if let Some(page) = page {
        page.mount(nav);
    }
}

pub fn unmount_page(nav: &mut Navigator, page: Option<&PageRef>) {
    if let Some(page) = page {
        page.unmount(nav);
    }
}

pub fn update_page(nav: &mut Navigator, page: Option<&PageRef>) {
    if let Some(page) = page {
        page.update(nav);
    }
}

pub fn draw_page(nav: &Navigator, page: Option<&PageRef>, frame: &mut Frame) {
    if let Some(page) = page {
        page.draw(nav, frame);
    }
}
