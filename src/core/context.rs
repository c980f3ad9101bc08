//! # Shared Context
//!
//! Key/value store owned by the navigator and handed to every page hook.
//! Pages use it to pass data to each other (app settings, counters, resource
//! handles). Values are type-erased; readers ask for the type they expect
//! and get `None` on a mismatch.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

#[derive(Default, Clone)]
pub struct SharedContext {
    values: HashMap<String, Rc<dyn Any>>,
}

impl SharedContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set<T: Any>(&mut self, key: impl Into<String>, value: T) {
        self.values.insert(key.into(), Rc::new(value));
    }

    /// Returns the value under `key` if it exists and has type `T`.
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.values.get(key)?.downcast_ref::<T>()
    }

    /// Returns a shared handle to the value under `key`, for callers that
    /// need it to outlive the borrow of the context.
    pub fn get_rc<T: Any>(&self, key: &str) -> Option<Rc<T>> {
        Rc::clone(self.values.get(key)?).downcast::<T>().ok()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl fmt::Debug for SharedContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("SharedContext").field("keys", &keys).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut ctx = SharedContext::new();
        ctx.set("theme", "dark".to_string());
        ctx.set("theme", "light".to_string());

        assert_eq!(ctx.get::<String>("theme").map(String::as_str), Some("light"));
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn test_type_mismatch_returns_none() {
        let mut ctx = SharedContext::new();
        ctx.set("count", 3u32);

        assert_eq!(ctx.get::<u32>("count"), Some(&3));
        assert!(ctx.get::<u64>("count").is_none());
        assert!(ctx.get::<u32>("missing").is_none());
    }

    #[test]
    fn test_overwrite_may_change_type() {
        let mut ctx = SharedContext::new();
        ctx.set("slot", 1u8);
        ctx.set("slot", "now a str");

        assert!(ctx.get::<u8>("slot").is_none());
        assert_eq!(ctx.get::<&str>("slot"), Some(&"now a str"));
    }

    #[test]
    fn test_get_rc_outlives_context() {
        let mut ctx = SharedContext::new();
        ctx.set("name", String::from("pagestack"));

        let name = ctx.get_rc::<String>("name").unwrap();
        ctx.clear();

        assert_eq!(name.as_str(), "pagestack");
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut ctx = SharedContext::new();
        ctx.set("a", 1i32);

        assert!(ctx.contains_key("a"));
        assert!(ctx.remove("a"));
        assert!(!ctx.remove("a"));
        assert!(!ctx.contains_key("a"));
    }

    #[test]
    fn test_debug_lists_sorted_keys() {
        let mut ctx = SharedContext::new();
        ctx.set("b", 2i32);
        ctx.set("a", 1i32);

        assert_eq!(format!("{ctx:?}"), r#"SharedContext { keys: ["a", "b"] }"#);
    }
}
