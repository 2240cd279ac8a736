//! Transient status notifications (toasts).
//!
//! One toast is live at a time. Every `show` bumps a generation counter
//! and the caller schedules an auto-hide timer carrying that generation;
//! `expire` only hides the toast if no newer `show` happened in between,
//! so a stale timer can never hide a fresher message.

use std::time::Duration;

/// How long a toast stays visible without a newer `show`.
pub const AUTO_HIDE: Duration = Duration::from_millis(4000);

/// The visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Info,
}

/// Single-slot toast state.
#[derive(Debug, Default)]
pub struct Notifier {
    message: String,
    kind: ToastKind,
    visible: bool,
    generation: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current toast and return the generation token the
    /// auto-hide timer must present to `expire`.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.message = message.into();
        self.kind = kind;
        self.visible = true;
        self.generation += 1;
        self.generation
    }

    /// Hide the toast, but only if `generation` is still the live one.
    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.visible = false;
        }
    }

    /// Hide the toast immediately (close button).
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Message content; retained after hiding for fade-out rendering.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_makes_visible() {
        let mut notifier = Notifier::new();
        assert!(!notifier.is_visible());

        notifier.show("Product added successfully!", ToastKind::Success);
        assert!(notifier.is_visible());
        assert_eq!(notifier.message(), "Product added successfully!");
        assert_eq!(notifier.kind(), ToastKind::Success);
    }

    #[test]
    fn test_expire_hides_current_generation() {
        let mut notifier = Notifier::new();
        let gen = notifier.show("hello", ToastKind::Info);

        notifier.expire(gen);
        assert!(!notifier.is_visible());
        // Content is retained for fade-out rendering.
        assert_eq!(notifier.message(), "hello");
    }

    #[test]
    fn test_stale_timer_does_not_hide_newer_toast() {
        let mut notifier = Notifier::new();
        let first = notifier.show("first", ToastKind::Success);
        let second = notifier.show("second", ToastKind::Error);

        // The first toast's timer fires after the second `show`.
        notifier.expire(first);
        assert!(notifier.is_visible());
        assert_eq!(notifier.message(), "second");

        notifier.expire(second);
        assert!(!notifier.is_visible());
    }

    #[test]
    fn test_each_show_gets_a_fresh_generation() {
        let mut notifier = Notifier::new();
        let a = notifier.show("a", ToastKind::Info);
        let b = notifier.show("b", ToastKind::Info);
        assert_ne!(a, b);
    }

    #[test]
    fn test_manual_dismiss() {
        let mut notifier = Notifier::new();
        notifier.show("bye", ToastKind::Info);
        notifier.dismiss();
        assert!(!notifier.is_visible());
    }
}
