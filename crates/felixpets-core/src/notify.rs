//! Toast Notifications
//!
//! Toasts stack in insertion order with no deduplication. Each one fades
//! `fade_ms` before its duration elapses and is removed at the duration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
    /// Fade-out transition started
    pub hiding: bool,
}

impl Toast {
    pub fn class(&self) -> String {
        let mut class = format!("vc-toast vc-toast-{}", self.kind.as_str());
        if self.hiding {
            class.push_str(" vc-toast--hide");
        }
        class
    }
}

/// Timers the view must arm for a freshly shown toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimers {
    pub id: u64,
    pub hide_after_ms: u32,
    pub remove_after_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    default_duration_ms: u32,
    fade_ms: u32,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(3500, 300)
    }
}

impl ToastQueue {
    pub fn new(default_duration_ms: u32, fade_ms: u32) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            default_duration_ms,
            fade_ms,
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Queue a toast; `None` duration uses the default
    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        duration_ms: Option<u32>,
    ) -> ToastTimers {
        let duration_ms = duration_ms.unwrap_or(self.default_duration_ms);
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            duration_ms,
            hiding: false,
        });
        ToastTimers {
            id,
            hide_after_ms: duration_ms.saturating_sub(self.fade_ms),
            remove_after_ms: duration_ms,
        }
    }

    pub fn begin_hide(&mut self, id: u64) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.hiding = true;
        }
    }

    /// Remove a toast (timer expiry or click); unknown ids are ignored
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_uses_default_duration() {
        let mut queue = ToastQueue::new(3500, 300);
        let timers = queue.show("Olá", ToastKind::Info, None);
        assert_eq!(timers.hide_after_ms, 3200);
        assert_eq!(timers.remove_after_ms, 3500);
        assert_eq!(queue.toasts()[0].duration_ms, 3500);
    }

    #[test]
    fn test_short_duration_hides_immediately() {
        let mut queue = ToastQueue::new(3500, 300);
        let timers = queue.show("x", ToastKind::Error, Some(100));
        assert_eq!(timers.hide_after_ms, 0);
        assert_eq!(timers.remove_after_ms, 100);
    }

    #[test]
    fn test_toasts_stack_without_dedup() {
        let mut queue = ToastQueue::default();
        let a = queue.show("same", ToastKind::Success, None);
        let b = queue.show("same", ToastKind::Success, None);
        assert!(b.id > a.id);
        assert_eq!(queue.toasts().len(), 2);

        queue.dismiss(a.id);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, b.id);
        queue.dismiss(a.id);
        assert_eq!(queue.toasts().len(), 1);
    }

    #[test]
    fn test_hide_class() {
        let mut queue = ToastQueue::default();
        let t = queue.show("bye", ToastKind::Warning, None);
        assert_eq!(queue.toasts()[0].class(), "vc-toast vc-toast-warning");
        queue.begin_hide(t.id);
        assert_eq!(
            queue.toasts()[0].class(),
            "vc-toast vc-toast-warning vc-toast--hide"
        );
    }
}
