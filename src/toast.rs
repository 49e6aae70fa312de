use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn icon(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (ToastKind::Success, true) => "✔",
            (ToastKind::Success, false) => "+",
            (ToastKind::Error, true) => "✘",
            (ToastKind::Error, false) => "x",
            (ToastKind::Warning, true) => "⚠",
            (ToastKind::Warning, false) => "!",
            (ToastKind::Info, true) => "ℹ",
            (ToastKind::Info, false) => "i",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    expires_at: Instant,
}

/// Transient notice queue. Each toast expires on its own clock; `prune`
/// runs once per event-loop pass.
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_ttl(Duration::from_secs(3))
    }
}

impl ToastQueue {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toasts.push_back(Toast {
            message: message.into(),
            kind,
            expires_at: Instant::now() + self.ttl,
        });
    }

    pub fn prune(&mut self) {
        let now = Instant::now();
        self.toasts.retain(|t| t.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
