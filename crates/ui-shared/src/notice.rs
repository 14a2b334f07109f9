//! Notice Banner
//!
//! Inline success/error message panel. Error notices hide themselves after
//! [`ERROR_HIDE_MS`]; success notices stay until replaced.

use std::sync::atomic::{AtomicU64, Ordering};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const ERROR_HIDE_MS: u32 = 5_000;

static NEXT_NOTICE_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            id: NEXT_NOTICE_ID.fetch_add(1, Ordering::Relaxed),
            kind,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, text)
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }

    /// How long the notice stays visible, `None` = until replaced
    pub fn auto_hide_ms(&self) -> Option<u32> {
        match self.kind {
            NoticeKind::Error => Some(ERROR_HIDE_MS),
            NoticeKind::Success => None,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// Show `notice` in `slot`, scheduling its removal if it auto-hides.
///
/// A later notice is never cleared by an earlier notice's timer.
pub fn show_notice(slot: RwSignal<Option<Notice>>, notice: Notice) {
    let id = notice.id;
    let hide_after = notice.auto_hide_ms();
    if notice.is_error() {
        web_sys::console::error_1(&format!("[NOTICE] {}", notice.text).into());
    }
    slot.set(Some(notice));

    if let Some(ms) = hide_after {
        spawn_local(async move {
            TimeoutFuture::new(ms).await;
            hide_if_current(slot, id);
        });
    }
}

/// Whether the timer of notice `id` may clear a slot holding `current`
fn should_hide(current: Option<&Notice>, id: u64) -> bool {
    current.is_some_and(|n| n.id == id)
}

/// Clear `slot` if it still shows notice `id`; a disposed slot is left alone.
fn hide_if_current(slot: RwSignal<Option<Notice>>, id: u64) {
    let still_shown = slot
        .try_with_untracked(|current| should_hide(current.as_ref(), id))
        .unwrap_or(false);
    if still_shown {
        slot.set(None);
    }
}

#[component]
pub fn NoticeBanner(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    view! {
        {move || notice.get().map(|n| view! {
            <div class="result-section">
                <div class=n.css_class()>{n.text.clone()}</div>
            </div>
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_auto_hide() {
        let notice = Notice::error("Ошибка: bad format");
        assert_eq!(notice.auto_hide_ms(), Some(5_000));
        assert_eq!(notice.css_class(), "error");
    }

    #[test]
    fn test_success_persists() {
        let notice = Notice::success("ID: 42");
        assert_eq!(notice.auto_hide_ms(), None);
        assert!(!notice.is_error());
    }

    #[test]
    fn test_timer_only_hides_its_own_notice() {
        let older = Notice::error("first");
        let newer = Notice::error("second");
        assert!(should_hide(Some(&older), older.id));
        assert!(!should_hide(Some(&newer), older.id));
        assert!(!should_hide(None, older.id));
    }

    #[test]
    fn test_expired_error_clears_slot() {
        let notice = Notice::error("Ошибка сети: offline");
        let id = notice.id;
        let slot = RwSignal::new(Some(notice));
        hide_if_current(slot, id);
        assert_eq!(slot.get_untracked(), None);
    }

    #[test]
    fn test_stale_timer_keeps_newer_notice() {
        let older = Notice::error("first");
        let newer = Notice::error("second");
        let slot = RwSignal::new(Some(newer.clone()));
        hide_if_current(slot, older.id);
        assert_eq!(slot.get_untracked(), Some(newer));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Notice::success("a");
        let b = Notice::success("a");
        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
    }
}
