//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use ui_shared::{show_notice, ApiError, Notice};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload items from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload items from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Message panel shared by every section
    pub notice: RwSignal<Option<Notice>>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), notice: RwSignal<Option<Notice>>) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            notice,
        }
    }

    /// Trigger a full reload of items
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn success(&self, text: impl Into<String>) {
        show_notice(self.notice, Notice::success(text));
    }

    pub fn error(&self, text: impl Into<String>) {
        show_notice(self.notice, Notice::error(text));
    }

    /// Report a failed request, prefixed with what was being done
    pub fn api_error(&self, action: &str, err: &ApiError) {
        self.error(err.describe(action));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_bumps_trigger() {
        let ctx = AppContext::new(signal(0), RwSignal::new(None));
        ctx.reload();
        ctx.reload();
        assert_eq!(ctx.reload_trigger.get_untracked(), 2);
    }
}
