//! Application Context
//!
//! Signals shared by the upload form and the image lookup panel.

use leptos::prelude::*;
use ui_shared::{show_notice, Notice};

#[derive(Clone, Copy)]
pub struct ImageContext {
    /// ID field; set by a successful upload, read by lookup/delete
    pub image_id: RwSignal<String>,
    /// Loading overlay visibility
    pub loading: RwSignal<bool>,
    pub notice: RwSignal<Option<Notice>>,
}

impl ImageContext {
    pub fn new() -> Self {
        Self {
            image_id: RwSignal::new(String::new()),
            loading: RwSignal::new(false),
            notice: RwSignal::new(None),
        }
    }

    pub fn show(&self, notice: Notice) {
        show_notice(self.notice, notice);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(Notice::error(text));
    }
}

pub fn use_image_context() -> ImageContext {
    expect_context::<ImageContext>()
}
