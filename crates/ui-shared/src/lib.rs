//! Shared Front-end Utilities
//!
//! HTTP client over the browser `fetch` API, notices, request sequencing
//! and small Leptos components used by both UIs.

mod api;
mod config;
mod delete_confirm_button;
mod download;
mod error;
mod notice;
mod query;
mod sequence;

pub use api::{ApiClient, Payload};
pub use config::ApiConfig;
pub use delete_confirm_button::DeleteConfirmButton;
pub use download::save_blob;
pub use error::{js_message, ApiError};
pub use notice::{show_notice, Notice, NoticeBanner, NoticeKind, ERROR_HIDE_MS};
pub use query::{encode_segment, Query};
pub use sequence::{RequestSeq, RequestTicket};
