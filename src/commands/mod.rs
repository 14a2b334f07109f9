//! API Command Wrappers
//!
//! Frontend bindings to the items/analytics HTTP API, organized by domain.

mod analytics;
mod items;

use std::sync::OnceLock;

use ui_shared::{ApiClient, ApiConfig};

static CLIENT: OnceLock<ApiClient> = OnceLock::new();

/// Shared client, configured from the page on first use
fn client() -> &'static ApiClient {
    CLIENT.get_or_init(|| ApiClient::new(ApiConfig::from_document()))
}

// Re-export all public items
pub use analytics::*;
pub use items::*;
