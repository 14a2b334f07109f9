use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, Url};

use crate::error::ApiError;

/// Trigger a browser download of `blob` as `file_name`.
///
/// The temporary anchor and object URL are released as soon as the click
/// has been dispatched.
pub fn save_blob(blob: &Blob, file_name: &str) -> Result<(), ApiError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ApiError::Browser("document is not available".into()))?;
    let body = document
        .body()
        .ok_or_else(|| ApiError::Browser("document has no body".into()))?;

    let url = Url::create_object_url_with_blob(blob).map_err(ApiError::browser)?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(ApiError::browser)?
        .dyn_into()
        .map_err(|_| ApiError::Browser("created element is not an anchor".into()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    body.append_child(&anchor).map_err(ApiError::browser)?;
    anchor.click();
    anchor.remove();
    Url::revoke_object_url(&url).map_err(ApiError::browser)?;

    web_sys::console::log_1(&format!("[DOWNLOAD] saved {} ({} bytes)", file_name, blob.size()).into());
    Ok(())
}
