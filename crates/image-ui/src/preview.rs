use ui_shared::ApiError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FileReader};

/// Read `file` locally as a data URL and hand it to `on_loaded`.
pub fn read_data_url(file: &File, on_loaded: impl FnOnce(String) + 'static) -> Result<(), ApiError> {
    let reader = FileReader::new().map_err(ApiError::browser)?;
    let reader_in_cb = reader.clone();
    let onload = Closure::once_into_js(move |_: web_sys::Event| {
        match reader_in_cb.result().ok().and_then(|v| v.as_string()) {
            Some(url) => on_loaded(url),
            None => web_sys::console::error_1(&"[PREVIEW] reader returned no data URL".into()),
        }
    });
    reader.set_onload(Some(onload.unchecked_ref()));
    reader.read_as_data_url(file).map_err(ApiError::browser)
}
