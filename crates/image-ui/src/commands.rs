//! API Command Wrappers
//!
//! Upload, lookup and deletion of processed images.

use std::sync::OnceLock;

use ui_shared::{encode_segment, ApiClient, ApiConfig, ApiError, Payload};
use web_sys::{File, FormData};

use crate::models::{ImageId, ImageLookup, ProcessingStatus, UploadMetadata, UploadResponse};

static CLIENT: OnceLock<ApiClient> = OnceLock::new();

fn client() -> &'static ApiClient {
    CLIENT.get_or_init(|| ApiClient::new(ApiConfig::from_document()))
}

fn image_path(id: &str) -> String {
    format!("/image/{}", encode_segment(id))
}

/// POST /upload as multipart: the file under `image`, JSON under `metadata`
pub async fn upload_image(file: &File, metadata: &UploadMetadata) -> Result<ImageId, ApiError> {
    let form = FormData::new().map_err(ApiError::browser)?;
    form.append_with_blob_and_filename("image", file, &file.name())
        .map_err(ApiError::browser)?;
    form.append_with_str("metadata", &serde_json::to_string(metadata)?)
        .map_err(ApiError::browser)?;

    web_sys::console::log_1(&format!("[UPLOAD] {} ({} bytes) {:?}", file.name(), file.size(), metadata).into());
    let response: UploadResponse = client().post_form("/upload", &form).await?;
    Ok(response.id)
}

pub async fn fetch_image(id: &str) -> Result<ImageLookup, ApiError> {
    match client().get_payload(&image_path(id)).await? {
        Payload::Bytes(blob) => Ok(ImageLookup::Ready(blob)),
        Payload::Json(text) => {
            let status: ProcessingStatus = serde_json::from_str(&text)?;
            Ok(ImageLookup::Processing(status.text()))
        }
    }
}

pub async fn delete_image(id: &str) -> Result<(), ApiError> {
    client().delete(&image_path(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_path_encodes_id() {
        assert_eq!(image_path("abc-123"), "/image/abc-123");
        assert_eq!(image_path("a/b"), "/image/a%2Fb");
    }
}
