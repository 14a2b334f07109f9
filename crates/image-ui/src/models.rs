//! Frontend Models
//!
//! Upload metadata and responses of the image-processing API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Requested image operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    #[serde(rename = "watermark")]
    Watermark,
    #[serde(rename = "resize")]
    Resize,
    #[serde(rename = "miniature generating")]
    Thumbnail,
}

pub const TASKS: &[Task] = &[Task::Watermark, Task::Resize, Task::Thumbnail];

impl Task {
    pub fn as_str(&self) -> &'static str {
        match self {
            Task::Watermark => "watermark",
            Task::Resize => "resize",
            Task::Thumbnail => "miniature generating",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Task::Watermark => "Водяной знак",
            Task::Resize => "Изменение размера",
            Task::Thumbnail => "Генерация миниатюры",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        TASKS.iter().copied().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/gif")]
    Gif,
}

pub const CONTENT_TYPES: &[ContentType] = &[ContentType::Jpeg, ContentType::Png, ContentType::Gif];

impl ContentType {
    pub fn mime(&self) -> &'static str {
        match self {
            ContentType::Jpeg => "image/jpeg",
            ContentType::Png => "image/png",
            ContentType::Gif => "image/gif",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        CONTENT_TYPES.iter().copied().find(|c| c.mime() == value)
    }

    /// Guess from the file extension; `None` leaves the current choice alone
    pub fn from_file_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        if name.ends_with(".jpg") || name.ends_with(".jpeg") {
            Some(ContentType::Jpeg)
        } else if name.ends_with(".png") {
            Some(ContentType::Png)
        } else if name.ends_with(".gif") {
            Some(ContentType::Gif)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResizeDims {
    pub width: u32,
    pub height: u32,
}

/// `metadata` part of the multipart upload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadMetadata {
    pub content_type: ContentType,
    pub task: Task,
    pub watermark_string: String,
    pub resize: ResizeDims,
}

/// Server-assigned image ID; sent as either a string or a number
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ImageId {
    Text(String),
    Number(u64),
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageId::Text(id) => f.write_str(id),
            ImageId::Number(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub id: ImageId,
}

/// JSON answer of GET /image/{id} while the image is not ready
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessingStatus {
    #[serde(default)]
    pub status: serde_json::Value,
}

impl ProcessingStatus {
    pub fn text(&self) -> String {
        match &self.status {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// Result of looking an image up by ID
#[derive(Debug, Clone)]
pub enum ImageLookup {
    Ready(web_sys::Blob),
    Processing(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_from_file_name() {
        assert_eq!(ContentType::from_file_name("cat.jpg"), Some(ContentType::Jpeg));
        assert_eq!(ContentType::from_file_name("CAT.JPEG"), Some(ContentType::Jpeg));
        assert_eq!(ContentType::from_file_name("logo.png"), Some(ContentType::Png));
        assert_eq!(ContentType::from_file_name("anim.Gif"), Some(ContentType::Gif));
        assert_eq!(ContentType::from_file_name("photo.webp"), None);
        assert_eq!(ContentType::from_file_name("jpg"), None);
    }

    #[test]
    fn test_metadata_wire_format() {
        let metadata = UploadMetadata {
            content_type: ContentType::Png,
            task: Task::Thumbnail,
            watermark_string: String::new(),
            resize: ResizeDims::default(),
        };
        assert_eq!(
            serde_json::to_value(&metadata).unwrap(),
            serde_json::json!({
                "content_type": "image/png",
                "task": "miniature generating",
                "watermark_string": "",
                "resize": {"width": 0, "height": 0}
            })
        );
    }

    #[test]
    fn test_image_id_accepts_string_or_number() {
        let r: UploadResponse = serde_json::from_str(r#"{"id":"a1b2"}"#).unwrap();
        assert_eq!(r.id.to_string(), "a1b2");
        let r: UploadResponse = serde_json::from_str(r#"{"id":17}"#).unwrap();
        assert_eq!(r.id.to_string(), "17");
    }

    #[test]
    fn test_processing_status_text() {
        let s: ProcessingStatus = serde_json::from_str(r#"{"status":"processing"}"#).unwrap();
        assert_eq!(s.text(), "processing");
        let s: ProcessingStatus = serde_json::from_str(r#"{"status":2}"#).unwrap();
        assert_eq!(s.text(), "2");
    }

    #[test]
    fn test_task_parse() {
        assert_eq!(Task::parse("miniature generating"), Some(Task::Thumbnail));
        assert_eq!(Task::parse(""), None);
    }
}
