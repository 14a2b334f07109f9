//! Upload Form Validation

use crate::models::{ContentType, ResizeDims, Task, UploadMetadata};

/// Snapshot of the upload form inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadForm {
    pub file_name: Option<String>,
    pub task: Option<Task>,
    pub content_type: Option<ContentType>,
    pub watermark: String,
    pub width: String,
    pub height: String,
}

/// Positive integer dimension, `None` for blank, zero, negative or non-numeric input
pub fn parse_dimension(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|v| *v > 0)
}

impl UploadForm {
    /// File, task and content type chosen; resize also needs both dimensions.
    pub fn can_submit(&self) -> bool {
        if self.file_name.is_none() || self.task.is_none() || self.content_type.is_none() {
            return false;
        }
        if self.task == Some(Task::Resize) {
            return parse_dimension(&self.width).is_some() && parse_dimension(&self.height).is_some();
        }
        true
    }

    pub fn metadata(&self) -> Option<UploadMetadata> {
        if !self.can_submit() {
            return None;
        }
        Some(UploadMetadata {
            content_type: self.content_type?,
            task: self.task?,
            watermark_string: self.watermark.clone(),
            resize: ResizeDims {
                width: parse_dimension(&self.width).unwrap_or(0),
                height: parse_dimension(&self.height).unwrap_or(0),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(task: Task) -> UploadForm {
        UploadForm {
            file_name: Some("cat.png".into()),
            task: Some(task),
            content_type: Some(ContentType::Png),
            ..Default::default()
        }
    }

    #[test]
    fn test_requires_file_task_and_content_type() {
        assert!(!UploadForm::default().can_submit());
        assert!(ready(Task::Watermark).can_submit());

        let mut form = ready(Task::Thumbnail);
        form.file_name = None;
        assert!(!form.can_submit());

        let mut form = ready(Task::Thumbnail);
        form.content_type = None;
        assert!(!form.can_submit());

        let mut form = ready(Task::Thumbnail);
        form.task = None;
        assert!(!form.can_submit());
    }

    #[test]
    fn test_resize_needs_positive_dimensions() {
        let mut form = ready(Task::Resize);
        assert!(!form.can_submit());

        form.width = "800".into();
        assert!(!form.can_submit());

        form.height = "0".into();
        assert!(!form.can_submit());

        form.height = "-3".into();
        assert!(!form.can_submit());

        form.height = "600".into();
        assert!(form.can_submit());
        assert_eq!(form.metadata().unwrap().resize, ResizeDims { width: 800, height: 600 });
    }

    #[test]
    fn test_dimensions_ignored_for_other_tasks() {
        let mut form = ready(Task::Watermark);
        form.width = "abc".into();
        form.watermark = "© me".into();
        let metadata = form.metadata().unwrap();
        assert_eq!(metadata.resize, ResizeDims::default());
        assert_eq!(metadata.watermark_string, "© me");
    }

    #[test]
    fn test_no_metadata_for_invalid_form() {
        assert!(ready(Task::Resize).metadata().is_none());
    }
}
