//! User-facing Messages
//!
//! Turns request results into notices for the result panel.

use ui_shared::{ApiError, Notice};

use crate::models::ImageId;

pub const FILL_REQUIRED: &str = "Пожалуйста, заполните все обязательные поля";
pub const ENTER_ID: &str = "Пожалуйста, введите ID изображения";
pub const NO_FILE: &str = "Файл не выбран";

/// Trimmed ID field value, `None` when nothing usable was entered
pub fn entered_id(raw: &str) -> Option<&str> {
    Some(raw.trim()).filter(|id| !id.is_empty())
}

pub fn failure(prefix: &str, err: &ApiError) -> Notice {
    Notice::error(err.describe(prefix))
}

/// Notice for an upload plus the ID to put in the ID field, if any
#[derive(Debug, Clone, PartialEq)]
pub struct UploadOutcome {
    pub notice: Notice,
    pub image_id: Option<String>,
}

pub fn upload_outcome(result: Result<ImageId, ApiError>) -> UploadOutcome {
    match result {
        Ok(id) => UploadOutcome {
            notice: Notice::success(format!("Изображение успешно отправлено на обработку! ID: {}", id)),
            image_id: Some(id.to_string()),
        },
        Err(e) => UploadOutcome {
            notice: failure("Ошибка", &e),
            image_id: None,
        },
    }
}

pub fn processing(status: &str) -> Notice {
    Notice::success(format!("Изображение в обработке: {}", status))
}

pub fn deleted(id: &str) -> Notice {
    Notice::success(format!("Изображение с ID {} успешно удалено!", id))
}

pub fn delete_prompt(id: &str) -> String {
    format!("Вы уверены, что хотите удалить изображение с ID: {}?", id)
}
