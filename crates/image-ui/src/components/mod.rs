mod image_lookup;
mod upload_form;

pub use image_lookup::ImageLookupSection;
pub use upload_form::UploadFormSection;
