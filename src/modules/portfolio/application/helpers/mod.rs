pub mod image_url;
pub mod text;

pub use image_url::normalize_image_url;
pub use text::{split_list, split_list_default, split_paragraphs};
