mod escape;
mod pages;

pub use escape::escape_html;
pub use pages::{loading_placeholder, media_processor_shell, type_safety_test_page};
