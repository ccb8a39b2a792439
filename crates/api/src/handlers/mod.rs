pub mod debug;
pub mod faq;
