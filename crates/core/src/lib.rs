//! Domain layer for the FAQ service: shared types, error taxonomy, and the
//! pure validation/normalization rules applied before any storage access.

pub mod error;
pub mod faq;
pub mod types;
