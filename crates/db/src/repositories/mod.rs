mod faq_repo;

pub use faq_repo::FaqRepo;
