pub mod assign;

pub use assign::{EMAIL_DOMAIN, assign_emails, sanitized_base};
