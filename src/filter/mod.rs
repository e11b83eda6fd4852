pub mod error;
pub mod list_filter;
pub mod translation;

pub use error::FilterError;
pub use list_filter::{validate_identifier, ListFilter, SqlResult};
pub use translation::apply_translation_filter;
